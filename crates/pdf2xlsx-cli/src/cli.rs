use std::path::PathBuf;

use clap::{ArgAction, Parser, ValueEnum};

/// Convert the tables of a PDF document into an xlsx workbook.
///
/// Without a FILE argument the file name is read from standard input and
/// looked up in the input directory. The workbook is written to the output
/// directory under the same stem with an .xlsx extension.
#[derive(Debug, Parser)]
#[command(name = "pdf2xlsx", about, version)]
pub struct Cli {
    /// PDF file name inside the input directory (prompted for when omitted)
    #[arg(value_name = "FILE")]
    pub file: Option<String>,

    /// Directory the PDF is read from
    #[arg(long, value_name = "DIR", default_value = "input")]
    pub input_dir: PathBuf,

    /// Directory the workbook is written to
    #[arg(long, value_name = "DIR", default_value = "output")]
    pub output_dir: PathBuf,

    /// Table detection strategy
    #[arg(long, value_enum, default_value_t = TableStrategy::Lattice)]
    pub strategy: TableStrategy,

    /// Page range (e.g. '1,3-5'). Default: all pages
    #[arg(long)]
    pub pages: Option<String>,

    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

/// Table detection strategy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum TableStrategy {
    /// Detect tables using visible lines and rect edges
    Lattice,
    /// Detect tables from text alignment patterns
    Stream,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_fixed_layout() {
        let cli = Cli::parse_from(["pdf2xlsx"]);
        assert_eq!(cli.file, None);
        assert_eq!(cli.input_dir, PathBuf::from("input"));
        assert_eq!(cli.output_dir, PathBuf::from("output"));
        assert_eq!(cli.strategy, TableStrategy::Lattice);
        assert_eq!(cli.pages, None);
        assert_eq!(cli.verbose, 0);
    }

    #[test]
    fn all_options() {
        let cli = Cli::parse_from([
            "pdf2xlsx",
            "report.pdf",
            "--input-dir",
            "in",
            "--output-dir",
            "out",
            "--strategy",
            "stream",
            "--pages",
            "1,3-5",
            "-vv",
        ]);
        assert_eq!(cli.file.as_deref(), Some("report.pdf"));
        assert_eq!(cli.input_dir, PathBuf::from("in"));
        assert_eq!(cli.output_dir, PathBuf::from("out"));
        assert_eq!(cli.strategy, TableStrategy::Stream);
        assert_eq!(cli.pages.as_deref(), Some("1,3-5"));
        assert_eq!(cli.verbose, 2);
    }

    #[test]
    fn unknown_strategy_rejected() {
        assert!(Cli::try_parse_from(["pdf2xlsx", "--strategy", "magic"]).is_err());
    }
}
