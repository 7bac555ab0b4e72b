use std::io;

use pdf2xlsx::{PathLayout, Strategy, TableSettings, convert};
use tracing::{debug, info};

use crate::cli::{Cli, TableStrategy};
use crate::page_range::parse_page_range;
use crate::prompt::ask_file_name;

pub fn run(cli: &Cli) -> Result<(), i32> {
    let file_name = match &cli.file {
        Some(name) => name.clone(),
        None => {
            let stdin = io::stdin();
            ask_file_name(&mut stdin.lock(), &mut io::stdout()).map_err(report)?
        }
    };

    let pages = cli
        .pages
        .as_deref()
        .map(parse_page_range)
        .transpose()
        .map_err(report)?;

    let config = PathLayout::new(&cli.input_dir, &cli.output_dir)
        .resolve(&file_name)
        .with_table_settings(build_settings(cli.strategy))
        .with_pages(pages);
    debug!(
        input = %config.input.display(),
        output = %config.output.display(),
        strategy = ?cli.strategy,
        "resolved run"
    );

    let summary = convert(&config).map_err(report)?;
    info!(
        pages = summary.pages,
        tables = summary.tables,
        rows = summary.output_rows,
        "conversion finished"
    );
    println!(
        "Converted PDF to Excel and saved: {}",
        summary.output.display()
    );
    Ok(())
}

fn build_settings(strategy: TableStrategy) -> TableSettings {
    let strategy = match strategy {
        TableStrategy::Lattice => Strategy::Lattice,
        TableStrategy::Stream => Strategy::Stream,
    };
    TableSettings {
        strategy,
        ..TableSettings::default()
    }
}

fn report(e: impl std::fmt::Display) -> i32 {
    eprintln!("Error: {e}");
    1
}
