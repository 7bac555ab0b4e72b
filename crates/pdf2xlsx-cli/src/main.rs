mod cli;
mod convert_cmd;
mod logging;
mod page_range;
mod prompt;

use clap::Parser;
use cli::Cli;

fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    if let Err(code) = convert_cmd::run(&cli) {
        std::process::exit(code);
    }
}
