use clap::Parser;
use katilim_report::cli::{Cli, run};
use katilim_report::logging;

fn main() -> std::process::ExitCode {
    dotenvy::dotenv().ok();
    logging::init_logging();
    run(Cli::parse())
}
