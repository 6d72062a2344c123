use clap::Parser;
use datagrump_tools::app::{self, RankCli};
use std::process::ExitCode;

fn main() -> ExitCode {
    let cli = RankCli::parse();
    let stdout = std::io::stdout();
    match app::run_ranker(&cli, &mut stdout.lock()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}
