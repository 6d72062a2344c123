use clap::Parser;
use datagrump_tools::app::{self, TemplateCli};
use std::process::ExitCode;

fn main() -> ExitCode {
    // Echoed verbatim in the provenance line.
    let invocation: Vec<String> = std::env::args_os()
        .map(|arg| arg.to_string_lossy().into_owned())
        .collect();
    let cli = TemplateCli::parse_from(&invocation);

    let stdout = std::io::stdout();
    match app::run_templater(&cli, &invocation, &mut stdout.lock()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}
