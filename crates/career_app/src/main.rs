mod app_dirs;
mod cli;
mod platform;
mod settings;

use std::process::ExitCode;

use clap::Parser;

fn main() -> ExitCode {
    let args = cli::CliArgs::parse();
    let result = settings::resolve(&args).and_then(platform::run);
    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("career-directory: {err:#}");
            ExitCode::FAILURE
        }
    }
}
