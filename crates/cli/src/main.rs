use clap::Parser;
use geopyspark_cli::args::Args;
use geopyspark_cli::config::ReportConfig;
use std::io;
use std::process::ExitCode;

fn main() -> ExitCode {
    let args = Args::parse();
    let config = ReportConfig::from(args);

    env_logger::Builder::new()
        .filter_level(config.log_level())
        .parse_default_env()
        .init();

    let stdout = io::stdout();
    match geopyspark_cli::run(&config, &mut stdout.lock()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}
