use std::process::ExitCode;

use tracing::error;
use wxstat_cli::{Command, USAGE};
use wxstat_config::AppConfig;
use wxstat_obs::LogFormat;

fn main() -> ExitCode {
    let options = match wxstat_cli::parse_args(std::env::args().skip(1)) {
        Ok(Command::Run(options)) => options,
        Ok(Command::Help) => {
            print!("{USAGE}");
            return ExitCode::SUCCESS;
        }
        Err(e) => {
            eprintln!("wxstat: {e}\n\n{USAGE}");
            return ExitCode::from(2);
        }
    };

    // Config (logging settings live here, so it is loaded before logging starts)
    let cfg = match AppConfig::load() {
        Ok(cfg) => cfg,
        Err(e) => {
            eprintln!("wxstat: failed to load config: {e}");
            return ExitCode::FAILURE;
        }
    };

    // Observability
    let log_format = if options.log_json || cfg.log_json() {
        LogFormat::Json
    } else {
        LogFormat::Text
    };
    wxstat_obs::init("wxstat", &cfg.log_filter(), log_format);

    match wxstat_cli::run(&options, &cfg) {
        Ok(report) => {
            print!("{report}");
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!(error = %format!("{e:#}"), "Failed to produce report");
            eprintln!("wxstat: {e:#}");
            ExitCode::FAILURE
        }
    }
}
