use log_event_analyzer::{ConfigError, cli_parse, logging, run};
use std::process::ExitCode;

fn main() -> ExitCode {
    let cli = cli_parse();

    if let Err(e) = logging::init_tracing(&cli.log_level) {
        eprintln!("Error: {e:#}");
        return ExitCode::from(2);
    }

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e:#}");
            // Bad arguments share clap's usage-error status
            if e.downcast_ref::<ConfigError>().is_some() {
                ExitCode::from(2)
            } else {
                ExitCode::FAILURE
            }
        }
    }
}
