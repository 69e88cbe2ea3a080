mod cli;
mod pipeline;
mod settings;

use std::fmt::Display;
use std::io::Write;
use std::process::ExitCode;

use clap::CommandFactory;
use imgcat_common::ConfigError;
use tracing_subscriber::filter::{Directive, LevelFilter};
use tracing_subscriber::EnvFilter;

use crate::settings::Settings;

/// Exit status for configuration and usage errors.
const USAGE_EXIT: u8 = 2;

fn main() -> ExitCode {
    // Parse CLI arguments
    let args = cli::parse();

    // Initialize logging
    let log_directive = args.log_level.as_deref().unwrap_or("imgcat=info");
    let directive: Directive = log_directive.parse().unwrap_or_else(|_| {
        eprintln!("ignoring invalid --log-level {log_directive:?}");
        LevelFilter::INFO.into()
    });
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(EnvFilter::from_default_env().add_directive(directive))
        .init();

    if let Some(path) = &args.init_config {
        return match imgcat_config::create_default_config(path) {
            Ok(()) => ExitCode::SUCCESS,
            Err(e) => fatal(e),
        };
    }

    // Load preset
    let preset = match imgcat_config::load_config(args.config.as_deref()) {
        Ok(preset) => preset,
        Err(e) => return usage_error(&e),
    };

    let settings = match Settings::resolve(&args, &preset) {
        Ok(settings) => settings,
        Err(e) => return usage_error(&e),
    };

    match pipeline::run(&settings) {
        Ok(plan) => {
            if args.dry_run {
                match serde_json::to_string_pretty(&plan) {
                    Ok(json) => println!("{json}"),
                    Err(e) => return fatal(format!("failed to serialize layout: {e}")),
                }
            }
            ExitCode::SUCCESS
        }
        Err(e) => fatal(e),
    }
}

/// Report a fatal error on stderr regardless of the log filter.
fn fatal(err: impl Display) -> ExitCode {
    report(std::io::stderr().lock(), &err);
    ExitCode::FAILURE
}

fn report(mut writer: impl Write, err: &dyn Display) {
    // Nothing left to report to if stderr is gone.
    let _ = writeln!(writer, "imgcat: {err}");
}

/// Report a configuration problem followed by the usage text.
fn usage_error(err: &ConfigError) -> ExitCode {
    eprintln!("{err}\n");
    eprintln!("{}", cli::Args::command().render_help());
    ExitCode::from(USAGE_EXIT)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fatal_errors_bypass_the_log_filter() {
        let silent = tracing_subscriber::fmt()
            .with_max_level(LevelFilter::OFF)
            .finish();
        let mut out = Vec::new();
        tracing::subscriber::with_default(silent, || {
            report(&mut out, &"failed to decode a.png: bad magic");
        });
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "imgcat: failed to decode a.png: bad magic\n"
        );
    }
}
