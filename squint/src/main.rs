use std::{path::PathBuf, process::ExitCode};

use clap::{value_parser, Arg, ArgAction, ArgMatches, Command};
use squint_frontend::settings::Settings;
use thiserror::Error;
use tracing::{debug, error};

#[derive(Debug, Error)]
pub enum Error {
    #[error("Initialization error")]
    Initialization,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    if let Ok(logpath) = get_logging_path() {
        let logfile = tracing_appender::rolling::daily(logpath, "log");
        tracing_subscriber::fmt()
            .compact()
            .with_writer(logfile)
            .init();
    }

    debug!("starting application");

    let mut settings = Settings::default();
    map_args_to_settings(&cli().get_matches(), &mut settings);

    match squint_frontend::run(settings).await {
        Ok(()) => {
            debug!("closing application");
            ExitCode::SUCCESS
        }
        Err(err) => {
            error!("closing application with error: {:?}", err);
            eprintln!("squint: {}", err);
            ExitCode::from(1)
        }
    }
}

fn cli() -> Command {
    Command::new("squint")
        .about("squint - read-only terminal viewer showing the byte offset under the mouse")
        .after_help(
            "Drag with the primary button to select a rectangle, release to highlight it. \
             Press C to clear the screen, Q or ESC to exit.",
        )
        .args([
            // NOTE: arguments
            Arg::new("path")
                .action(ArgAction::Set)
                .required(true)
                .value_parser(value_parser!(PathBuf))
                .help("file to view"),
            // NOTE: options
            Arg::new("header")
                .long("header")
                .action(ArgAction::Set)
                .value_name("rows")
                .value_parser(value_parser!(u16))
                .help("rows above the text box, raised to at least 6"),
            Arg::new("footer")
                .long("footer")
                .action(ArgAction::Set)
                .value_name("rows")
                .value_parser(value_parser!(u16))
                .help("rows kept free below the text"),
        ])
}

fn map_args_to_settings(args: &ArgMatches, settings: &mut Settings) {
    if let Some(path) = args.get_one::<PathBuf>("path") {
        settings.path = path.clone();
    }

    if let Some(header) = args.get_one::<u16>("header") {
        settings.header_height = *header;
    }

    if let Some(footer) = args.get_one::<u16>("footer") {
        settings.footer_height = *footer;
    }
}

fn get_logging_path() -> Result<String, Error> {
    let cache_dir = match dirs::cache_dir() {
        Some(cache_dir) => match cache_dir.to_str() {
            Some(cache_dir_string) => cache_dir_string.to_string(),
            None => return Err(Error::Initialization),
        },
        None => return Err(Error::Initialization),
    };

    Ok(format!("{}{}", cache_dir, "/squint/logs"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn map_args_to_settings_reads_margins() {
        let args = cli()
            .try_get_matches_from(["squint", "file.txt", "--header", "8", "--footer", "2"])
            .expect("valid arguments");

        let mut settings = Settings::default();
        map_args_to_settings(&args, &mut settings);

        assert_eq!(PathBuf::from("file.txt"), settings.path);
        assert_eq!(8, settings.header_height);
        assert_eq!(2, settings.footer_height);
    }

    #[test]
    fn map_args_to_settings_keeps_defaults() {
        let args = cli()
            .try_get_matches_from(["squint", "file.txt"])
            .expect("valid arguments");

        let mut settings = Settings::default();
        map_args_to_settings(&args, &mut settings);

        assert_eq!(6, settings.header_height);
        assert_eq!(0, settings.footer_height);
    }

    #[test]
    fn cli_requires_path() {
        let result = cli().try_get_matches_from(["squint"]);

        assert_eq!(
            Some(clap::error::ErrorKind::MissingRequiredArgument),
            result.err().map(|err| err.kind())
        );
    }

    #[test]
    fn cli_rejects_extra_arguments() {
        let result = cli().try_get_matches_from(["squint", "a.txt", "b.txt"]);

        assert!(result.is_err());
    }

    #[test]
    fn cli_is_valid() {
        cli().debug_assert();
    }
}
