use std::ffi::OsString;
use std::io::Write;
use std::process::ExitCode;

use clap::error::ErrorKind;
use clap::{Arg, ArgAction, Command};
use logging::{LEVEL_ENV_VAR, Level};

const PROGRAM_NAME: &str = "slog";

/// A parsed command line.
#[derive(Debug, PartialEq, Eq)]
struct Invocation {
    threshold: Option<Level>,
    level: Level,
    message: String,
}

/// Builds the `clap` command used for parsing.
fn clap_command() -> Command {
    Command::new(PROGRAM_NAME)
        .version(env!("CARGO_PKG_VERSION"))
        .about("Write one line through the leveled logger.")
        .after_help(format!(
            "The threshold starts from {LEVEL_ENV_VAR} when set; --threshold overrides it.\n\
             Logging at FATAL aborts the process unless the threshold is OFF."
        ))
        .arg(
            Arg::new("threshold")
                .long("threshold")
                .short('t')
                .value_name("LEVEL")
                .help("Suppress lines below LEVEL (debug, info, warn, error, fatal, off or 0-5).")
                .value_parser(parse_level)
                .action(ArgAction::Set),
        )
        .arg(
            Arg::new("level")
                .value_name("LEVEL")
                .help("Level of the line to write.")
                .required(true)
                .value_parser(parse_level),
        )
        .arg(
            Arg::new("message")
                .value_name("MESSAGE")
                .help("Words of the message, joined with single spaces.")
                .required(true)
                .num_args(1..)
                .allow_hyphen_values(true)
                .trailing_var_arg(true)
                .action(ArgAction::Append),
        )
}

fn parse_level(value: &str) -> Result<Level, logging::ParseLevelError> {
    value.parse()
}

/// Parses command-line arguments into an [`Invocation`].
fn parse_args<I, S>(arguments: I) -> Result<Invocation, clap::Error>
where
    I: IntoIterator<Item = S>,
    S: Into<OsString>,
{
    let mut args: Vec<OsString> = arguments.into_iter().map(Into::into).collect();

    if args.is_empty() {
        args.push(OsString::from(PROGRAM_NAME));
    }

    let mut matches = clap_command().try_get_matches_from(args)?;

    let threshold = matches.remove_one::<Level>("threshold");
    let level = matches
        .remove_one::<Level>("level")
        .unwrap_or_default();
    let message = matches
        .remove_many::<String>("message")
        .map(|words| words.collect::<Vec<_>>().join(" "))
        .unwrap_or_default();

    Ok(Invocation {
        threshold,
        level,
        message,
    })
}

/// Runs the `slog` front-end.
///
/// `stdout` and `stderr` receive help output and diagnostics; the logged line
/// itself goes to the default logger's destination for its level.
#[must_use]
pub fn run_with<I, Out, Err>(args: I, stdout: &mut Out, stderr: &mut Err) -> ExitCode
where
    I: IntoIterator,
    I::Item: Into<OsString>,
    Out: Write,
    Err: Write,
{
    let invocation = match parse_args(args) {
        Ok(invocation) => invocation,
        Err(error) => return report_clap_error(&error, stdout, stderr),
    };

    if let Err(error) = logging::init_from_env() {
        let _ = writeln!(stderr, "{PROGRAM_NAME}: {LEVEL_ENV_VAR}: {error}");
        return ExitCode::FAILURE;
    }
    if let Some(threshold) = invocation.threshold {
        logging::set_threshold(threshold);
    }

    logging::default_logger().log(invocation.level, format_args!("{}", invocation.message));
    ExitCode::SUCCESS
}

fn report_clap_error<Out, Err>(error: &clap::Error, stdout: &mut Out, stderr: &mut Err) -> ExitCode
where
    Out: Write,
    Err: Write,
{
    match error.kind() {
        ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => {
            let _ = write!(stdout, "{}", error.render());
            ExitCode::SUCCESS
        }
        _ => {
            let _ = write!(stderr, "{}", error.render());
            ExitCode::FAILURE
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_level_and_joins_message_words() {
        let invocation = parse_args(["slog", "warn", "disk", "low"]).expect("valid arguments");
        assert_eq!(
            invocation,
            Invocation {
                threshold: None,
                level: Level::Warn,
                message: "disk low".to_owned(),
            }
        );
    }

    #[test]
    fn parses_threshold_names_and_codes() {
        let by_name = parse_args(["slog", "--threshold", "ERROR", "info", "x"]).expect("name");
        assert_eq!(by_name.threshold, Some(Level::Error));

        let by_code = parse_args(["slog", "-t", "5", "4", "x"]).expect("code");
        assert_eq!(by_code.threshold, Some(Level::Off));
        assert_eq!(by_code.level, Level::Fatal);
    }

    #[test]
    fn unknown_level_is_a_usage_error() {
        let mut stdout = Vec::new();
        let mut stderr = Vec::new();
        let exit = run_with(["slog", "loud", "x"], &mut stdout, &mut stderr);

        assert_eq!(exit, ExitCode::FAILURE);
        assert!(stdout.is_empty());
        let diagnostic = String::from_utf8(stderr).expect("utf-8");
        assert!(diagnostic.contains("unrecognised log level \"loud\""), "{diagnostic}");
    }

    #[test]
    fn missing_message_is_a_usage_error() {
        let mut stdout = Vec::new();
        let mut stderr = Vec::new();
        let exit = run_with(["slog", "info"], &mut stdout, &mut stderr);

        assert_eq!(exit, ExitCode::FAILURE);
        assert!(!stderr.is_empty());
    }

    #[test]
    fn help_goes_to_stdout() {
        let mut stdout = Vec::new();
        let mut stderr = Vec::new();
        let exit = run_with(["slog", "--help"], &mut stdout, &mut stderr);

        assert_eq!(exit, ExitCode::SUCCESS);
        assert!(stderr.is_empty());
        let help = String::from_utf8(stdout).expect("utf-8");
        assert!(help.contains("--threshold"));
        assert!(help.contains(LEVEL_ENV_VAR));
    }
}
