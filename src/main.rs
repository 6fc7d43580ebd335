// SPDX-License-Identifier: MPL-2.0
use reaction_picker::app::{self, Flags};
use reaction_picker::ui::theming::ThemeMode;
use tracing_subscriber::filter::{Directive, LevelFilter};
use tracing_subscriber::EnvFilter;

const HELP: &str = "\
reaction_picker

USAGE:
  reaction_picker [OPTIONS]

OPTIONS:
  --lang <TAG>          UI language (e.g. en-US, fr)
  --theme <MODE>        light, dark or system
  --config-dir <PATH>   Directory holding settings.toml
  -v, --verbose         More logging; repeat for more detail
  -h, --help            Print this help
";

struct Args {
    flags: Flags,
    verbose: u8,
    /// Rejected option values, reported once logging is up.
    warnings: Vec<String>,
}

/// Parses `--theme`; an unknown mode is rejected so the configured one applies.
fn parse_theme(raw: Option<&str>) -> Result<Option<ThemeMode>, String> {
    raw.map(str::parse::<ThemeMode>).transpose()
}

fn parse_args() -> Result<Option<Args>, pico_args::Error> {
    let mut args = pico_args::Arguments::from_env();

    if args.contains(["-h", "--help"]) {
        print!("{HELP}");
        return Ok(None);
    }

    let mut verbose = 0u8;
    while args.contains(["-v", "--verbose"]) {
        verbose = verbose.saturating_add(1);
    }

    let mut warnings = Vec::new();
    let raw_theme: Option<String> = args.opt_value_from_str("--theme")?;
    let theme = parse_theme(raw_theme.as_deref()).unwrap_or_else(|err| {
        warnings.push(format!("--theme: {err}"));
        None
    });

    let flags = Flags {
        lang: args.opt_value_from_str("--lang")?,
        theme,
        config_dir: args.opt_value_from_str("--config-dir")?,
    };

    let rest = args.finish();
    if !rest.is_empty() {
        warnings.push(format!("unused arguments: {rest:?}"));
    }

    Ok(Some(Args {
        flags,
        verbose,
        warnings,
    }))
}

fn tracing_init(verbose: u8) {
    let directive = match verbose {
        0 => "reaction_picker=info",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    let filter = EnvFilter::builder()
        .with_default_directive(
            directive
                .parse::<Directive>()
                .unwrap_or_else(|_| LevelFilter::INFO.into()),
        )
        .from_env_lossy();

    tracing_subscriber::fmt().with_env_filter(filter).init();
}

fn main() -> iced::Result {
    let args = match parse_args() {
        Ok(Some(args)) => args,
        Ok(None) => return Ok(()),
        Err(err) => {
            eprintln!("error: {err}\n\n{HELP}");
            std::process::exit(2);
        }
    };

    tracing_init(args.verbose);
    for warning in &args.warnings {
        tracing::warn!(%warning, "ignoring command-line input");
    }
    app::run(args.flags)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn theme_flag_accepts_known_modes() {
        assert_eq!(parse_theme(Some("dark")), Ok(Some(ThemeMode::Dark)));
        assert_eq!(parse_theme(Some("System")), Ok(Some(ThemeMode::System)));
        assert_eq!(parse_theme(None), Ok(None));
    }

    #[test]
    fn unknown_theme_is_reported_not_fatal() {
        let err = parse_theme(Some("purple")).expect_err("purple is not a theme");
        assert!(err.contains("purple"));
    }
}
