//! CLI parsing and command dispatch.

use std::{env, ffi::OsString, path::PathBuf};

use clap::{Parser, ValueEnum, error::ErrorKind};

use crate::{
    commands::{self, add::AddRequest},
    document::DEFAULT_GROUP,
    error::{Error, Result},
    publish::FailurePolicy,
};

/// Parsed command line arguments.
#[derive(Debug, Parser)]
#[command(
    name = "posts",
    version,
    about = "Add a link to the interesting posts page, then commit and push it"
)]
struct Cli {
    /// Url the link points to.
    #[arg(allow_hyphen_values = true)]
    url: String,
    /// Text shown for the link.
    #[arg(allow_hyphen_values = true)]
    link_name: String,
    /// Group heading to list the link under.
    #[arg(default_value = DEFAULT_GROUP, allow_hyphen_values = true)]
    group: String,
    /// Commit message for the change.
    #[arg(default_value = "Added new link", allow_hyphen_values = true)]
    message: String,
    /// Trailing arguments, accepted and ignored.
    #[arg(hide = true, allow_hyphen_values = true)]
    extra: Vec<String>,
    /// Posts file to edit, relative to the current directory.
    #[arg(long)]
    file: Option<String>,
    /// Config file to read instead of ./posts.toml.
    #[arg(long)]
    config: Option<PathBuf>,
    /// Show the change as a diff without writing or publishing.
    #[arg(long, short = 'n')]
    dry_run: bool,
    /// Write the file but skip git add, commit and push.
    #[arg(long)]
    no_publish: bool,
    /// Stop at the first failing git step.
    #[arg(long)]
    strict: bool,
    /// Control colored output.
    #[arg(long, value_enum, default_value = "auto")]
    color: ColorMode,
    /// Enable verbose output.
    #[arg(long, short = 'v')]
    verbose: bool,
}

/// Supported color output modes.
#[derive(Debug, Clone, Copy, ValueEnum)]
enum ColorMode {
    /// Only colorize when stdout is a TTY.
    Auto,
    /// Always colorize output.
    Always,
    /// Never colorize output.
    Never,
}

impl ColorMode {
    /// Convert a CLI color mode into a color choice.
    fn into_choice(self) -> commands::ColorChoice {
        match self {
            Self::Auto => commands::ColorChoice::Auto,
            Self::Always => commands::ColorChoice::Always,
            Self::Never => commands::ColorChoice::Never,
        }
    }
}

impl Cli {
    /// Build the add request from parsed arguments.
    fn into_request(self) -> AddRequest {
        AddRequest {
            url: self.url,
            name: self.link_name,
            group: self.group,
            message: self.message,
            file: self.file,
            config: self.config,
            ignored: self.extra,
            dry_run: self.dry_run,
            publish: !self.no_publish,
            policy: if self.strict {
                FailurePolicy::Abort
            } else {
                FailurePolicy::Continue
            },
        }
    }
}

/// Parse arguments, turning argument errors into a usage error.
fn parse<I, T>(args: I) -> Result<Cli>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    match Cli::try_parse_from(args) {
        Ok(cli) => Ok(cli),
        Err(error)
            if matches!(
                error.kind(),
                ErrorKind::DisplayHelp | ErrorKind::DisplayVersion
            ) =>
        {
            error.exit()
        }
        Err(error) => Err(Error::Usage {
            message: error.render().to_string().trim_end().to_string(),
        }),
    }
}

/// Run the requested command.
pub fn run() -> Result<()> {
    let cli = parse(env::args_os())?;
    let color = cli.color.into_choice();
    let verbose = cli.verbose;
    commands::add::run(color, verbose, &cli.into_request())
}

#[cfg(test)]
mod tests {
    use super::parse;
    use crate::{error::Error, publish::FailurePolicy};

    #[test]
    fn fills_positional_defaults() {
        let request = parse(["posts", "https://example.com", "Example"])
            .expect("parse")
            .into_request();
        assert_eq!(request.group, "Default");
        assert_eq!(request.message, "Added new link");
        assert!(request.publish);
        assert_eq!(request.policy, FailurePolicy::Continue);
    }

    #[test]
    fn reads_all_positionals_and_flags() {
        let request = parse([
            "posts",
            "https://example.com",
            "Example",
            "Reading",
            "Add example",
            "--no-publish",
            "--strict",
        ])
        .expect("parse")
        .into_request();
        assert_eq!(request.url, "https://example.com");
        assert_eq!(request.name, "Example");
        assert_eq!(request.group, "Reading");
        assert_eq!(request.message, "Add example");
        assert!(!request.publish);
        assert_eq!(request.policy, FailurePolicy::Abort);
    }

    #[test]
    fn accepts_hyphen_leading_values() {
        let request = parse([
            "posts",
            "https://example.com",
            "-1 weird trick",
            "-Misc",
            "--no-publish",
        ])
        .expect("parse")
        .into_request();
        assert_eq!(request.name, "-1 weird trick");
        assert_eq!(request.group, "-Misc");
        assert!(!request.publish);
    }

    #[test]
    fn ignores_extra_positionals() {
        let request = parse(["posts", "https://example.com", "Example", "Reading", "msg", "extra"])
            .expect("parse")
            .into_request();
        assert_eq!(request.message, "msg");
        assert_eq!(request.ignored, ["extra"]);
    }

    #[test]
    fn missing_link_name_is_a_usage_error() {
        let error = parse(["posts", "https://example.com"]).expect_err("usage");
        assert!(error.is_usage());
        assert!(matches!(error, Error::Usage { ref message } if message.contains("Usage:")));
    }
}
