use crate::commands::{self, AppContext, CommandEnum};
use clap::{Parser, Subcommand};
use markpost::config::Config;
use markpost::error::{MarkpostError, Result};
use std::path::PathBuf;
use std::process::ExitCode;

const BROWSERS: [&str; 4] = ["chrome", "chromium", "edge", "firefox"];

#[derive(Parser)]
#[command(author, version, about, long_about = None, disable_version_flag = true)]
pub struct Cli {
    /// Show the program version and exit
    #[arg(short = 'v', long = "version")]
    pub version: bool,

    /// Optional custom configuration file path
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Do not wait for a key press after alerts
    #[arg(long, global = true)]
    pub no_wait: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

impl Cli {
    /// Log filter used when `RUST_LOG` is unset. The receiver reports each
    /// delivery at info level, so it logs more than the one-shot commands.
    pub fn default_log_filter(&self) -> &'static str {
        match self.command {
            Some(Commands::Receive) => "info",
            _ => "error",
        }
    }
}

#[derive(Subcommand)]
pub enum Commands {
    /// Collect all bookmarks and send them to the local receiver (default)
    Send {
        /// Browser to read bookmarks from (first detected profile if omitted)
        #[arg(short, long, value_parser = BROWSERS)]
        browser: Option<String>,

        /// Bookmarks file to read instead of a detected profile
        /// (`.sqlite` is read as Firefox places, anything else as Chrome JSON)
        #[arg(short, long, conflicts_with = "browser")]
        file: Option<PathBuf>,
    },

    /// Print the collected bookmark URLs without sending them
    List {
        #[arg(short, long, value_parser = BROWSERS)]
        browser: Option<String>,

        #[arg(short, long, conflicts_with = "browser")]
        file: Option<PathBuf>,

        /// Print a JSON array instead of one URL per line
        #[arg(long)]
        json: bool,
    },

    /// List detected browser profiles
    Browsers,

    /// Run the receiver on localhost:5000
    Receive,

    /// Check every received bookmark and group the results
    Analyze {
        /// Print the grouped reports as JSON
        #[arg(long)]
        json: bool,
    },
}

impl Commands {
    fn into_command(self) -> CommandEnum {
        match self {
            Commands::Send { browser, file } => {
                CommandEnum::Send(commands::send::SendCommand { browser, file })
            }
            Commands::List {
                browser,
                file,
                json,
            } => CommandEnum::List(commands::list::ListCommand {
                browser,
                file,
                json,
            }),
            Commands::Browsers => CommandEnum::Browsers(commands::list::BrowsersCommand),
            Commands::Receive => CommandEnum::Receive(commands::receive::ReceiveCommand),
            Commands::Analyze { json } => {
                CommandEnum::Analyze(commands::analyze::AnalyzeCommand { json })
            }
        }
    }
}

pub fn handle_args(cli: Cli, config: &Config) -> Result<ExitCode> {
    let ctx = AppContext {
        config,
        wait_for_key: config.wait_for_key && !cli.no_wait,
    };

    // No subcommand behaves like clicking the action
    let command = cli.command.unwrap_or(Commands::Send {
        browser: None,
        file: None,
    });

    match command.into_command().execute(&ctx) {
        Ok(()) => Ok(ExitCode::SUCCESS),
        // Already shown to the user; only the exit status is left
        Err(MarkpostError::NotSent) => Ok(ExitCode::FAILURE),
        Err(e) => Err(e),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;
    use rstest::rstest;
    use tempfile::NamedTempFile;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_no_subcommand_parses() {
        let cli = Cli::try_parse_from(["markpost"]).unwrap();
        assert!(cli.command.is_none());
        assert!(!cli.no_wait);
    }

    #[test]
    fn test_send_with_browser() {
        let cli = Cli::try_parse_from(["markpost", "send", "--browser", "firefox", "--no-wait"])
            .unwrap();
        assert!(cli.no_wait);
        match cli.command {
            Some(Commands::Send { browser, file }) => {
                assert_eq!(browser.as_deref(), Some("firefox"));
                assert!(file.is_none());
            }
            _ => panic!("expected send"),
        }
    }

    #[rstest]
    #[case(&["markpost"], "error")]
    #[case(&["markpost", "send"], "error")]
    #[case(&["markpost", "analyze"], "error")]
    #[case(&["markpost", "receive"], "info")]
    fn test_default_log_filter(#[case] args: &[&str], #[case] expected: &str) {
        let cli = Cli::try_parse_from(args).unwrap();
        assert_eq!(cli.default_log_filter(), expected);
    }

    #[test]
    fn test_failed_send_exits_with_failure() {
        let file = NamedTempFile::new().unwrap();
        std::fs::write(file.path(), "not a bookmarks file").unwrap();
        let path = file.path().to_str().unwrap();

        let cli = Cli::try_parse_from(["markpost", "send", "--file", path, "--no-wait"]).unwrap();
        let code = handle_args(cli, &Config::default()).unwrap();
        assert_eq!(code, ExitCode::FAILURE);
    }

    #[test]
    fn test_unknown_browser_rejected() {
        assert!(Cli::try_parse_from(["markpost", "send", "--browser", "safari"]).is_err());
    }

    #[test]
    fn test_browser_and_file_conflict() {
        let result =
            Cli::try_parse_from(["markpost", "list", "--browser", "chrome", "--file", "x"]);
        assert!(result.is_err());
    }
}
