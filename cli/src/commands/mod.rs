use markpost::browser::{self, BookmarkSource, BrowserType};
use markpost::config::Config;
use markpost::error::Result;
use std::path::Path;

pub struct AppContext<'a> {
    pub config: &'a Config,
    pub wait_for_key: bool,
}

pub mod analyze;
pub mod list;
pub mod receive;
pub mod send;

pub trait MarkpostCommand {
    fn execute(&self, ctx: &AppContext) -> Result<()>;
}

/// Enum-based dispatch for commands (avoids Box<dyn MarkpostCommand>)
pub enum CommandEnum {
    Send(send::SendCommand),
    List(list::ListCommand),
    Browsers(list::BrowsersCommand),
    Receive(receive::ReceiveCommand),
    Analyze(analyze::AnalyzeCommand),
}

impl CommandEnum {
    pub fn execute(&self, ctx: &AppContext) -> Result<()> {
        match self {
            Self::Send(cmd) => cmd.execute(ctx),
            Self::List(cmd) => cmd.execute(ctx),
            Self::Browsers(cmd) => cmd.execute(ctx),
            Self::Receive(cmd) => cmd.execute(ctx),
            Self::Analyze(cmd) => cmd.execute(ctx),
        }
    }
}

/// Bookmark source chosen by `--file` / `--browser`, else the first profile found
pub fn resolve_source(
    browser_name: Option<&str>,
    file: Option<&Path>,
) -> Result<Box<dyn BookmarkSource>> {
    if let Some(path) = file {
        return Ok(browser::source_for_file(path));
    }

    let browser = browser_name.and_then(BrowserType::from_string);
    let profile = browser::find_profile(browser)?;
    log::info!("Reading bookmarks from {}", profile.display_string());
    Ok(profile.source())
}

#[cfg(test)]
mod tests {
    use super::*;
    use markpost::tree::collect_urls;
    use tempfile::NamedTempFile;

    #[test]
    fn test_resolve_source_from_file() {
        let file = NamedTempFile::new().unwrap();
        std::fs::write(
            file.path(),
            r#"{"roots": {
                "bookmark_bar": {"type": "folder", "name": "Bar", "children": [
                    {"type": "url", "name": "A", "url": "https://a.com"}
                ]},
                "other": {"type": "folder", "name": "Other", "children": []}
            }}"#,
        )
        .unwrap();

        let source = resolve_source(Some("firefox"), Some(file.path())).unwrap();
        assert_eq!(collect_urls(&source.get_tree().unwrap()), vec!["https://a.com"]);
    }
}
