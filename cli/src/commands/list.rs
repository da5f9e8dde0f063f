use super::{resolve_source, AppContext, MarkpostCommand};
use markpost::browser;
use markpost::error::Result;
use markpost::tree::{collect_urls, count_urls};
use owo_colors::OwoColorize;
use std::path::PathBuf;

#[derive(Debug, Clone)]
pub struct ListCommand {
    pub browser: Option<String>,
    pub file: Option<PathBuf>,
    pub json: bool,
}

impl MarkpostCommand for ListCommand {
    fn execute(&self, _ctx: &AppContext) -> Result<()> {
        let source = resolve_source(self.browser.as_deref(), self.file.as_deref())?;
        let urls = collect_urls(&source.get_tree()?);

        if self.json {
            println!("{}", serde_json::to_string_pretty(&urls)?);
        } else {
            for url in &urls {
                println!("{}", url);
            }
            eprintln!("{} bookmark(s)", urls.len());
        }
        Ok(())
    }
}

#[derive(Debug, Clone)]
pub struct BrowsersCommand;

impl MarkpostCommand for BrowsersCommand {
    fn execute(&self, _ctx: &AppContext) -> Result<()> {
        let profiles = browser::detect_browsers();
        if profiles.is_empty() {
            eprintln!("No browser profiles with bookmarks found");
            return Ok(());
        }

        for profile in profiles {
            let count = match profile.source().get_tree() {
                Ok(forest) => count_urls(&forest).to_string(),
                Err(e) => {
                    log::warn!("Could not read {}: {}", profile.display_string(), e);
                    "?".to_string()
                }
            };
            println!(
                "{} ({} bookmarks)\n  {} {}",
                profile.display_string().bold().green(),
                count,
                ">".red(),
                profile.path.display().to_string().yellow()
            );
        }
        Ok(())
    }
}
