use super::{AppContext, MarkpostCommand};
use crate::analyze_ui::analyze_with_progress;
use crate::output::colorize::render_analysis;
use markpost::analyze::Analysis;
use markpost::error::Result;
use markpost::store::BookmarkStore;

#[derive(Debug, Clone)]
pub struct AnalyzeCommand {
    pub json: bool,
}

impl MarkpostCommand for AnalyzeCommand {
    fn execute(&self, ctx: &AppContext) -> Result<()> {
        let store = BookmarkStore::open_default();
        let urls = store.load()?;

        if urls.is_empty() {
            eprintln!("No bookmarks received yet. Run `markpost receive`, then `markpost send`.");
            return Ok(());
        }

        eprintln!("Found {} bookmarks. Analyzing...", urls.len());
        let analysis = Analysis::group(analyze_with_progress(&urls, ctx.config)?);

        if self.json {
            println!("{}", serde_json::to_string_pretty(&analysis)?);
        } else {
            print!("{}", render_analysis(&analysis));
        }
        Ok(())
    }
}
