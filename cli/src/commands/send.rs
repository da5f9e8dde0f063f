use super::{resolve_source, AppContext, MarkpostCommand};
use crate::terminal::{TerminalAlert, TerminalBadge};
use markpost::action::{BookmarkExporter, BrowserAction};
use markpost::browser::BookmarkSource;
use markpost::error::{MarkpostError, Result};
use markpost::export::Exporter;
use markpost::report::Outcome;
use markpost::tree::BookmarkNode;
use std::path::PathBuf;

#[derive(Debug, Clone)]
pub struct SendCommand {
    pub browser: Option<String>,
    pub file: Option<PathBuf>,
}

/// Source whose lookup may have failed; the failure surfaces on the badge
/// like any other export failure.
enum SelectedSource {
    Ready(Box<dyn BookmarkSource>),
    Unavailable(String),
}

impl BookmarkSource for SelectedSource {
    fn get_tree(&self) -> Result<Vec<BookmarkNode>> {
        match self {
            SelectedSource::Ready(source) => source.get_tree(),
            SelectedSource::Unavailable(reason) => Err(MarkpostError::Browser(reason.clone())),
        }
    }
}

impl MarkpostCommand for SendCommand {
    fn execute(&self, ctx: &AppContext) -> Result<()> {
        let source = match resolve_source(self.browser.as_deref(), self.file.as_deref()) {
            Ok(source) => SelectedSource::Ready(source),
            Err(e) => SelectedSource::Unavailable(e.to_string()),
        };

        let exporter = Exporter::new();
        log::info!("Exporting bookmarks to {}", exporter.endpoint());

        let mut action = BrowserAction::new();
        action.add_listener(BookmarkExporter::new(
            source,
            exporter,
            TerminalBadge::new(),
            TerminalAlert::new(ctx.wait_for_key),
        ));
        action.click();

        match action.listener().and_then(|l| l.last_outcome()) {
            Some(Outcome::Failure) => Err(MarkpostError::NotSent),
            _ => Ok(()),
        }
    }
}
