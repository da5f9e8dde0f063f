use super::{AppContext, MarkpostCommand};
use markpost::error::Result;
use markpost::receiver::{self, LISTEN_ADDR};
use markpost::store::BookmarkStore;

#[derive(Debug, Clone)]
pub struct ReceiveCommand;

impl MarkpostCommand for ReceiveCommand {
    fn execute(&self, _ctx: &AppContext) -> Result<()> {
        let store = BookmarkStore::open_default();
        eprintln!(
            "Waiting for bookmarks on http://{}/bookmarks (Ctrl-C to stop)",
            LISTEN_ADDR
        );

        let runtime = tokio::runtime::Builder::new_multi_thread()
            .enable_all()
            .build()?;
        runtime.block_on(receiver::serve(LISTEN_ADDR, store))
    }
}
