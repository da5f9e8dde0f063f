//! Toolbar action dispatch and the bookmark exporter handler.
//!
//! A [`BrowserAction`] holds at most one listener for its click event. The
//! [`BookmarkExporter`] is that listener: collect, export, report.

use crate::browser::BookmarkSource;
use crate::export::Exporter;
use crate::report::{report, Alert, Badge, Outcome};
use crate::tree::collect_urls;
use std::cell::RefCell;
use std::rc::Rc;

/// Handler invoked when the action is clicked
pub trait ActionListener {
    fn on_clicked(&mut self);
}

impl<F: FnMut()> ActionListener for F {
    fn on_clicked(&mut self) {
        self()
    }
}

/// Click event source with a single registered listener
pub struct BrowserAction<L> {
    listener: Option<L>,
}

impl<L: ActionListener> BrowserAction<L> {
    pub fn new() -> Self {
        Self { listener: None }
    }

    /// Register the click handler, replacing any earlier one
    pub fn add_listener(&mut self, listener: L) {
        if self.listener.replace(listener).is_some() {
            log::warn!("Replacing the existing action listener");
        }
    }

    pub fn listener(&self) -> Option<&L> {
        self.listener.as_ref()
    }

    /// Fire one click event. Returns false when nobody is listening.
    pub fn click(&mut self) -> bool {
        match self.listener.as_mut() {
            Some(listener) => {
                listener.on_clicked();
                true
            }
            None => {
                log::debug!("Action clicked with no listener registered");
                false
            }
        }
    }
}

impl<L: ActionListener> Default for BrowserAction<L> {
    fn default() -> Self {
        Self::new()
    }
}

/// Collects every bookmark URL and posts it to the receiver on each click
pub struct BookmarkExporter<S, B, A> {
    source: S,
    exporter: Exporter,
    badge: B,
    alert: A,
    last_outcome: Option<Outcome>,
}

impl<S, B, A> BookmarkExporter<S, B, A>
where
    S: BookmarkSource,
    B: Badge,
    A: Alert,
{
    pub fn new(source: S, exporter: Exporter, badge: B, alert: A) -> Self {
        Self {
            source,
            exporter,
            badge,
            alert,
            last_outcome: None,
        }
    }

    /// Run one invocation end to end. Failures end here; nothing is returned
    /// but the outcome shown on the badge.
    pub fn run(&mut self) -> Outcome {
        let result = self.source.get_tree().and_then(|forest| {
            let urls = collect_urls(&forest);
            log::info!("Collected {} bookmarks", urls.len());
            self.exporter.send(&urls)
        });

        let outcome = report(result, &mut self.badge, &mut self.alert);
        self.last_outcome = Some(outcome);
        outcome
    }

    /// Outcome of the most recent invocation
    pub fn last_outcome(&self) -> Option<Outcome> {
        self.last_outcome
    }

    pub fn badge(&self) -> &B {
        &self.badge
    }

    pub fn alert(&self) -> &A {
        &self.alert
    }
}

impl<S, B, A> ActionListener for BookmarkExporter<S, B, A>
where
    S: BookmarkSource,
    B: Badge,
    A: Alert,
{
    fn on_clicked(&mut self) {
        self.run();
    }
}

impl<B: Badge> Badge for Rc<RefCell<B>> {
    fn set_badge_text(&mut self, text: &str) {
        self.borrow_mut().set_badge_text(text);
    }

    fn set_badge_background_color(&mut self, color: &str) {
        self.borrow_mut().set_badge_background_color(color);
    }
}

impl<A: Alert> Alert for Rc<RefCell<A>> {
    fn alert(&mut self, message: &str) {
        self.borrow_mut().alert(message);
    }
}
