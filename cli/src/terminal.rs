//! Terminal renditions of the action badge and the blocking alert.

use crate::output::colorize::hex_to_rgb;
use console::Term;
use markpost::report::{Alert, Badge, BadgeState};
use owo_colors::OwoColorize;

/// Badge drawn on stderr. An update is complete once its color is set, so
/// that is when it gets drawn.
#[derive(Default)]
pub struct TerminalBadge {
    state: BadgeState,
}

impl TerminalBadge {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn render(&self) -> String {
        let label = format!(" {} ", self.state.text);
        match hex_to_rgb(&self.state.color) {
            Some((r, g, b)) => label
                .on_truecolor(r, g, b)
                .truecolor(255, 255, 255)
                .bold()
                .to_string(),
            None => label,
        }
    }
}

impl Badge for TerminalBadge {
    fn set_badge_text(&mut self, text: &str) {
        self.state.set_badge_text(text);
    }

    fn set_badge_background_color(&mut self, color: &str) {
        self.state.set_badge_background_color(color);
        eprintln!("{}", self.render());
    }
}

/// Prints the message and, on an interactive terminal, waits for a key
pub struct TerminalAlert {
    wait_for_key: bool,
}

impl TerminalAlert {
    pub fn new(wait_for_key: bool) -> Self {
        Self { wait_for_key }
    }

    /// Block for a key only when enabled and `term` is interactive
    fn waits_on(&self, term: &Term) -> bool {
        self.wait_for_key && term.is_term()
    }
}

impl Alert for TerminalAlert {
    fn alert(&mut self, message: &str) {
        let term = Term::stdout();
        println!("{}", message);

        if !self.waits_on(&term) {
            return;
        }

        println!("{}", "Press any key to continue...".dimmed());
        if let Err(e) = term.read_key() {
            log::debug!("Could not wait for key press: {}", e);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use markpost::report::{FAILURE_COLOR, FAILURE_TEXT, SUCCESS_COLOR, SUCCESS_TEXT};

    #[test]
    fn test_render_success_badge() {
        let mut badge = TerminalBadge::new();
        badge.set_badge_text(SUCCESS_TEXT);
        badge.set_badge_background_color(SUCCESS_COLOR);

        let rendered = badge.render();
        assert!(rendered.contains(" ✓ "));
        // 24-bit background escape for #4CAF50
        assert!(rendered.contains("48;2;76;175;80"));
    }

    #[test]
    fn test_render_failure_badge() {
        let mut badge = TerminalBadge::new();
        badge.set_badge_text(FAILURE_TEXT);
        badge.set_badge_background_color(FAILURE_COLOR);

        let rendered = badge.render();
        assert!(rendered.contains(" X "));
        assert!(rendered.contains("48;2;244;67;54"));
    }

    #[test]
    fn test_render_without_color() {
        let mut badge = TerminalBadge::new();
        badge.set_badge_text("?");
        assert_eq!(badge.render(), " ? ");
    }

    #[test]
    fn test_alert_without_wait_never_blocks() {
        let alert = TerminalAlert::new(false);
        assert!(!alert.waits_on(&Term::stdout()));
        assert!(!alert.waits_on(&Term::stderr()));
    }

    #[test]
    fn test_alert_skips_wait_off_terminal() {
        let alert = TerminalAlert::new(true);
        let stdout = Term::stdout();
        assert_eq!(alert.waits_on(&stdout), stdout.is_term());
    }
}
