//! Outcome reporting through the badge and a blocking alert.

use crate::error::MarkpostError;

pub const SUCCESS_TEXT: &str = "✓";
pub const SUCCESS_COLOR: &str = "#4CAF50";
pub const FAILURE_TEXT: &str = "X";
pub const FAILURE_COLOR: &str = "#F44336";

pub const SUCCESS_MESSAGE: &str =
    "Bookmarks sent successfully! You can now return to the analyzer.";
pub const FAILURE_MESSAGE: &str =
    "Error sending bookmarks. Make sure the receiver is running and try again.";

/// Small indicator overlaid on the action's icon
pub trait Badge {
    fn set_badge_text(&mut self, text: &str);
    fn set_badge_background_color(&mut self, color: &str);
}

/// Modal message that blocks until the user dismisses it
pub trait Alert {
    fn alert(&mut self, message: &str);
}

/// Result of one export invocation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Success,
    Failure,
}

impl Outcome {
    pub fn badge_text(&self) -> &'static str {
        match self {
            Outcome::Success => SUCCESS_TEXT,
            Outcome::Failure => FAILURE_TEXT,
        }
    }

    pub fn badge_color(&self) -> &'static str {
        match self {
            Outcome::Success => SUCCESS_COLOR,
            Outcome::Failure => FAILURE_COLOR,
        }
    }

    pub fn message(&self) -> &'static str {
        match self {
            Outcome::Success => SUCCESS_MESSAGE,
            Outcome::Failure => FAILURE_MESSAGE,
        }
    }
}

/// In-memory badge; each update overwrites the previous one
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BadgeState {
    pub text: String,
    pub color: String,
}

impl Badge for BadgeState {
    fn set_badge_text(&mut self, text: &str) {
        self.text = text.to_string();
    }

    fn set_badge_background_color(&mut self, color: &str) {
        self.color = color.to_string();
    }
}

/// Turn the export result into badge + alert feedback.
///
/// Both failure kinds take the same path; only the log line tells them apart.
pub fn report<B, A>(
    result: Result<(), MarkpostError>,
    badge: &mut B,
    alert: &mut A,
) -> Outcome
where
    B: Badge + ?Sized,
    A: Alert + ?Sized,
{
    let outcome = match result {
        Ok(()) => Outcome::Success,
        Err(e) => {
            log::error!("Error sending bookmarks: {}", e);
            Outcome::Failure
        }
    };

    badge.set_badge_text(outcome.badge_text());
    badge.set_badge_background_color(outcome.badge_color());
    alert.alert(outcome.message());
    outcome
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{capture_logs, captured_errors, RecordingAlert};
    use rstest::rstest;

    #[test]
    fn test_report_success() {
        capture_logs();
        let mut badge = BadgeState::default();
        let mut alert = RecordingAlert::default();

        let outcome = report(Ok(()), &mut badge, &mut alert);

        assert_eq!(outcome, Outcome::Success);
        assert_eq!(badge.text, "✓");
        assert_eq!(badge.color, "#4CAF50");
        assert_eq!(alert.messages, vec![SUCCESS_MESSAGE]);
        assert!(captured_errors().is_empty());
    }

    #[rstest]
    #[case(MarkpostError::UnsuccessfulResponse(500))]
    #[case(MarkpostError::UnsuccessfulResponse(404))]
    #[case(MarkpostError::Browser("No browser profile with bookmarks found".to_string()))]
    fn test_report_failure(#[case] err: MarkpostError) {
        capture_logs();
        let expected_log = format!("Error sending bookmarks: {}", err);
        let mut badge = BadgeState::default();
        let mut alert = RecordingAlert::default();

        let outcome = report(Err(err), &mut badge, &mut alert);

        assert_eq!(outcome, Outcome::Failure);
        assert_eq!(badge.text, "X");
        assert_eq!(badge.color, "#F44336");
        assert_eq!(alert.messages, vec![FAILURE_MESSAGE]);
        assert_eq!(captured_errors(), vec![expected_log]);
    }

    #[test]
    fn test_badge_overwritten_by_next_report() {
        capture_logs();
        let mut badge = BadgeState::default();
        let mut alert = RecordingAlert::default();

        report(Err(MarkpostError::UnsuccessfulResponse(503)), &mut badge, &mut alert);
        report(Ok(()), &mut badge, &mut alert);

        assert_eq!(
            badge,
            BadgeState {
                text: SUCCESS_TEXT.to_string(),
                color: SUCCESS_COLOR.to_string(),
            }
        );
        assert_eq!(alert.messages, vec![FAILURE_MESSAGE, SUCCESS_MESSAGE]);
    }
}
