use markpost::analyze::{Analysis, LinkReport};
use owo_colors::OwoColorize;

pub trait Colorize {
    fn to_colored(&self) -> String;
}

/// Parse `#rrggbb` into its components
pub fn hex_to_rgb(hex: &str) -> Option<(u8, u8, u8)> {
    let digits = hex.strip_prefix('#')?;
    if digits.len() != 6 || !digits.is_ascii() {
        return None;
    }
    let channel = |i: usize| u8::from_str_radix(&digits[i..i + 2], 16).ok();
    Some((channel(0)?, channel(2)?, channel(4)?))
}

pub struct ColorizeReport<'a>(pub &'a LinkReport);

impl<'a> Colorize for ColorizeReport<'a> {
    fn to_colored(&self) -> String {
        let report = self.0;
        let label = report.display_text();
        let head = match hex_to_rgb(report.status.color()) {
            Some((r, g, b)) => label.truecolor(r, g, b).bold().to_string(),
            None => label.to_string(),
        };

        let mut s = format!("  {}\n", head);
        if label != report.url {
            s.push_str(&format!("    {} {}\n", ">".red(), report.url.yellow()));
        }
        s.push_str(&format!(
            "    {} {} ({})\n",
            "+".red(),
            report.status,
            report.status_code
        ));
        s
    }
}

/// Sections and summary for a finished analysis
pub fn render_analysis(analysis: &Analysis) -> String {
    let sections = [
        ("Active Links with Metadata", &analysis.active),
        ("Active Links without Metadata", &analysis.no_metadata),
        ("Dead Links", &analysis.dead),
    ];

    let mut s = String::new();
    for (title, reports) in sections {
        s.push_str(&format!("{}\n", title.bold().underline()));
        if reports.is_empty() {
            s.push_str(&format!("  {}\n", "(none)".dimmed()));
        }
        for report in reports {
            s.push_str(&ColorizeReport(report).to_colored());
        }
        s.push('\n');
    }

    s.push_str(&format!("{}\n", "Summary".bold().underline()));
    s.push_str(&format!("Total bookmarks: {}\n", analysis.total()));
    s.push_str(&format!(
        "Active links with metadata: {}\n",
        analysis.active.len()
    ));
    s.push_str(&format!(
        "Active links without metadata: {}\n",
        analysis.no_metadata.len()
    ));
    s.push_str(&format!("Dead links: {}\n", analysis.dead.len()));
    s
}

#[cfg(test)]
mod tests {
    use super::*;
    use markpost::analyze::classify;
    use reqwest::StatusCode;
    use rstest::rstest;

    #[rstest]
    #[case("#4CAF50", Some((76, 175, 80)))]
    #[case("#F44336", Some((244, 67, 54)))]
    #[case("#ffa500", Some((255, 165, 0)))]
    #[case("4CAF50", None)]
    #[case("#4CAF5", None)]
    #[case("#zzzzzz", None)]
    #[case("", None)]
    fn test_hex_to_rgb(#[case] hex: &str, #[case] expected: Option<(u8, u8, u8)>) {
        assert_eq!(hex_to_rgb(hex), expected);
    }

    #[test]
    fn test_colorize_report_with_title() {
        let report = classify("https://a.com", StatusCode::OK, "<title>Alpha</title>");
        let colored = ColorizeReport(&report).to_colored();

        assert!(colored.contains("Alpha"));
        assert!(colored.contains("https://a.com"));
        assert!(colored.contains("Active (200)"));
    }

    #[test]
    fn test_colorize_report_without_title_shows_url_once() {
        let report = classify("https://b.com", StatusCode::NOT_FOUND, "");
        let colored = ColorizeReport(&report).to_colored();

        assert_eq!(colored.matches("https://b.com").count(), 1);
        assert!(colored.contains("Inactive (404)"));
    }

    #[test]
    fn test_render_analysis_summary() {
        let analysis = Analysis::group(vec![
            classify("https://a.com", StatusCode::OK, "<title>A</title>"),
            classify("https://b.com", StatusCode::OK, ""),
        ]);

        let rendered = render_analysis(&analysis);
        assert!(rendered.contains("Total bookmarks: 2"));
        assert!(rendered.contains("Active links with metadata: 1"));
        assert!(rendered.contains("Active links without metadata: 1"));
        assert!(rendered.contains("Dead links: 0"));
        assert!(rendered.contains("(none)"));
    }
}
