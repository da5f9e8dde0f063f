use indicatif::{ProgressBar, ProgressStyle};
use markpost::analyze::{LinkAnalyzer, LinkReport};
use markpost::config::Config;
use markpost::error::{MarkpostError, Result};
use rayon::prelude::*;

/// Check every URL on a pool of `analyze_workers` threads with a progress bar.
///
/// Reports come back in the same order as `urls`.
pub fn analyze_with_progress(urls: &[String], config: &Config) -> Result<Vec<LinkReport>> {
    let analyzer = LinkAnalyzer::new(config)?;
    let pool = rayon::ThreadPoolBuilder::new()
        .num_threads(config.analyze_workers)
        .build()
        .map_err(|e| MarkpostError::Other(format!("Failed to start worker pool: {}", e)))?;

    let pb = ProgressBar::new(urls.len() as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{msg} [{bar:40.cyan/blue}] {pos}/{len}")
            .map_err(|e| MarkpostError::Other(e.to_string()))?
            .progress_chars("=>-"),
    );
    pb.set_message("Analyzing bookmarks");

    let reports: Vec<LinkReport> = pool.install(|| {
        urls.par_iter()
            .map(|url| {
                let report = analyzer.check(url);
                pb.set_message(truncate_url(url, 40));
                pb.inc(1);
                report
            })
            .collect()
    });

    pb.finish_and_clear();
    Ok(reports)
}

/// Truncate URL to specified length with ellipsis
pub fn truncate_url(url: &str, max_len: usize) -> String {
    if url.chars().count() <= max_len {
        return url.to_string();
    }
    // Reserve 3 chars for "..."
    let kept: String = url.chars().take(max_len.saturating_sub(3)).collect();
    format!("{}...", kept)
}
