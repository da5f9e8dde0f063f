//! Link analysis: fetch each stored URL and classify it.

use crate::config::Config;
use crate::error::Result;
use reqwest::blocking::Client;
use reqwest::StatusCode;
use serde::Serialize;
use std::fmt;
use std::time::Duration;
use tl::ParserOptions;

pub const NOT_AVAILABLE: &str = "N/A";
pub const NO_DESCRIPTION: &str = "No description found";
const METADATA_NOT_ACCESSIBLE: &str = "Metadata not accessible";

/// Classification of one analyzed link
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum LinkStatus {
    #[serde(rename = "Active")]
    Active,
    #[serde(rename = "Active but no metadata")]
    ActiveNoMetadata,
    #[serde(rename = "Inactive")]
    Inactive,
    #[serde(rename = "Dead")]
    Dead,
}

impl LinkStatus {
    pub fn label(&self) -> &'static str {
        match self {
            LinkStatus::Active => "Active",
            LinkStatus::ActiveNoMetadata => "Active but no metadata",
            LinkStatus::Inactive => "Inactive",
            LinkStatus::Dead => "Dead",
        }
    }

    /// Hex color used when rendering a link with this status
    pub fn color(&self) -> &'static str {
        match self {
            LinkStatus::Active => "#28a745",
            LinkStatus::ActiveNoMetadata | LinkStatus::Inactive => "#ffa500",
            LinkStatus::Dead => "#dc3545",
        }
    }
}

impl fmt::Display for LinkStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// HTTP status of the fetch, or the transport error when there was none
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum StatusCodeOrError {
    Http(u16),
    Error(String),
}

impl fmt::Display for StatusCodeOrError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StatusCodeOrError::Http(code) => write!(f, "{}", code),
            StatusCodeOrError::Error(e) => f.write_str(e),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LinkReport {
    pub url: String,
    pub title: String,
    pub description: String,
    pub status: LinkStatus,
    pub status_code: StatusCodeOrError,
}

impl LinkReport {
    fn unavailable(url: &str, status: LinkStatus, status_code: StatusCodeOrError) -> Self {
        Self {
            url: url.to_string(),
            title: NOT_AVAILABLE.to_string(),
            description: NOT_AVAILABLE.to_string(),
            status,
            status_code,
        }
    }

    /// Title when there is one worth showing, the URL otherwise
    pub fn display_text(&self) -> &str {
        if self.title == NOT_AVAILABLE || self.title == METADATA_NOT_ACCESSIBLE {
            &self.url
        } else {
            &self.title
        }
    }
}

/// Page title and meta description, when present
#[derive(Debug, Default, PartialEq)]
pub struct PageMetadata {
    pub title: Option<String>,
    pub description: Option<String>,
}

/// Parse HTML content and extract metadata
pub fn parse_html(html: &str) -> Result<PageMetadata> {
    let dom = tl::parse(html, ParserOptions::default())?;
    let parser = dom.parser();

    let title = dom
        .query_selector("title")
        .and_then(|mut iter| iter.next())
        .and_then(|handle| handle.get(parser))
        .map(|node| node.inner_text(parser).trim().to_string())
        .filter(|t| !t.is_empty());

    let description = dom
        .query_selector("meta[name='description']")
        .and_then(|mut iter| iter.next())
        .and_then(|handle| handle.get(parser))
        .and_then(|node| node.as_tag())
        .and_then(|tag| {
            tag.attributes()
                .get("content")
                .flatten()
                .map(|v| v.as_utf8_str().to_string())
        });

    Ok(PageMetadata { title, description })
}

/// Classify a fetched page from its status and body
pub fn classify(url: &str, status: StatusCode, body: &str) -> LinkReport {
    let code = StatusCodeOrError::Http(status.as_u16());
    if status != StatusCode::OK {
        return LinkReport::unavailable(url, LinkStatus::Inactive, code);
    }

    let meta = parse_html(body).unwrap_or_default();
    if meta.title.is_none() && meta.description.is_none() {
        return LinkReport::unavailable(url, LinkStatus::ActiveNoMetadata, code);
    }

    LinkReport {
        url: url.to_string(),
        title: meta.title.unwrap_or_else(|| NOT_AVAILABLE.to_string()),
        description: meta.description.unwrap_or_else(|| NO_DESCRIPTION.to_string()),
        status: LinkStatus::Active,
        status_code: code,
    }
}

/// Fetches links with a shared blocking client
pub struct LinkAnalyzer {
    client: Client,
}

impl LinkAnalyzer {
    pub fn new(config: &Config) -> Result<Self> {
        let client = Client::builder()
            .user_agent(config.user_agent.as_str())
            .timeout(Duration::from_secs(config.analyze_timeout_secs))
            .build()?;
        Ok(Self { client })
    }

    /// Fetch one URL. Never fails: transport errors become `Dead` reports.
    pub fn check(&self, url: &str) -> LinkReport {
        let result = self
            .client
            .get(url)
            .send()
            .and_then(|resp| {
                let status = resp.status();
                resp.text().map(|body| (status, body))
            });

        match result {
            Ok((status, body)) => classify(url, status, &body),
            Err(e) => {
                log::debug!("Fetching {} failed: {}", url, e);
                LinkReport::unavailable(url, LinkStatus::Dead, StatusCodeOrError::Error(e.to_string()))
            }
        }
    }
}

/// Reports grouped the way they are presented
#[derive(Debug, Default, Serialize)]
pub struct Analysis {
    pub active: Vec<LinkReport>,
    pub no_metadata: Vec<LinkReport>,
    pub dead: Vec<LinkReport>,
}

impl Analysis {
    /// Group reports, keeping input order inside each group.
    /// Inactive links share the "no metadata" group.
    pub fn group(reports: Vec<LinkReport>) -> Self {
        let mut analysis = Analysis::default();
        for report in reports {
            match report.status {
                LinkStatus::Active => analysis.active.push(report),
                LinkStatus::ActiveNoMetadata | LinkStatus::Inactive => {
                    analysis.no_metadata.push(report)
                }
                LinkStatus::Dead => analysis.dead.push(report),
            }
        }
        analysis
    }

    pub fn total(&self) -> usize {
        self.active.len() + self.no_metadata.len() + self.dead.len()
    }
}
