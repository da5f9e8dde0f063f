//! Bookmark tree model and URL collection.

use serde::{Deserialize, Serialize};

/// One node of a browser bookmark hierarchy.
///
/// Bookmarks carry a `url`, folders carry `children`. The host hands the
/// forest over read-only; nothing in this crate mutates it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookmarkNode {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub children: Option<Vec<BookmarkNode>>,
}

impl BookmarkNode {
    /// A leaf bookmark pointing at `url`
    pub fn bookmark(title: &str, url: &str) -> Self {
        Self {
            title: Some(title.to_string()),
            url: Some(url.to_string()),
            children: None,
        }
    }

    /// A folder holding `children` in order
    pub fn folder(title: &str, children: Vec<BookmarkNode>) -> Self {
        Self {
            title: Some(title.to_string()),
            url: None,
            children: Some(children),
        }
    }
}

/// Flatten a forest into its URLs, visiting each node before its children.
///
/// Every node with a URL contributes exactly one entry, duplicates included.
pub fn collect_urls(forest: &[BookmarkNode]) -> Vec<String> {
    let mut urls = Vec::new();
    for node in forest {
        visit(node, &mut urls);
    }
    urls
}

fn visit(node: &BookmarkNode, urls: &mut Vec<String>) {
    if let Some(ref url) = node.url {
        urls.push(url.clone());
    }
    if let Some(ref children) = node.children {
        for child in children {
            visit(child, urls);
        }
    }
}

/// Count the nodes carrying a URL without building the collection
pub fn count_urls(forest: &[BookmarkNode]) -> usize {
    forest
        .iter()
        .map(|node| {
            usize::from(node.url.is_some())
                + node.children.as_deref().map(count_urls).unwrap_or(0)
        })
        .sum()
}
