//! Bookmark sources: browser profile detection and tree readers.
//!
//! A [`BookmarkSource`] plays the part of the host's bookmark-tree provider.
//! Chromium-family browsers keep a JSON `Bookmarks` file per profile; Firefox
//! keeps them in `places.sqlite`.

use crate::error::{MarkpostError, Result};
use crate::tree::BookmarkNode;
use rusqlite::OpenFlags;
use serde::Deserialize;
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

/// Provider of the full bookmark forest
pub trait BookmarkSource {
    fn get_tree(&self) -> Result<Vec<BookmarkNode>>;
}

impl BookmarkSource for Vec<BookmarkNode> {
    fn get_tree(&self) -> Result<Vec<BookmarkNode>> {
        Ok(self.clone())
    }
}

impl<S: BookmarkSource + ?Sized> BookmarkSource for Box<S> {
    fn get_tree(&self) -> Result<Vec<BookmarkNode>> {
        (**self).get_tree()
    }
}

/// Detected browser type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BrowserType {
    Chrome,
    Chromium,
    Edge,
    Firefox,
}

impl BrowserType {
    /// Get a user-friendly display name for the browser
    pub fn display_name(&self) -> &'static str {
        match self {
            BrowserType::Chrome => "Chrome",
            BrowserType::Chromium => "Chromium",
            BrowserType::Edge => "Edge",
            BrowserType::Firefox => "Firefox",
        }
    }

    /// Parse browser type from string (case-insensitive)
    pub fn from_string(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "chrome" => Some(BrowserType::Chrome),
            "chromium" => Some(BrowserType::Chromium),
            "edge" => Some(BrowserType::Edge),
            "firefox" => Some(BrowserType::Firefox),
            _ => None,
        }
    }
}

/// Browser profile location
#[derive(Debug, Clone)]
pub struct BrowserProfile {
    pub browser: BrowserType,
    pub profile_name: String,
    pub path: PathBuf,
}

impl BrowserProfile {
    pub fn display_string(&self) -> String {
        format!("{} ({})", self.browser.display_name(), self.profile_name)
    }

    /// Open the bookmark source stored in this profile
    pub fn source(&self) -> Box<dyn BookmarkSource> {
        match self.browser {
            BrowserType::Firefox => Box::new(FirefoxSource::new(&self.path)),
            _ => Box::new(ChromeSource::new(&self.path)),
        }
    }
}

/// Pick a source for an explicit file: `.sqlite` is read as Firefox places,
/// anything else as a Chromium `Bookmarks` JSON file.
pub fn source_for_file(path: &Path) -> Box<dyn BookmarkSource> {
    match path.extension().and_then(|e| e.to_str()) {
        Some("sqlite") => Box::new(FirefoxSource::new(path)),
        _ => Box::new(ChromeSource::new(path)),
    }
}

/// Detect installed browsers and their profile locations
pub fn detect_browsers() -> Vec<BrowserProfile> {
    let home = match std::env::var("HOME") {
        Ok(h) => PathBuf::from(h),
        Err(_) => return Vec::new(),
    };
    detect_browsers_in(&home)
}

/// Detection rooted at an arbitrary home directory
pub fn detect_browsers_in(home: &Path) -> Vec<BrowserProfile> {
    let mut profiles = Vec::new();
    for (browser, base) in chromium_family_dirs(home) {
        profiles.extend(detect_chromium_profiles(browser, &base));
    }
    profiles.extend(detect_firefox_profiles(&firefox_dir(home)));
    profiles
}

/// Find the first detected profile, optionally restricted to one browser
pub fn find_profile(browser: Option<BrowserType>) -> Result<BrowserProfile> {
    detect_browsers()
        .into_iter()
        .find(|profile| browser.map_or(true, |b| profile.browser == b))
        .ok_or_else(|| match browser {
            Some(b) => MarkpostError::Browser(format!(
                "No {} profile with bookmarks found",
                b.display_name()
            )),
            None => MarkpostError::Browser("No browser profile with bookmarks found".to_string()),
        })
}

#[cfg(target_os = "macos")]
fn chromium_family_dirs(home: &Path) -> Vec<(BrowserType, PathBuf)> {
    let support = home.join("Library/Application Support");
    vec![
        (BrowserType::Chrome, support.join("Google/Chrome")),
        (BrowserType::Chromium, support.join("Chromium")),
        (BrowserType::Edge, support.join("Microsoft Edge")),
    ]
}

#[cfg(target_os = "windows")]
fn chromium_family_dirs(home: &Path) -> Vec<(BrowserType, PathBuf)> {
    let local = home.join("AppData").join("Local");
    vec![
        (BrowserType::Chrome, local.join("Google\\Chrome\\User Data")),
        (BrowserType::Chromium, local.join("Chromium\\User Data")),
        (BrowserType::Edge, local.join("Microsoft\\Edge\\User Data")),
    ]
}

#[cfg(not(any(target_os = "macos", target_os = "windows")))]
fn chromium_family_dirs(home: &Path) -> Vec<(BrowserType, PathBuf)> {
    let config = home.join(".config");
    vec![
        (BrowserType::Chrome, config.join("google-chrome")),
        (BrowserType::Chromium, config.join("chromium")),
        (BrowserType::Edge, config.join("microsoft-edge")),
    ]
}

#[cfg(target_os = "macos")]
fn firefox_dir(home: &Path) -> PathBuf {
    home.join("Library/Application Support/Firefox/Profiles")
}

#[cfg(target_os = "windows")]
fn firefox_dir(home: &Path) -> PathBuf {
    home.join("AppData\\Roaming\\Mozilla\\Firefox\\Profiles")
}

#[cfg(not(any(target_os = "macos", target_os = "windows")))]
fn firefox_dir(home: &Path) -> PathBuf {
    home.join(".mozilla/firefox")
}

/// Profiles of one Chromium-family browser that hold a `Bookmarks` file
fn detect_chromium_profiles(browser: BrowserType, base: &Path) -> Vec<BrowserProfile> {
    const PROFILE_NAMES: [&str; 5] = ["Default", "Profile 1", "Profile 2", "Profile 3", "Profile 4"];

    if !base.exists() {
        return Vec::new();
    }

    PROFILE_NAMES
        .iter()
        .map(|name| (name, base.join(name).join("Bookmarks")))
        .filter(|(_, path)| path.exists())
        .map(|(name, path)| BrowserProfile {
            browser,
            profile_name: name.to_string(),
            path,
        })
        .collect()
}

/// Firefox profile directories that contain places.sqlite
fn detect_firefox_profiles(base: &Path) -> Vec<BrowserProfile> {
    let mut profiles = Vec::new();
    let entries = match fs::read_dir(base) {
        Ok(entries) => entries,
        Err(_) => return profiles,
    };

    let mut dirs: Vec<PathBuf> = entries
        .flatten()
        .map(|entry| entry.path())
        .filter(|path| path.is_dir())
        .collect();
    dirs.sort();

    for dir in dirs {
        let places = dir.join("places.sqlite");
        if places.exists() {
            let profile_name = dir
                .file_name()
                .and_then(|n| n.to_str())
                .unwrap_or("Unknown")
                .to_string();
            profiles.push(BrowserProfile {
                browser: BrowserType::Firefox,
                profile_name,
                path: places,
            });
        }
    }

    profiles
}

/// Chromium `Bookmarks` node (JSON)
#[derive(Debug, Deserialize)]
struct ChromeBookmark {
    #[serde(rename = "type", default)]
    node_type: String,
    name: Option<String>,
    url: Option<String>,
    children: Option<Vec<ChromeBookmark>>,
}

impl From<ChromeBookmark> for BookmarkNode {
    fn from(node: ChromeBookmark) -> Self {
        BookmarkNode {
            title: node.name,
            // Folders never carry a URL even if a stray field is present
            url: if node.node_type == "folder" { None } else { node.url },
            children: node
                .children
                .map(|children| children.into_iter().map(BookmarkNode::from).collect()),
        }
    }
}

#[derive(Debug, Deserialize)]
struct ChromeBookmarkFile {
    roots: ChromeRoots,
}

#[derive(Debug, Deserialize)]
struct ChromeRoots {
    bookmark_bar: ChromeBookmark,
    other: ChromeBookmark,
    synced: Option<ChromeBookmark>,
}

/// Chromium-family JSON bookmark file
pub struct ChromeSource {
    path: PathBuf,
}

impl ChromeSource {
    pub fn new(path: &Path) -> Self {
        Self {
            path: path.to_path_buf(),
        }
    }

    /// Parse the contents of a `Bookmarks` file into its root forest
    pub fn parse(mut json_content: Vec<u8>) -> Result<Vec<BookmarkNode>> {
        let chrome_data: ChromeBookmarkFile = simd_json::serde::from_slice(&mut json_content)?;
        let roots = chrome_data.roots;

        let mut forest = vec![roots.bookmark_bar.into(), roots.other.into()];
        if let Some(synced) = roots.synced {
            forest.push(synced.into());
        }
        Ok(forest)
    }
}

impl BookmarkSource for ChromeSource {
    fn get_tree(&self) -> Result<Vec<BookmarkNode>> {
        let json_content = fs::read(&self.path)?;
        log::debug!("Read {} bytes from {:?}", json_content.len(), self.path);
        Self::parse(json_content)
    }
}

const FIREFOX_BOOKMARK: i64 = 1;
const FIREFOX_FOLDER: i64 = 2;
const FIREFOX_ROOT_ID: i64 = 1;
const FIREFOX_TAGS_GUID: &str = "tags________";

struct PlacesRow {
    id: i64,
    kind: i64,
    title: Option<String>,
    url: Option<String>,
    guid: Option<String>,
}

/// Firefox places.sqlite bookmark tree
pub struct FirefoxSource {
    path: PathBuf,
}

impl FirefoxSource {
    pub fn new(path: &Path) -> Self {
        Self {
            path: path.to_path_buf(),
        }
    }

    fn build(
        parent: i64,
        by_parent: &HashMap<i64, Vec<PlacesRow>>,
    ) -> Vec<BookmarkNode> {
        let rows = match by_parent.get(&parent) {
            Some(rows) => rows,
            None => return Vec::new(),
        };

        rows.iter()
            .filter_map(|row| match row.kind {
                FIREFOX_BOOKMARK => Some(BookmarkNode {
                    title: row.title.clone(),
                    url: row.url.clone(),
                    children: None,
                }),
                // The tags root mirrors bookmarks under tag folders
                FIREFOX_FOLDER if row.guid.as_deref() == Some(FIREFOX_TAGS_GUID) => None,
                FIREFOX_FOLDER => Some(BookmarkNode {
                    title: row.title.clone(),
                    url: None,
                    children: Some(Self::build(row.id, by_parent)),
                }),
                // Separators
                _ => None,
            })
            .collect()
    }
}

impl BookmarkSource for FirefoxSource {
    fn get_tree(&self) -> Result<Vec<BookmarkNode>> {
        // Firefox holds a lock on the database while running
        let conn = rusqlite::Connection::open_with_flags(
            &self.path,
            OpenFlags::SQLITE_OPEN_READ_ONLY | OpenFlags::SQLITE_OPEN_NO_MUTEX,
        )?;

        let mut stmt = conn.prepare(
            "SELECT moz_bookmarks.id, moz_bookmarks.parent, moz_bookmarks.type,
                    moz_bookmarks.title, moz_places.url, moz_bookmarks.guid
             FROM moz_bookmarks
             LEFT JOIN moz_places ON moz_bookmarks.fk = moz_places.id
             ORDER BY moz_bookmarks.parent, moz_bookmarks.position",
        )?;

        let rows = stmt.query_map([], |row| {
            Ok((
                row.get::<_, i64>(1)?,
                PlacesRow {
                    id: row.get(0)?,
                    kind: row.get(2)?,
                    title: row.get(3)?,
                    url: row.get(4)?,
                    guid: row.get(5)?,
                },
            ))
        })?;

        let mut by_parent: HashMap<i64, Vec<PlacesRow>> = HashMap::new();
        for row in rows {
            let (parent, row) = row?;
            by_parent.entry(parent).or_default().push(row);
        }

        Ok(Self::build(FIREFOX_ROOT_ID, &by_parent))
    }
}
