//! Page content: recommendation records and the static copy of each section.

pub mod copy;
pub mod recommendations;

use std::fmt;
use std::path::{Path, PathBuf};

use url::Url;

pub use recommendations::recommendations;

/// Where an image reference points.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ImageSource {
    /// Site-relative file such as `/profile.jpg`, resolved against the
    /// asset directory.
    Local(PathBuf),
    /// Absolute URL. Never fetched; rendered with a fallback avatar.
    Remote(Url),
}

impl ImageSource {
    /// Absolute URLs become `Remote`, anything else is a site-relative path.
    pub fn parse(reference: &str) -> Self {
        match Url::parse(reference) {
            Ok(url) if url.scheme() == "file" => match url.to_file_path() {
                Ok(path) => Self::Local(path),
                Err(()) => Self::Remote(url),
            },
            Ok(url) => Self::Remote(url),
            Err(_) => Self::Local(PathBuf::from(reference.trim_start_matches('/'))),
        }
    }

    /// On-disk location of a local image under `asset_dir`.
    pub fn resolve(&self, asset_dir: &Path) -> Option<PathBuf> {
        match self {
            Self::Local(path) if path.is_absolute() => Some(path.clone()),
            Self::Local(path) => Some(asset_dir.join(path)),
            Self::Remote(_) => None,
        }
    }

    /// Stable key for texture caches.
    pub fn key(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for ImageSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Local(path) => write!(f, "/{}", path.display()),
            Self::Remote(url) => write!(f, "{url}"),
        }
    }
}

/// One endorsement card.
#[derive(Debug, Clone, PartialEq)]
pub struct Recommendation {
    pub name: String,
    pub title: String,
    pub text: String,
    pub image: ImageSource,
}

impl Recommendation {
    pub fn new(name: &str, title: &str, text: &str, image: &str) -> Self {
        Self {
            name: name.to_string(),
            title: title.to_string(),
            text: text.to_string(),
            image: ImageSource::parse(image),
        }
    }

    pub fn initials(&self) -> String {
        initials(&self.name)
    }
}

/// Up to two leading letters, skipping honorific suffixes in capitals
/// ("Kamel Hothi OBE" → "KH").
pub fn initials(name: &str) -> String {
    name.split_whitespace()
        .filter(|word| !is_postnominal(word))
        .filter_map(|word| word.chars().find(|c| c.is_alphabetic()))
        .flat_map(char::to_uppercase)
        .take(2)
        .collect()
}

fn is_postnominal(word: &str) -> bool {
    word.len() > 1 && word.chars().all(|c| c.is_ascii_uppercase())
}
