//! Image URL resolution and load-failure fallback.
//!
//! Stored paths come back from the backend in three shapes: absolute URLs,
//! origin-relative paths, and bare relative paths. `resolve` normalizes all
//! three against the configured origin. When a resolved URL fails to load,
//! `ImageCandidates` walks a fixed list of alternate prefixes; the prefixes
//! are guesses with no contract from the backend, so exhaustion is a normal
//! outcome and callers must degrade to a placeholder.

use crate::core::api::ApiConfig;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageResolver {
    base: String,
}

impl ImageResolver {
    pub fn new(base_url: impl Into<String>) -> Self {
        let mut base: String = base_url.into();
        while base.ends_with('/') {
            base.pop();
        }
        Self { base }
    }

    pub fn from_config(config: &ApiConfig) -> Self {
        Self::new(config.base_url())
    }

    /// Turn a stored path into a fetchable URL. Idempotent on absolute URLs.
    pub fn resolve(&self, path: &str) -> String {
        if path.starts_with("http") {
            path.to_string()
        } else if path.starts_with('/') {
            format!("{}{}", self.base, path)
        } else {
            format!("{}/{}", self.base, path)
        }
    }

    /// Alternate URLs to try when the primary resolution fails to load.
    /// Absolute URLs get no alternatives.
    pub fn backup_urls(&self, path: &str) -> Vec<String> {
        if path.is_empty() || path.starts_with("http") {
            return Vec::new();
        }
        let sep = if path.starts_with('/') { "" } else { "/" };
        vec![
            format!("{}/api/images{sep}{path}", self.base),
            format!("{}/api/files{sep}{path}", self.base),
        ]
    }

    /// The full ordered fallback walk for a stored path: primary URL first,
    /// then the alternate prefixes.
    pub fn candidates(&self, path: &str) -> ImageCandidates {
        let mut urls = vec![self.resolve(path)];
        for url in self.backup_urls(path) {
            if !urls.contains(&url) {
                urls.push(url);
            }
        }
        ImageCandidates { urls, cursor: 0 }
    }
}

/// Ordered candidate URLs for one image, with an explicit cursor.
///
/// One load failure advances the cursor by one step; once past the last
/// candidate the walk is exhausted and stays exhausted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageCandidates {
    urls: Vec<String>,
    cursor: usize,
}

impl ImageCandidates {
    /// The URL to try next, or `None` once the walk is exhausted.
    pub fn current(&self) -> Option<&str> {
        self.urls.get(self.cursor).map(String::as_str)
    }

    /// Record a load failure for the current URL and move to the next one.
    pub fn advance(&mut self) -> Option<&str> {
        if self.cursor < self.urls.len() {
            self.cursor += 1;
        }
        self.current()
    }

    pub fn is_exhausted(&self) -> bool {
        self.cursor >= self.urls.len()
    }
}
