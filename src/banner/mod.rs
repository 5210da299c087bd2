/*!
 * Banner record normalization core.
 *
 * Raw rows scraped from a wiki table flow through this module in order:
 * - `merge`: rows sharing a raw time window are folded into one record
 * - `repair`: relative starts ("版本更新后") are inferred from the next older record
 * - `time_format` / `version`: text is normalized into canonical strings
 * - `pipeline`: ties the steps together per banner category
 */

use serde::Serialize;

pub mod merge;
pub mod pipeline;
pub mod repair;
pub mod time_format;
pub mod version;

pub use merge::merge_by_time;
pub use pipeline::{build_tables, BannerTables};
pub use repair::fix_ambiguous_starts;
pub use time_format::{format_time, is_ambiguous_start, next_day_at_ten};
pub use version::normalize_version;

/// Pool a banner row belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BannerCategory {
    /// Featured 5-star character pool
    Character,
    /// Weapon / light cone pool
    Item,
}

/// One banner row as extracted from the page
#[derive(Debug, Clone, PartialEq)]
pub struct RawRecord {
    pub category: BannerCategory,
    /// Slash date text or a placeholder phrase such as "版本更新后"
    pub start_text: String,
    /// Slash date text, or empty when the banner has no end yet
    pub end_text: String,
    pub version_text: String,
    /// Featured 5-tier titles, deduplicated in page order
    pub tier5_titles: Vec<String>,
    /// Featured 4-tier titles, deduplicated in page order
    pub tier4_titles: Vec<String>,
}

impl RawRecord {
    /// Convenience constructor used by the extractor and tests
    pub fn new(
        category: BannerCategory,
        start_text: &str,
        end_text: &str,
        version_text: &str,
        tier5_titles: &[&str],
        tier4_titles: &[&str],
    ) -> Self {
        Self {
            category,
            start_text: start_text.to_string(),
            end_text: end_text.to_string(),
            version_text: version_text.to_string(),
            tier5_titles: tier5_titles.iter().map(|s| s.to_string()).collect(),
            tier4_titles: tier4_titles.iter().map(|s| s.to_string()).collect(),
        }
    }
}

/// Title set that remembers first-insertion order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TitleSet {
    titles: Vec<String>,
}

impl TitleSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a title unless it is already present; returns whether it was added
    pub fn insert(&mut self, title: &str) -> bool {
        if self.contains(title) {
            return false;
        }
        self.titles.push(title.to_string());
        true
    }

    pub fn extend<'a, I: IntoIterator<Item = &'a String>>(&mut self, titles: I) {
        for title in titles {
            self.insert(title);
        }
    }

    pub fn contains(&self, title: &str) -> bool {
        self.titles.iter().any(|t| t == title)
    }

    pub fn len(&self) -> usize {
        self.titles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.titles.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &String> {
        self.titles.iter()
    }

    pub fn into_vec(self) -> Vec<String> {
        self.titles
    }
}

/// Banner after folding together all rows sharing a time window
#[derive(Debug, Clone, PartialEq)]
pub struct MergedRecord {
    pub start_text: String,
    pub end_text: String,
    /// Single version, or several joined with `" / "` depending on the site
    pub version: String,
    pub tier5: TitleSet,
    pub tier4: TitleSet,
}

/// Final serialized banner entry
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OutputRecord {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
    pub from: String,
    pub to: String,
    pub five: Vec<String>,
    pub four: Vec<String>,
}
