//! Near-duplicate filtering and catalogue utilities for AI prompt
//! collections.
//!
//! `prompt_hub` partitions an ordered catalogue of prompt records into kept
//! records and near-duplicates using Jaccard similarity over title and
//! content token sets, with category/platform-aware thresholds. Around the
//! filter it provides the catalogue's ingestion validation, search/filter
//! helpers, and source-URL sanitization.
//!
//! # Quick start
//!
//! ```rust
//! use prompt_hub::{dedupe, parse_prompts, Config};
//!
//! let json = r#"[
//!   {"id": "1", "title": "Cat portrait prompt", "content": "Generate a cat picture",
//!    "platform": "twitter", "category": "drawing", "sourceUrl": "https://example.com/1"},
//!   {"id": "2", "title": "Cat portrait prompt", "content": "Generate one cat picture",
//!    "platform": "twitter", "category": "drawing", "sourceUrl": "https://example.com/2"}
//! ]"#;
//! let prompts = parse_prompts(json).unwrap();
//! let partition = dedupe(prompts, &Config::default());
//! assert_eq!(partition.kept.len(), 1);
//! assert_eq!(partition.removed.len(), 1);
//! ```

mod dedupe;
mod error;
mod record;
mod search;
mod source;
mod text;
mod validate;

pub use dedupe::{dedupe, Partition};
pub use error::PromptHubError;
pub use record::{Category, Difficulty, Language, Platform, Prompt};
pub use search::{
    all_tags, latest_prompts, popular_prompts, prompts_by_category, prompts_by_difficulty,
    prompts_by_language, prompts_by_platform, prompts_by_tag, related_prompts, search_prompts,
    top_rated_prompts,
};
pub use source::public_source_url;
pub use text::{jaccard, normalize, tokenize};
pub use validate::{
    parse_prompts, sanitize_string, sanitize_url, validate_prompt, validate_search_query,
};

/// How missing `category`/`platform` values compare when deciding whether
/// two records belong to the same cluster.
///
/// The catalogue's original dedupe script compared the raw fields, so two
/// records that both lacked a category landed in the same "undefined
/// cluster" and were judged under the looser thresholds. That behavior is
/// preserved as [`MissingFieldPolicy::Equal`]; the default treats a missing
/// value as a sentinel that matches nothing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MissingFieldPolicy {
    /// A missing value never equals another missing value; uncategorized
    /// records are always judged under the stricter cross-cluster
    /// thresholds.
    #[default]
    Distinct,
    /// Two missing values compare equal.
    Equal,
}

/// Configuration for the near-duplicate filter.
///
/// Threshold defaults match the catalogue's data-prep scripts. Records
/// sharing category and platform form a tighter cluster, so they are judged
/// duplicates more readily (lower thresholds).
#[derive(Debug, Clone)]
#[non_exhaustive]
pub struct Config {
    pub same_cluster_title_threshold: f64,
    pub same_cluster_content_threshold: f64,
    pub cross_cluster_title_threshold: f64,
    pub cross_cluster_content_threshold: f64,
    pub missing_field_policy: MissingFieldPolicy,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            same_cluster_title_threshold: 0.70,
            same_cluster_content_threshold: 0.65,
            cross_cluster_title_threshold: 0.80,
            cross_cluster_content_threshold: 0.75,
            missing_field_policy: MissingFieldPolicy::Distinct,
        }
    }
}

impl Config {
    pub fn with_same_cluster_title_threshold(mut self, v: f64) -> Self {
        self.same_cluster_title_threshold = v;
        self
    }
    pub fn with_same_cluster_content_threshold(mut self, v: f64) -> Self {
        self.same_cluster_content_threshold = v;
        self
    }
    pub fn with_cross_cluster_title_threshold(mut self, v: f64) -> Self {
        self.cross_cluster_title_threshold = v;
        self
    }
    pub fn with_cross_cluster_content_threshold(mut self, v: f64) -> Self {
        self.cross_cluster_content_threshold = v;
        self
    }
    pub fn with_missing_field_policy(mut self, v: MissingFieldPolicy) -> Self {
        self.missing_field_policy = v;
        self
    }
}
