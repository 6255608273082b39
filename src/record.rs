// Catalogue record model. Wire format matches the JSON data files
// (camelCase fields); every field tolerates absence so that malformed
// records degrade instead of failing ingestion.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Source platform a prompt was collected from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Platform {
    Twitter,
    Youtube,
    Github,
    Reddit,
    Discord,
    Wechat,
    Weibo,
    Zhihu,
    Xiaohongshu,
    #[serde(other)]
    Other,
}

/// Catalogue category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Writing,
    Drawing,
    Script,
    Code,
    Video,
    Marketing,
    Education,
    Business,
    Creative,
    Productivity,
    #[serde(other)]
    Other,
}

/// Suggested skill level for using a prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Beginner,
    Intermediate,
    Advanced,
}

/// Primary language of the prompt text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    Zh,
    En,
    Ja,
    Ko,
    #[serde(other)]
    Other,
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Platform::Twitter => "twitter",
            Platform::Youtube => "youtube",
            Platform::Github => "github",
            Platform::Reddit => "reddit",
            Platform::Discord => "discord",
            Platform::Wechat => "wechat",
            Platform::Weibo => "weibo",
            Platform::Zhihu => "zhihu",
            Platform::Xiaohongshu => "xiaohongshu",
            Platform::Other => "other",
        };
        f.write_str(s)
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Category::Writing => "writing",
            Category::Drawing => "drawing",
            Category::Script => "script",
            Category::Code => "code",
            Category::Video => "video",
            Category::Marketing => "marketing",
            Category::Education => "education",
            Category::Business => "business",
            Category::Creative => "creative",
            Category::Productivity => "productivity",
            Category::Other => "other",
        };
        f.write_str(s)
    }
}

/// A curated prompt record.
///
/// Immutable input to the filter and search helpers — nothing in this crate
/// mutates a record, only partitions and borrows them.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Prompt {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub content: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default)]
    pub platform: Option<Platform>,
    #[serde(default)]
    pub category: Option<Category>,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub source_url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub author: Option<String>,
    #[serde(default)]
    pub created_at: String,
    #[serde(default)]
    pub updated_at: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub usage_count: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rating: Option<f32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub difficulty: Option<Difficulty>,
    #[serde(default)]
    pub language: Option<Language>,
    /// Local media asset file names under the public asset tree.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<Vec<String>>,
    /// Kept for older data files that predate `location`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
}

impl Prompt {
    /// Concatenated lowercase text used for substring search.
    pub(crate) fn searchable_text(&self) -> String {
        let mut parts: Vec<String> = vec![self.title.clone(), self.content.clone()];
        if let Some(d) = &self.description {
            parts.push(d.clone());
        }
        if let Some(a) = &self.author {
            parts.push(a.clone());
        }
        if let Some(p) = self.platform {
            parts.push(p.to_string());
        }
        if let Some(c) = self.category {
            parts.push(c.to_string());
        }
        parts.extend(self.tags.iter().cloned());
        parts.join(" ").to_lowercase()
    }
}
