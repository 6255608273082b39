// Catalogue search and filter helpers. All pure functions over a prompt
// slice, returning borrowed matches in stable order.

use std::cmp::Ordering;
use std::collections::HashMap;

use chrono::DateTime;

use crate::record::{Category, Difficulty, Language, Platform, Prompt};

/// Case-insensitive substring search over title, content, description,
/// author, platform, category, and tags. An empty query matches everything.
pub fn search_prompts<'a>(prompts: &'a [Prompt], query: &str) -> Vec<&'a Prompt> {
    let term = query.to_lowercase();
    let term = term.trim();
    if term.is_empty() {
        return prompts.iter().collect();
    }
    prompts
        .iter()
        .filter(|p| p.searchable_text().contains(term))
        .collect()
}

/// Prompts carrying at least one of the given tags; an empty tag list
/// matches everything.
pub fn prompts_by_tag<'a>(prompts: &'a [Prompt], tags: &[String]) -> Vec<&'a Prompt> {
    if tags.is_empty() {
        return prompts.iter().collect();
    }
    prompts
        .iter()
        .filter(|p| tags.iter().any(|t| p.tags.contains(t)))
        .collect()
}

pub fn prompts_by_category(prompts: &[Prompt], category: Category) -> Vec<&Prompt> {
    prompts.iter().filter(|p| p.category == Some(category)).collect()
}

pub fn prompts_by_platform(prompts: &[Prompt], platform: Platform) -> Vec<&Prompt> {
    prompts.iter().filter(|p| p.platform == Some(platform)).collect()
}

pub fn prompts_by_difficulty(prompts: &[Prompt], difficulty: Difficulty) -> Vec<&Prompt> {
    prompts.iter().filter(|p| p.difficulty == Some(difficulty)).collect()
}

pub fn prompts_by_language(prompts: &[Prompt], language: Language) -> Vec<&Prompt> {
    prompts.iter().filter(|p| p.language == Some(language)).collect()
}

/// All distinct tags, most frequent first; ties break alphabetically.
pub fn all_tags(prompts: &[Prompt]) -> Vec<String> {
    let mut counts: HashMap<&str, usize> = HashMap::new();
    for p in prompts {
        for tag in &p.tags {
            *counts.entry(tag.as_str()).or_insert(0) += 1;
        }
    }
    let mut tags: Vec<(&str, usize)> = counts.into_iter().collect();
    tags.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(b.0)));
    tags.into_iter().map(|(tag, _)| tag.to_string()).collect()
}

/// Most used prompts, by descending usage count.
pub fn popular_prompts(prompts: &[Prompt], limit: usize) -> Vec<&Prompt> {
    let mut sorted: Vec<&Prompt> = prompts.iter().collect();
    sorted.sort_by(|a, b| b.usage_count.unwrap_or(0).cmp(&a.usage_count.unwrap_or(0)));
    sorted.truncate(limit);
    sorted
}

/// Prompts rated 4.0 or higher, best first.
pub fn top_rated_prompts(prompts: &[Prompt], limit: usize) -> Vec<&Prompt> {
    let mut sorted: Vec<&Prompt> = prompts
        .iter()
        .filter(|p| p.rating.is_some_and(|r| r >= 4.0))
        .collect();
    sorted.sort_by(|a, b| {
        let (ra, rb) = (a.rating.unwrap_or(0.0), b.rating.unwrap_or(0.0));
        rb.partial_cmp(&ra).unwrap_or(Ordering::Equal)
    });
    sorted.truncate(limit);
    sorted
}

/// Newest prompts by `created_at`. Unparseable timestamps sort last.
pub fn latest_prompts(prompts: &[Prompt], limit: usize) -> Vec<&Prompt> {
    let mut sorted: Vec<&Prompt> = prompts.iter().collect();
    sorted.sort_by_key(|p| std::cmp::Reverse(created_ts(p)));
    sorted.truncate(limit);
    sorted
}

fn created_ts(p: &Prompt) -> i64 {
    DateTime::parse_from_rfc3339(&p.created_at)
        .map(|d| d.timestamp_millis())
        .unwrap_or(i64::MIN)
}

/// Prompts related to `current`: shared tags, same category, or same
/// platform, ranked by how many of those they share.
pub fn related_prompts<'a>(
    prompts: &'a [Prompt],
    current: &Prompt,
    limit: usize,
) -> Vec<&'a Prompt> {
    let score = |p: &Prompt| -> usize {
        let shared_tags = p.tags.iter().filter(|t| current.tags.contains(t)).count();
        let same_category = usize::from(p.category.is_some() && p.category == current.category);
        let same_platform = usize::from(p.platform.is_some() && p.platform == current.platform);
        shared_tags + same_category + same_platform
    };
    let mut related: Vec<(&Prompt, usize)> = prompts
        .iter()
        .filter(|p| p.id != current.id)
        .map(|p| (p, score(p)))
        .filter(|(_, s)| *s > 0)
        .collect();
    related.sort_by(|a, b| b.1.cmp(&a.1));
    related.into_iter().take(limit).map(|(p, _)| p).collect()
}
