// Near-duplicate filtering over an ordered catalogue.

use std::collections::HashSet;

use crate::record::{Category, Platform, Prompt};
use crate::text::{jaccard, tokenize};
use crate::{Config, MissingFieldPolicy};

/// Result of one filter pass: first occurrences and the near-duplicates
/// dropped in their favor. Both sides preserve input order, and together
/// they hold every input record exactly once.
#[derive(Debug, Clone, Default)]
pub struct Partition {
    pub kept: Vec<Prompt>,
    pub removed: Vec<Prompt>,
}

/// Bookkeeping for one kept record: token sets are computed once, cluster
/// fields are copied so the record itself can move into `kept`.
struct SeenEntry {
    category: Option<Category>,
    platform: Option<Platform>,
    title_tokens: HashSet<String>,
    content_tokens: HashSet<String>,
}

fn same_cluster(item: &Prompt, prev: &SeenEntry, policy: MissingFieldPolicy) -> bool {
    match policy {
        MissingFieldPolicy::Equal => {
            item.category == prev.category && item.platform == prev.platform
        }
        MissingFieldPolicy::Distinct => {
            matches!((item.category, prev.category), (Some(a), Some(b)) if a == b)
                && matches!((item.platform, prev.platform), (Some(a), Some(b)) if a == b)
        }
    }
}

/// Partition `items` into kept records and near-duplicates of earlier kept
/// records.
///
/// Single forward pass: each candidate is scored against every previously
/// kept record in insertion order, and the first threshold hit wins — there
/// is no search for the most similar match. A candidate is a duplicate when
/// its title or content token-set similarity reaches the threshold for the
/// pair; records sharing category and platform are judged under the looser
/// same-cluster thresholds.
///
/// Order-sensitive by design: re-running on a reordered `kept` can partition
/// differently, because first-seen wins.
pub fn dedupe(items: Vec<Prompt>, config: &Config) -> Partition {
    let mut kept = Vec::new();
    let mut removed = Vec::new();
    let mut seen: Vec<SeenEntry> = Vec::new();

    for item in items {
        let title_tokens = tokenize(&item.title);
        let content_tokens = tokenize(&item.content);

        let duplicate_of = seen.iter().position(|prev| {
            let (title_threshold, content_threshold) =
                if same_cluster(&item, prev, config.missing_field_policy) {
                    (
                        config.same_cluster_title_threshold,
                        config.same_cluster_content_threshold,
                    )
                } else {
                    (
                        config.cross_cluster_title_threshold,
                        config.cross_cluster_content_threshold,
                    )
                };
            jaccard(&title_tokens, &prev.title_tokens) >= title_threshold
                || jaccard(&content_tokens, &prev.content_tokens) >= content_threshold
        });

        match duplicate_of {
            Some(_kept_index) => {
                #[cfg(feature = "tracing")]
                tracing::debug!(
                    id = %item.id,
                    duplicate_of = _kept_index,
                    "dropping near-duplicate"
                );
                removed.push(item);
            }
            None => {
                seen.push(SeenEntry {
                    category: item.category,
                    platform: item.platform,
                    title_tokens,
                    content_tokens,
                });
                kept.push(item);
            }
        }
    }

    #[cfg(feature = "tracing")]
    tracing::debug!(kept = kept.len(), removed = removed.len(), "dedupe pass done");

    Partition { kept, removed }
}
