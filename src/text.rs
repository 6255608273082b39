// Text normalization, tokenization, and token-set similarity.

use std::collections::HashSet;
use std::sync::LazyLock;

use regex::Regex;

/// Runs of Unicode punctuation or symbol characters.
static PUNCT_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[\p{P}\p{S}]+").unwrap());

/// Runs of whitespace.
static WS_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\s+").unwrap());

/// Normalize text for token comparison.
///
/// Lowercases, replaces every run of punctuation or symbol characters with a
/// single space, collapses whitespace, and trims. Pure function.
pub fn normalize(text: &str) -> String {
    let lowered = text.to_lowercase();
    let no_punct = PUNCT_RE.replace_all(&lowered, " ");
    WS_RE.replace_all(&no_punct, " ").trim().to_string()
}

/// CJK Unified Ideographs (plus Extension A and compatibility block).
fn is_han(c: char) -> bool {
    matches!(c, '\u{4E00}'..='\u{9FFF}' | '\u{3400}'..='\u{4DBF}' | '\u{F900}'..='\u{FAFF}')
}

/// Split text into a set of word tokens.
///
/// Applies [`normalize`], splits on spaces, and drops empty tokens; duplicate
/// words collapse to one membership. Han ideographs carry no word boundaries,
/// so each one becomes its own single-character token — "AI绘画教程" yields
/// `{"ai", "绘", "画", "教", "程"}`, letting titles that differ by a suffix
/// still overlap.
pub fn tokenize(text: &str) -> HashSet<String> {
    let mut tokens = HashSet::new();
    for word in normalize(text).split(' ') {
        if word.is_empty() {
            continue;
        }
        let mut run = String::new();
        for c in word.chars() {
            if is_han(c) {
                if !run.is_empty() {
                    tokens.insert(std::mem::take(&mut run));
                }
                tokens.insert(c.to_string());
            } else {
                run.push(c);
            }
        }
        if !run.is_empty() {
            tokens.insert(run);
        }
    }
    tokens
}

/// Jaccard similarity between two token sets: `|a∩b| / |a∪b|`, in [0, 1].
///
/// The degenerate case of an empty union is defined as `0.0` — two records
/// with no extractable tokens are never considered duplicates on that basis.
pub fn jaccard(a: &HashSet<String>, b: &HashSet<String>) -> f64 {
    let intersection = a.intersection(b).count();
    let union = a.len() + b.len() - intersection;
    if union == 0 {
        0.0
    } else {
        intersection as f64 / union as f64
    }
}
