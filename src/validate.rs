// Ingestion boundary: parse and sanity-check the catalogue JSON before any
// record reaches the filter or the search helpers.

use std::sync::LazyLock;

use regex::Regex;
use serde_json::Value;

use crate::error::PromptHubError;
use crate::record::Prompt;

/// Longest accepted search query, in characters.
const MAX_QUERY_CHARS: usize = 200;

/// `<script>...</script>` blocks, case-insensitive, non-greedy across the body.
static SCRIPT_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?is)<script\b.*?</script>").unwrap());

/// `javascript:` scheme fragments.
static JS_SCHEME_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?i)javascript:").unwrap());

/// Inline event-handler attributes (`onclick=`, `onload =`, ...).
static EVENT_ATTR_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?i)on\w+\s*=").unwrap());

/// Patterns that reject a search query outright even after sanitization.
static DANGEROUS_RES: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    [
        r"(?i)<script",
        r"(?i)javascript:",
        r"(?i)on\w+\s*=",
        r"(?i)eval\(",
        r"(?i)expression\(",
    ]
    .iter()
    .map(|p| Regex::new(p).unwrap())
    .collect()
});

/// Parse a catalogue JSON document into validated records.
///
/// The only fatal conditions are input that is not JSON at all or a JSON
/// value that is not an array — per-record problems are not: elements that
/// fail to deserialize or lack required fields are silently dropped, so one
/// malformed record never poisons the catalogue.
pub fn parse_prompts(json: &str) -> Result<Vec<Prompt>, PromptHubError> {
    let value: Value = serde_json::from_str(json)?;
    let Value::Array(elements) = value else {
        return Err(PromptHubError::NotAnArray);
    };
    Ok(elements
        .into_iter()
        .filter_map(|el| serde_json::from_value::<Prompt>(el).ok())
        .filter(validate_prompt)
        .collect())
}

/// Required-field check applied at ingestion: a record must carry an id,
/// title, content, source URL, and both categorical fields.
pub fn validate_prompt(prompt: &Prompt) -> bool {
    !prompt.id.is_empty()
        && !prompt.title.is_empty()
        && !prompt.content.is_empty()
        && !prompt.source_url.is_empty()
        && prompt.platform.is_some()
        && prompt.category.is_some()
}

/// Strip script tags, `javascript:` schemes, and inline event handlers.
pub fn sanitize_string(input: &str) -> String {
    let no_scripts = SCRIPT_RE.replace_all(input, "");
    let no_scheme = JS_SCHEME_RE.replace_all(&no_scripts, "");
    EVENT_ATTR_RE.replace_all(&no_scheme, "").trim().to_string()
}

/// Sanitize a search query and enforce the length and content limits.
///
/// Returns the cleaned query on success.
pub fn validate_search_query(query: &str) -> Result<String, PromptHubError> {
    let cleaned = sanitize_string(query);
    let chars = cleaned.chars().count();
    if chars > MAX_QUERY_CHARS {
        return Err(PromptHubError::QueryTooLong(chars));
    }
    if DANGEROUS_RES.iter().any(|re| re.is_match(&cleaned)) {
        return Err(PromptHubError::ForbiddenQuery);
    }
    Ok(cleaned)
}

/// Accept http/https absolute URLs and site-relative paths; reject the rest.
pub fn sanitize_url(url: &str) -> Option<String> {
    let lower = url.to_ascii_lowercase();
    for scheme in ["http://", "https://"] {
        if let Some(rest) = lower.strip_prefix(scheme) {
            // require a host before any path/query
            let host = rest.split(['/', '?', '#']).next().unwrap_or("");
            if host.is_empty() {
                return None;
            }
            return Some(url.to_string());
        }
    }
    if url.starts_with('/') || url.starts_with("./") || url.starts_with("../") {
        return Some(url.to_string());
    }
    None
}
