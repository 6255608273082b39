// Source-URL rewriting: map a record's platform and original link to a
// privacy-frontend URL. Every branch falls back to a search URL, so a
// malformed source link never fails.

use std::sync::LazyLock;

use percent_encoding::{percent_decode_str, utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use regex::Regex;

use crate::record::{Platform, Prompt};

/// Matches `encodeURIComponent`: everything but alphanumerics and `-_.!~*'()`.
const QUERY: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

static URL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)^(https?)://([^/?#]+)([^?#]*)(?:\?([^#]*))?").unwrap());

struct UrlParts<'a> {
    scheme: &'a str,
    host: &'a str,
    path: &'a str,
    query: Option<&'a str>,
}

fn split_url(url: &str) -> Option<UrlParts<'_>> {
    let caps = URL_RE.captures(url)?;
    Some(UrlParts {
        scheme: caps.get(1).map_or("", |m| m.as_str()),
        host: caps.get(2).map_or("", |m| m.as_str()),
        path: caps.get(3).map_or("", |m| m.as_str()),
        query: caps.get(4).map(|m| m.as_str()),
    })
}

fn rebuild(parts: &UrlParts<'_>, host: &str) -> String {
    match parts.query {
        Some(q) => format!("{}://{}{}?{}", parts.scheme, host, parts.path, q),
        None => format!("{}://{}{}", parts.scheme, host, parts.path),
    }
}

fn query_param(query: &str, name: &str) -> Option<String> {
    query.split('&').find_map(|pair| {
        let (k, v) = pair.split_once('=')?;
        if k == name {
            Some(percent_decode_str(v).decode_utf8_lossy().replace('+', " "))
        } else {
            None
        }
    })
}

fn encode(q: &str) -> String {
    utf8_percent_encode(q, QUERY).to_string()
}

fn to_nitter(url: &str, fallback: &str) -> String {
    if let Some(parts) = split_url(url) {
        if parts.host.contains("twitter.com") || parts.host.contains("x.com") {
            if parts.path.starts_with("/search") {
                let q = parts
                    .query
                    .and_then(|query| query_param(query, "q"))
                    .unwrap_or_else(|| fallback.to_string());
                return format!("https://nitter.net/search?f=tweets&q={}", encode(&q));
            }
            return rebuild(&parts, "nitter.net");
        }
    }
    format!("https://nitter.net/search?f=tweets&q={}", encode(fallback))
}

fn to_invidious(url: &str, fallback: &str) -> String {
    if let Some(parts) = split_url(url) {
        if parts.host.contains("youtube.com") {
            return rebuild(&parts, "yewtu.be");
        }
        if parts.host == "youtu.be" {
            let id = parts.path.trim_start_matches('/');
            return format!("https://yewtu.be/watch?v={id}");
        }
    }
    format!("https://yewtu.be/results?search_query={}", encode(fallback))
}

fn to_libreddit(url: &str, fallback: &str) -> String {
    if let Some(parts) = split_url(url) {
        if parts.host.contains("reddit.com") {
            return rebuild(&parts, "libredd.it");
        }
    }
    format!("https://libredd.it/search?q={}", encode(fallback))
}

fn to_search(q: &str, site: Option<&str>) -> String {
    let query = match site {
        Some(site) => format!("{q} site:{site}"),
        None => q.to_string(),
    };
    format!("https://duckduckgo.com/?q={}", encode(&query))
}

/// Public link for a prompt's source, routed through privacy frontends.
pub fn public_source_url(prompt: &Prompt) -> String {
    let q = prompt.title.as_str();
    let src = prompt.source_url.as_str();
    match prompt.platform {
        Some(Platform::Twitter) => to_nitter(src, q),
        Some(Platform::Youtube) => to_invidious(src, q),
        Some(Platform::Reddit) => to_libreddit(src, q),
        Some(Platform::Github) => src.to_string(),
        Some(Platform::Weibo) => to_search(q, Some("weibo.com")),
        Some(Platform::Zhihu) => to_search(q, Some("zhihu.com")),
        Some(Platform::Xiaohongshu) => to_search(q, Some("xiaohongshu.com")),
        Some(Platform::Wechat) => to_search(q, Some("mp.weixin.qq.com")),
        _ => to_search(q, None),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn prompt(platform: Option<Platform>, title: &str, src: &str) -> Prompt {
        Prompt {
            id: "p".to_string(),
            title: title.to_string(),
            source_url: src.to_string(),
            platform,
            ..Prompt::default()
        }
    }

    #[test]
    fn test_twitter_status_url_rewrites_host() {
        let p = prompt(
            Some(Platform::Twitter),
            "cats",
            "https://twitter.com/user/status/123",
        );
        assert_eq!(public_source_url(&p), "https://nitter.net/user/status/123");
    }

    #[test]
    fn test_twitter_search_url_reencodes_query() {
        let p = prompt(
            Some(Platform::Twitter),
            "fallback",
            "https://x.com/search?q=cats%20dogs&src=typed",
        );
        assert_eq!(
            public_source_url(&p),
            "https://nitter.net/search?f=tweets&q=cats%20dogs"
        );
    }

    #[test]
    fn test_twitter_malformed_url_falls_back_to_title_search() {
        let p = prompt(Some(Platform::Twitter), "AI art", "not a url");
        assert_eq!(
            public_source_url(&p),
            "https://nitter.net/search?f=tweets&q=AI%20art"
        );
    }

    #[test]
    fn test_youtube_urls() {
        let p = prompt(
            Some(Platform::Youtube),
            "t",
            "https://www.youtube.com/watch?v=abc123",
        );
        assert_eq!(public_source_url(&p), "https://yewtu.be/watch?v=abc123");

        let short = prompt(Some(Platform::Youtube), "t", "https://youtu.be/abc123");
        assert_eq!(public_source_url(&short), "https://yewtu.be/watch?v=abc123");

        let bad = prompt(Some(Platform::Youtube), "cat videos", "");
        assert_eq!(
            public_source_url(&bad),
            "https://yewtu.be/results?search_query=cat%20videos"
        );
    }

    #[test]
    fn test_reddit_url() {
        let p = prompt(
            Some(Platform::Reddit),
            "t",
            "https://www.reddit.com/r/prompts/comments/1",
        );
        assert_eq!(
            public_source_url(&p),
            "https://libredd.it/r/prompts/comments/1"
        );
    }

    #[test]
    fn test_github_passes_through() {
        let p = prompt(Some(Platform::Github), "t", "https://github.com/a/b");
        assert_eq!(public_source_url(&p), "https://github.com/a/b");
    }

    #[test]
    fn test_site_scoped_search_platforms() {
        let p = prompt(Some(Platform::Weibo), "AI绘画", "https://weibo.com/123");
        assert_eq!(
            public_source_url(&p),
            format!("https://duckduckgo.com/?q={}", encode("AI绘画 site:weibo.com"))
        );
    }

    #[test]
    fn test_unknown_platform_plain_search() {
        let p = prompt(None, "hello world", "");
        assert_eq!(
            public_source_url(&p),
            "https://duckduckgo.com/?q=hello%20world"
        );
    }
}
