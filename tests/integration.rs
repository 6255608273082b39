// End-to-end: catalogue JSON → ingestion → near-duplicate filter → search.

use prompt_hub::{
    all_tags, dedupe, parse_prompts, public_source_url, search_prompts, validate_search_query,
    Config, PromptHubError,
};

const CATALOGUE: &str = r#"[
  {"id": "1", "title": "Cyberpunk street scene", "content": "A rainy neon street at night, reflections on wet asphalt",
   "platform": "twitter", "category": "drawing", "tags": ["midjourney", "city"],
   "sourceUrl": "https://twitter.com/artist/status/111",
   "createdAt": "2024-05-01T12:00:00.000Z", "updatedAt": "2024-05-01T12:00:00.000Z"},
  {"id": "2", "title": "Cyberpunk street scene art", "content": "A rainy neon street at night with reflections on wet asphalt",
   "platform": "twitter", "category": "drawing", "tags": ["midjourney"],
   "sourceUrl": "https://twitter.com/artist/status/112",
   "createdAt": "2024-05-02T12:00:00.000Z", "updatedAt": "2024-05-02T12:00:00.000Z"},
  {"id": "3", "title": "Resume bullet point rewriter", "content": "Rewrite plain duties into quantified achievements",
   "platform": "github", "category": "writing", "tags": ["career"],
   "sourceUrl": "https://github.com/a/prompts",
   "createdAt": "2024-04-01T09:00:00.000Z", "updatedAt": "2024-04-01T09:00:00.000Z"},
  {"title": "missing id and most required fields"},
  {"id": "5", "title": "Weekly meal planner", "content": "Plan seven dinners with a shopping list",
   "platform": "reddit", "category": "productivity", "tags": ["food", "career"],
   "sourceUrl": "https://www.reddit.com/r/prompts/comments/5",
   "createdAt": "2024-03-01T09:00:00.000Z", "updatedAt": "2024-03-01T09:00:00.000Z"}
]"#;

#[test]
fn test_pipeline_parse_dedupe_search() {
    let prompts = parse_prompts(CATALOGUE).unwrap();
    // the incomplete record is dropped at ingestion, not later
    assert_eq!(prompts.len(), 4);

    let partition = dedupe(prompts, &Config::default());
    // record 2 is a near-duplicate of record 1: same cluster, title overlap
    // 3/4 = 0.75 and content overlap 10/11 both clear the same-cluster bars
    assert_eq!(partition.removed.len(), 1);
    assert_eq!(partition.removed[0].id, "2");
    let kept = partition.kept;
    assert_eq!(kept.len(), 3);

    let hits = search_prompts(&kept, "neon");
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].id, "1");

    // tag frequencies over the kept set: career appears twice
    assert_eq!(all_tags(&kept)[0], "career");
}

#[test]
fn test_pipeline_source_urls() {
    let prompts = parse_prompts(CATALOGUE).unwrap();
    let twitter = prompts.iter().find(|p| p.id == "1").unwrap();
    assert_eq!(
        public_source_url(twitter),
        "https://nitter.net/artist/status/111"
    );
    let reddit = prompts.iter().find(|p| p.id == "5").unwrap();
    assert_eq!(
        public_source_url(reddit),
        "https://libredd.it/r/prompts/comments/5"
    );
}

#[test]
fn test_non_array_input_is_fatal() {
    assert!(matches!(
        parse_prompts(r#"{"items": []}"#),
        Err(PromptHubError::NotAnArray)
    ));
    assert!(matches!(parse_prompts("[1, 2"), Err(PromptHubError::Json(_))));
}

#[test]
fn test_query_validation_guards_search() {
    let cleaned = validate_search_query("  neon <script>x</script>city  ").unwrap();
    assert_eq!(cleaned, "neon city");
    // an unterminated script tag survives sanitization and is rejected
    assert!(validate_search_query("<script src=evil.js").is_err());
    assert!(validate_search_query("eval(document.cookie)").is_err());
}
