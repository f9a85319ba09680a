//! HTTP-level tests for taxonomy, deals, alternatives, comparisons, global
//! search and the crawler files.

mod common;

use axum::http::header::CONTENT_TYPE;
use axum::http::StatusCode;
use common::{body_json, body_text, build_test_app, get, slugs};

// ---------------------------------------------------------------------------
// Categories and tags
// ---------------------------------------------------------------------------

#[tokio::test]
async fn test_categories_are_counted_and_ordered() {
    let json = body_json(get(build_test_app(), "/api/v1/categories").await).await;
    let data = json["data"].as_array().unwrap();
    assert_eq!(data.len(), 7);
    assert_eq!(data[0]["slug"], "development");
    assert_eq!(data[0]["count"], 3);

    let counts: Vec<i64> = data.iter().map(|c| c["count"].as_i64().unwrap()).collect();
    assert!(counts.windows(2).all(|w| w[0] >= w[1]));
}

#[tokio::test]
async fn test_category_lookup() {
    let json = body_json(get(build_test_app(), "/api/v1/categories/note-taking").await).await;
    assert_eq!(json["data"]["name"], "Note Taking");
    assert_eq!(json["data"]["count"], 1);

    let response = get(build_test_app(), "/api/v1/categories/unknown").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_tags_are_derived_from_tools() {
    let json = body_json(get(build_test_app(), "/api/v1/tags").await).await;
    let data = json["data"].as_array().unwrap();
    assert!(data.iter().any(|t| t["slug"] == "ai-coding" && t["count"] == 2));

    let response = get(build_test_app(), "/api/v1/tags/ai-writing").await;
    assert_eq!(response.status(), StatusCode::OK);
    let response = get(build_test_app(), "/api/v1/tags/unknown").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

// ---------------------------------------------------------------------------
// Deals
// ---------------------------------------------------------------------------

#[tokio::test]
async fn test_only_live_deals_are_listed() {
    let json = body_json(get(build_test_app(), "/api/v1/deals").await).await;
    let data = json["data"].as_array().unwrap();
    assert_eq!(data.len(), 1);
    assert_eq!(data[0]["tool_slug"], "cursor");
}

// ---------------------------------------------------------------------------
// Alternatives and comparisons
// ---------------------------------------------------------------------------

#[tokio::test]
async fn test_alternative_lookup_is_case_insensitive() {
    let response = get(build_test_app(), "/api/v1/alternatives/chatgpt").await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["data"]["alternative"]["brand"], "ChatGPT");
    // Items naming unknown tools are skipped.
    assert_eq!(slugs(&json["data"]["tools"]), vec!["claude"]);
}

#[tokio::test]
async fn test_alternatives_list_and_missing_brand() {
    let json = body_json(get(build_test_app(), "/api/v1/alternatives").await).await;
    assert_eq!(json["data"].as_array().unwrap().len(), 2);

    let response = get(build_test_app(), "/api/v1/alternatives/figma").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_comparison_matches_either_order() {
    for uri in ["/api/v1/vs/chatgpt/claude", "/api/v1/vs/claude/chatgpt"] {
        let response = get(build_test_app(), uri).await;
        assert_eq!(response.status(), StatusCode::OK, "{uri}");

        let json = body_json(response).await;
        assert_eq!(json["data"]["comparison"]["id"], "vs-chatgpt-claude");
        assert_eq!(slugs(&json["data"]["tools"]), vec!["chatgpt", "claude"]);
    }

    let response = get(build_test_app(), "/api/v1/vs/chatgpt/notion").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let json = body_json(get(build_test_app(), "/api/v1/vs").await).await;
    assert_eq!(json["data"].as_array().unwrap().len(), 1);
}

// ---------------------------------------------------------------------------
// Global search
// ---------------------------------------------------------------------------

#[tokio::test]
async fn test_global_search_spans_entities() {
    let json = body_json(get(build_test_app(), "/api/v1/search?q=dev").await).await;
    let data = &json["data"];
    assert!(data["categories"]
        .as_array()
        .unwrap()
        .iter()
        .any(|c| c["slug"] == "development"));
    assert!(slugs(&data["tools"]).contains(&"windsurf".to_string()));
    assert!(data["tags"].as_array().unwrap().iter().any(|t| t["slug"] == "development"));
}

#[tokio::test]
async fn test_blank_global_search_is_empty() {
    for uri in ["/api/v1/search?q=%20%20", "/api/v1/search"] {
        let json = body_json(get(build_test_app(), uri).await).await;
        assert!(json["data"]["tools"].as_array().unwrap().is_empty());
        assert!(json["data"]["categories"].as_array().unwrap().is_empty());
        assert!(json["data"]["tags"].as_array().unwrap().is_empty());
    }
}

// ---------------------------------------------------------------------------
// Crawler files
// ---------------------------------------------------------------------------

#[tokio::test]
async fn test_sitemap_is_xml() {
    let response = get(build_test_app(), "/sitemap.xml").await;
    assert_eq!(response.status(), StatusCode::OK);
    assert!(response.headers()[CONTENT_TYPE]
        .to_str()
        .unwrap()
        .starts_with("application/xml"));

    let xml = body_text(response).await;
    assert!(xml.contains("<loc>https://rect.one/tools/chatgpt</loc>"));
    assert!(xml.contains("<loc>https://rect.one/vs/chatgpt-vs-claude</loc>"));
}

#[tokio::test]
async fn test_robots_links_sitemap() {
    let response = get(build_test_app(), "/robots.txt").await;
    assert_eq!(response.status(), StatusCode::OK);

    let text = body_text(response).await;
    assert!(text.contains("Sitemap: https://rect.one/sitemap.xml"));
}
