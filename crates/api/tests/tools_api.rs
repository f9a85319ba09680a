//! HTTP-level tests for the tool listing, highlight, detail and derived
//! endpoints, served from the embedded seed in local mode.

mod common;

use axum::http::StatusCode;
use common::{body_json, build_test_app, get, slugs};

// ---------------------------------------------------------------------------
// GET /api/v1/tools
// ---------------------------------------------------------------------------

#[tokio::test]
async fn test_list_tools_defaults() {
    let response = get(build_test_app(), "/api/v1/tools").await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["total"], 6);
    assert_eq!(json["page"], 1);
    assert_eq!(json["limit"], 24);
    assert_eq!(json["has_more"], false);
    assert_eq!(json["data"].as_array().unwrap().len(), 6);
}

#[tokio::test]
async fn test_list_tools_sorted_by_name_and_paginated() {
    let response = get(build_test_app(), "/api/v1/tools?sort=name&limit=2&page=2").await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(slugs(&json["data"]), vec!["cursor", "github-copilot"]);
    assert_eq!(json["total"], 6);
    assert_eq!(json["has_more"], true);
}

#[tokio::test]
async fn test_list_tools_newest_first() {
    let response = get(build_test_app(), "/api/v1/tools?sort=newest&limit=3").await;
    let json = body_json(response).await;
    assert_eq!(slugs(&json["data"]), vec!["windsurf", "cursor", "claude"]);
}

#[tokio::test]
async fn test_list_tools_filters() {
    let json = body_json(get(build_test_app(), "/api/v1/tools?category=development").await).await;
    assert_eq!(json["total"], 3);

    let json = body_json(get(build_test_app(), "/api/v1/tools?tags=ai-coding,chatbot").await).await;
    let mut found = slugs(&json["data"]);
    found.sort();
    assert_eq!(found, vec!["chatgpt", "cursor", "github-copilot"]);

    let json = body_json(get(build_test_app(), "/api/v1/tools?platforms=iOS&q=note").await).await;
    assert_eq!(slugs(&json["data"]), vec!["notion"]);
}

#[tokio::test]
async fn test_page_past_the_end_is_empty_with_total() {
    let json = body_json(get(build_test_app(), "/api/v1/tools?page=50").await).await;
    assert_eq!(json["data"].as_array().unwrap().len(), 0);
    assert_eq!(json["total"], 6);
    assert_eq!(json["has_more"], false);
}

#[tokio::test]
async fn test_out_of_range_numbers_are_normalized() {
    let json = body_json(get(build_test_app(), "/api/v1/tools?page=0&limit=1000").await).await;
    assert_eq!(json["page"], 1);
    assert_eq!(json["limit"], 100);
}

#[tokio::test]
async fn test_non_numeric_page_is_rejected() {
    let response = get(build_test_app(), "/api/v1/tools?page=two").await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let json = body_json(response).await;
    assert_eq!(json["code"], "INVALID_FILTER");
}

// ---------------------------------------------------------------------------
// Highlights
// ---------------------------------------------------------------------------

#[tokio::test]
async fn test_featured_excludes_unfeatured_tools() {
    let json = body_json(get(build_test_app(), "/api/v1/tools/featured?limit=10").await).await;
    let found = slugs(&json["data"]);
    assert_eq!(found.len(), 5);
    assert!(!found.contains(&"windsurf".to_string()));
}

#[tokio::test]
async fn test_trending_and_latest_respect_limit() {
    let json = body_json(get(build_test_app(), "/api/v1/tools/trending?limit=2").await).await;
    assert_eq!(slugs(&json["data"]), vec!["windsurf", "cursor"]);

    let json = body_json(get(build_test_app(), "/api/v1/tools/latest").await).await;
    assert_eq!(json["data"].as_array().unwrap().len(), 6);
}

#[tokio::test]
async fn test_recommended_orders_by_rating() {
    let json = body_json(get(build_test_app(), "/api/v1/tools/recommended?sort=name&limit=4").await).await;
    assert_eq!(
        slugs(&json["data"]),
        vec!["chatgpt", "claude", "github-copilot", "cursor"]
    );
}

// ---------------------------------------------------------------------------
// Detail
// ---------------------------------------------------------------------------

#[tokio::test]
async fn test_tool_detail_with_locale_and_deals() {
    let response = get(build_test_app(), "/api/v1/tools/cursor?lang=zh-CN").await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    let data = &json["data"];
    assert_eq!(data["tool"]["slug"], "cursor");
    assert_eq!(data["display"]["locale"], "zh");
    assert_ne!(data["display"]["slogan"], data["tool"]["slogan"]);
    let deals = data["deals"].as_array().unwrap();
    assert_eq!(deals.len(), 1);
    assert_eq!(deals[0]["id"], "deal-2");
}

#[tokio::test]
async fn test_expired_deals_are_not_attached() {
    let json = body_json(get(build_test_app(), "/api/v1/tools/chatgpt").await).await;
    assert_eq!(json["data"]["display"]["locale"], "en");
    assert!(json["data"]["deals"].as_array().unwrap().is_empty());
}

#[tokio::test]
async fn test_unknown_tool_is_404() {
    let response = get(build_test_app(), "/api/v1/tools/nope").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let json = body_json(response).await;
    assert_eq!(json["code"], "NOT_FOUND");
    assert_eq!(json["error"], "Tool 'nope' not found");
}

// ---------------------------------------------------------------------------
// Derived views
// ---------------------------------------------------------------------------

#[tokio::test]
async fn test_related_tools_exclude_the_tool() {
    let json = body_json(get(build_test_app(), "/api/v1/tools/cursor/related").await).await;
    let mut found = slugs(&json["data"]);
    found.sort();
    assert_eq!(found, vec!["github-copilot", "windsurf"]);

    let response = get(build_test_app(), "/api/v1/tools/nope/related").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_platform_listing() {
    let json = body_json(get(build_test_app(), "/api/v1/platforms/iOS/tools").await).await;
    let mut found = slugs(&json["data"]);
    found.sort();
    assert_eq!(found, vec!["chatgpt", "notion"]);

    let json = body_json(get(build_test_app(), "/api/v1/platforms/Amiga/tools").await).await;
    assert!(json["data"].as_array().unwrap().is_empty());
}
