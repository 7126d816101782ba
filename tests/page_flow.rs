use axum::body::{to_bytes, Body};
use axum::http::{header, Request, StatusCode};
use axum::Router;
use showboard::app::{build_router, AppState};
use showboard::catalog;
use showboard::config::Config;
use showboard::models::{ShowEntry, ShowList};
use showboard::render::IndicatorStyle;
use tower::util::ServiceExt;

fn test_config(style: IndicatorStyle) -> Config {
    Config {
        addr: "127.0.0.1:0".parse().unwrap(),
        style,
        heading: "2025".to_string(),
    }
}

fn app_with(entries: &[ShowEntry], style: IndicatorStyle) -> Router {
    let shows = ShowList::from_entries(entries).expect("test entries are valid");
    build_router(AppState::new(shows, &test_config(style)))
}

fn catalog_app(style: IndicatorStyle) -> Router {
    app_with(catalog::SHOWS, style)
}

async fn get(app: Router, uri: &str) -> (StatusCode, Option<String>, String) {
    let req = Request::get(uri)
        .body(Body::empty())
        .expect("failed to build request");
    let res = app.oneshot(req).await.unwrap();
    let status = res.status();
    let content_type = res
        .headers()
        .get(header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .map(|s| s.to_string());
    let body = to_bytes(res.into_body(), usize::MAX).await.unwrap();
    (status, content_type, String::from_utf8(body.to_vec()).unwrap())
}

fn rating_blocks(html: &str) -> Vec<&str> {
    html.split("<div class=\"rating\">")
        .skip(1)
        .map(|rest| rest.split("</div>").next().unwrap_or(""))
        .collect()
}

#[tokio::test]
async fn health_returns_ok() {
    let (status, _, body) = get(catalog_app(IndicatorStyle::Dot), "/health").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, "OK");
}

#[tokio::test]
async fn serves_catalog_with_dots_by_default() {
    let (status, content_type, body) = get(catalog_app(IndicatorStyle::Dot), "/").await;
    assert_eq!(status, StatusCode::OK);
    assert!(content_type.unwrap().starts_with("text/html"));
    assert!(body.contains("<h1>2025</h1>"));
    assert!(body.contains("● Liked · ●● Really liked · ●●● Loved"));

    let dots: Vec<usize> = rating_blocks(&body)
        .iter()
        .map(|block| block.matches("class=\"dot\"").count())
        .collect();
    assert_eq!(dots, [2, 1, 3, 1, 3, 3, 3, 0]);
    assert_eq!(body.matches("<span class=\"watching-badge\">watching</span>").count(), 2);
    assert!(body.contains("Project</span>"));
    assert!(!body.contains("Shin's Project"));
}

#[tokio::test]
async fn style_query_switches_to_stars() {
    let (status, _, body) = get(catalog_app(IndicatorStyle::Dot), "/?style=star").await;
    assert_eq!(status, StatusCode::OK);
    for block in rating_blocks(&body) {
        assert_eq!(block.matches("class=\"star").count(), 3);
    }
    let filled: Vec<usize> = rating_blocks(&body)
        .iter()
        .map(|block| block.matches("star filled").count())
        .collect();
    assert_eq!(filled, [2, 1, 3, 1, 3, 3, 3, 0]);
    assert!(!body.contains("class=\"dot\""));
}

#[tokio::test]
async fn configured_style_is_the_default() {
    let (_, _, body) = get(catalog_app(IndicatorStyle::Star), "/").await;
    assert!(body.contains("★ Liked · ★★ Really liked · ★★★ Loved"));

    let (_, _, body) = get(catalog_app(IndicatorStyle::Star), "/?style=dot").await;
    assert!(body.contains("class=\"dot\""));
}

#[tokio::test]
async fn query_style_accepts_what_the_env_var_accepts() {
    let from_env = Config::from_lookup(|key| {
        (key == "SHOWBOARD_STYLE").then(|| "Stars".to_string())
    })
    .unwrap();
    let (_, _, expected) = get(catalog_app(from_env.style), "/").await;

    for query in ["/?style=Stars", "/?style=STAR", "/?style=stars"] {
        let (status, _, body) = get(catalog_app(IndicatorStyle::Dot), query).await;
        assert_eq!(status, StatusCode::OK, "{query}");
        assert_eq!(body, expected, "{query}");
    }
}

#[tokio::test]
async fn unknown_style_is_rejected() {
    let (status, _, _) = get(catalog_app(IndicatorStyle::Dot), "/?style=moon").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn rows_follow_entry_order() {
    let entries = [
        ShowEntry::new("Ms. Incognito", 0).watching(),
        ShowEntry::new("Beyond the Bar", 3),
    ];
    let (_, _, body) = get(app_with(&entries, IndicatorStyle::Dot), "/").await;
    let incognito = body.find("Ms. Incognito").unwrap();
    let beyond = body.find("Beyond the Bar").unwrap();
    assert!(incognito < beyond);
    assert_eq!(body.matches("watching-badge").count(), 1);
}

#[tokio::test]
async fn repeated_requests_render_identically() {
    let app = catalog_app(IndicatorStyle::Star);
    let (_, _, first) = get(app.clone(), "/").await;
    let (_, _, second) = get(app, "/").await;
    assert_eq!(first, second);
}
