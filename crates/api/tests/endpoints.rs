use axum::{
    body::{to_bytes, Body},
    http::{header, Method, Request, StatusCode},
    Router,
};
use chrono::{DateTime, Utc};
use serde_json::{json, Value};
use tower::ServiceExt;

const KNOWN_PATHS: &[&str] = &[
    "/live-scores",
    "/grizzlies-analytics",
    "/perfect-game-analytics",
    "/blaze-analytics",
    "/nil-valuation",
    "/character-assessment",
];

struct Reply {
    status: StatusCode,
    headers: axum::http::HeaderMap,
    body: Vec<u8>,
}

impl Reply {
    fn json(&self) -> Value {
        serde_json::from_slice(&self.body).expect("response body is JSON")
    }
}

async fn send(app: &Router, method: Method, uri: &str, body: Option<&str>) -> Reply {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(b) => builder
            .header("content-type", "application/json")
            .body(Body::from(b.to_string()))
            .expect("failed to build json request"),
        None => builder.body(Body::empty()).expect("failed to build request"),
    };

    let response = app.clone().oneshot(request).await.expect("router request failed");
    let status = response.status();
    let headers = response.headers().clone();
    let body = to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("failed to read response body")
        .to_vec();
    Reply {
        status,
        headers,
        body,
    }
}

async fn get(uri: &str) -> Reply {
    send(&blaze_api::app(), Method::GET, uri, None).await
}

fn assert_envelope(v: &Value) {
    assert!(v["success"].is_boolean(), "{v}");
    let ts = v["timestamp"].as_str().expect("timestamp present");
    let ts: DateTime<Utc> = ts.parse().expect("timestamp is ISO-8601");
    assert!(ts <= Utc::now());
}

fn assert_cors(headers: &axum::http::HeaderMap) {
    assert_eq!(headers[header::ACCESS_CONTROL_ALLOW_ORIGIN], "*");
    assert_eq!(headers[header::ACCESS_CONTROL_ALLOW_HEADERS], "Content-Type");
    assert_eq!(headers[header::ACCESS_CONTROL_ALLOW_METHODS], "GET, POST, OPTIONS");
}

fn strip_timestamps(v: &mut Value) {
    match v {
        Value::Object(map) => {
            map.remove("timestamp");
            map.values_mut().for_each(strip_timestamps);
        }
        Value::Array(items) => items.iter_mut().for_each(strip_timestamps),
        _ => {}
    }
}

#[tokio::test]
async fn live_scores_for_mlb() {
    let reply = get("/live-scores?sport=mlb").await;
    assert_eq!(reply.status, StatusCode::OK);
    assert_eq!(reply.headers[header::CACHE_CONTROL], "public, max-age=60");
    assert_eq!(reply.headers[header::CONTENT_TYPE], "application/json");
    assert_cors(&reply.headers);

    let v = reply.json();
    assert_envelope(&v);
    assert_eq!(v["success"], true);
    assert_eq!(v["sport"], "MLB");
    assert_eq!(v["count"], 2);
    assert_eq!(v["scores"][0]["home"]["team"], "St. Louis Cardinals");
}

#[tokio::test]
async fn live_scores_unknown_sport() {
    let reply = get("/live-scores?sport=curling").await;
    assert_eq!(reply.status, StatusCode::BAD_REQUEST);
    assert!(reply.headers.get(header::CACHE_CONTROL).is_none());
    let v = reply.json();
    assert_envelope(&v);
    assert_eq!(v["success"], false);
    assert_eq!(v["error"], "Sport not found");
    assert_eq!(v["available_sports"], json!(["all", "mlb", "nfl", "ncaa", "nba"]));
}

#[tokio::test]
async fn blaze_team_predictions() {
    let reply = get("/blaze-analytics?team=cardinals").await;
    assert_eq!(reply.status, StatusCode::OK);
    assert!(reply.headers.get(header::CACHE_CONTROL).is_none());
    let v = reply.json();
    assert_envelope(&v);
    assert_eq!(v["predictions"]["win_probability_tonight"], 0.617);
    assert_eq!(v["predictions"]["playoff_chances"], 0.67);
}

#[tokio::test]
async fn blaze_unknown_team() {
    let reply = get("/blaze-analytics?team=wizards").await;
    assert_eq!(reply.status, StatusCode::BAD_REQUEST);
    let v = reply.json();
    assert_envelope(&v);
    assert_eq!(v["error"], "Team not found");
    let teams = v["available_teams"].as_array().unwrap();
    assert!(teams.contains(&json!("cardinals")));
}

#[tokio::test]
async fn blaze_unknown_league_lists_exactly_the_known_keys() {
    let v = get("/blaze-analytics?league=xfl").await.json();
    assert_eq!(v["error"], "League not found");
    assert_eq!(
        v["available_leagues"],
        json!(["mlb", "nfl", "nba", "college_football"])
    );
}

#[tokio::test]
async fn blaze_league_beats_team() {
    let v = get("/blaze-analytics?team=cardinals&league=nba").await.json();
    assert_eq!(v["league"], "NBA");
    assert!(v.get("predictions").is_none());
}

#[tokio::test]
async fn blaze_platform_metrics() {
    let v = get("/blaze-analytics?metrics=true").await.json();
    assert_eq!(v["platform_metrics"]["accuracy_rate"], 0.946);
    let v = get("/blaze-analytics?platform=true").await.json();
    assert!(v["platform_metrics"]["team_readiness"]["cardinals"].is_number());
}

#[tokio::test]
async fn character_assessment_from_body() {
    let app = blaze_api::app();
    let body = r#"{"playerId":"p1","dataPoints":{"clutchPerformance":0.9,"consistencyScore":0.8,"teamworkRating":0.85,"pressureResponse":0.75}}"#;
    let reply = send(&app, Method::POST, "/character-assessment", Some(body)).await;
    assert_eq!(reply.status, StatusCode::OK);
    assert_eq!(reply.headers[header::CACHE_CONTROL], "public, max-age=600");

    let v = reply.json();
    assert_envelope(&v);
    let a = &v["characterAssessment"];
    assert_eq!(a["overallScore"], 84);
    assert_eq!(a["traitScores"]["grit"]["grade"], "A");
    let weights: f64 = a["traitScores"]
        .as_object()
        .unwrap()
        .values()
        .map(|t| t["weight"].as_f64().unwrap())
        .sum();
    assert!((weights - 1.0).abs() <= 1e-6);
}

#[tokio::test]
async fn character_assessment_from_query() {
    let reply = get(
        "/character-assessment?playerId=p1&clutchPerformance=0.9&consistencyScore=0.8&teamworkRating=0.85&pressureResponse=0.75",
    )
    .await;
    assert_eq!(reply.status, StatusCode::OK);
    assert_eq!(reply.json()["characterAssessment"]["overallScore"], 84);
}

#[tokio::test]
async fn character_assessment_requires_player_id() {
    let app = blaze_api::app();
    let reply = send(&app, Method::POST, "/character-assessment", Some("{}")).await;
    assert_eq!(reply.status, StatusCode::BAD_REQUEST);
    let v = reply.json();
    assert_envelope(&v);
    assert_eq!(v["error"], "playerId is required");
}

#[tokio::test]
async fn nil_valuation_for_sec_quarterback() {
    let reply = get("/nil-valuation?sport=football&position=qb&conference=SEC").await;
    assert_eq!(reply.status, StatusCode::OK);
    assert_eq!(reply.headers[header::CACHE_CONTROL], "public, max-age=300");

    let v = reply.json();
    assert_envelope(&v);
    let total = v["nilValuation"]["totalAnnualValue"].as_i64().unwrap();
    let deals = &v["dealRecommendations"];
    let split: i64 = ["endorsements", "socialMedia", "appearances", "merchandise"]
        .iter()
        .map(|k| deals[*k].as_i64().unwrap())
        .sum();
    assert!((split - total).abs() <= 4, "{split} vs {total}");
    assert!(v["nilValuation"]["breakdown"]["socialMediaBonus"].is_number());
}

#[tokio::test]
async fn nil_valuation_from_body() {
    let app = blaze_api::app();
    let body = r#"{"sport":"basketball","position":"pg","socialMedia":{"instagram":10000}}"#;
    let reply = send(&app, Method::POST, "/nil-valuation", Some(body)).await;
    assert_eq!(reply.status, StatusCode::OK);
    let v = reply.json();
    assert_eq!(v["nilValuation"]["totalAnnualValue"], 140_005);
    assert_eq!(v["projections"]["professionalPotential"], "High");
}

#[tokio::test]
async fn nil_valuation_rejects_malformed_body() {
    let app = blaze_api::app();
    let reply = send(&app, Method::POST, "/nil-valuation", Some("{\"sport\":")).await;
    assert_eq!(reply.status, StatusCode::BAD_REQUEST);
    let v = reply.json();
    assert_envelope(&v);
    assert_eq!(v["error"], "Invalid request body");
}

#[tokio::test]
async fn nil_valuation_requires_sport() {
    let reply = get("/nil-valuation?position=qb").await;
    assert_eq!(reply.status, StatusCode::BAD_REQUEST);
    assert_eq!(reply.json()["error"], "sport is required");
}

#[tokio::test]
async fn grizzlies_team_metrics() {
    let reply = get("/grizzlies-analytics?metric=teamMetrics").await;
    assert_eq!(reply.status, StatusCode::OK);
    let v = reply.json();
    assert_envelope(&v);
    assert_eq!(v["data"]["gritScore"], 0.92);
    assert_eq!(v["data"]["defensiveRating"], 108.3);
}

#[tokio::test]
async fn perfect_game_rankings_by_year() {
    let reply = get("/perfect-game-analytics?category=rankings&graduationYear=2025").await;
    assert_eq!(reply.status, StatusCode::OK);
    let v = reply.json();
    assert_eq!(v["count"], 2);
    assert_eq!(v["data"][0]["rank"], 1);

    let reply = get("/perfect-game-analytics?category=scouting").await;
    assert_eq!(reply.status, StatusCode::BAD_REQUEST);
    assert!(reply.json()["available_categories"]
        .as_array()
        .unwrap()
        .contains(&json!("austinInsights")));
}

#[tokio::test]
async fn options_preflight_on_every_known_path() {
    let app = blaze_api::app();
    for path in KNOWN_PATHS {
        let reply = send(&app, Method::OPTIONS, path, None).await;
        assert_eq!(reply.status, StatusCode::OK, "{path}");
        assert!(reply.body.is_empty(), "{path}");
        assert_cors(&reply.headers);
    }
}

#[tokio::test]
async fn unknown_path_is_404_envelope() {
    let reply = get("/live-scores/extra").await;
    assert_eq!(reply.status, StatusCode::NOT_FOUND);
    assert_cors(&reply.headers);
    let v = reply.json();
    assert_envelope(&v);
    assert_eq!(v["success"], false);
    assert_eq!(v["error"], "Not found");
}

#[tokio::test]
async fn wrong_method_is_405_envelope() {
    let app = blaze_api::app();
    let reply = send(&app, Method::POST, "/live-scores", Some("{}")).await;
    assert_eq!(reply.status, StatusCode::METHOD_NOT_ALLOWED);
    let v = reply.json();
    assert_envelope(&v);
    assert_eq!(v["error"], "Method not allowed");

    let reply = send(&app, Method::DELETE, "/nil-valuation", None).await;
    assert_eq!(reply.status, StatusCode::METHOD_NOT_ALLOWED);
}

#[tokio::test]
async fn identical_requests_differ_only_in_timestamp() {
    for uri in [
        "/live-scores",
        "/blaze-analytics",
        "/perfect-game-analytics?category=developmentPathways",
        "/character-assessment?playerId=steady-7",
        "/nil-valuation?sport=baseball&position=of&instagram=5000",
    ] {
        let mut a = get(uri).await.json();
        let mut b = get(uri).await.json();
        strip_timestamps(&mut a);
        strip_timestamps(&mut b);
        assert_eq!(a, b, "{uri}");
    }
}
