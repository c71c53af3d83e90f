//! End-to-end tests against a real server on an ephemeral port.

#![allow(clippy::panic)]

use std::net::SocketAddr;
use std::time::Duration;

use futures_util::{SinkExt, StreamExt};
use reqwest::StatusCode;
use serde_json::Value;
use tokio::net::{TcpListener, TcpStream};
use tokio_test::assert_ok;
use tokio_tungstenite::tungstenite::Message;
use tokio_tungstenite::{MaybeTlsStream, WebSocketStream};

use concept_draw::api::build_app;
use concept_draw::app_state::AppState;
use concept_draw::config::DrawConfig;
use concept_draw::domain::CategoryTable;

type Ws = WebSocketStream<MaybeTlsStream<TcpStream>>;

const TWO_CATEGORIES: &str = r##"{
    "A": { "color": "#111111", "labels": ["x", "y"] },
    "B": { "color": "#222222", "labels": ["z"] }
}"##;

fn trusted_config() -> DrawConfig {
    DrawConfig {
        trust_forwarded_for: true,
        ..DrawConfig::default()
    }
}

async fn spawn_server(table: CategoryTable, config: &DrawConfig) -> SocketAddr {
    let app = build_app(AppState::new(table, config));
    let listener = assert_ok!(TcpListener::bind("127.0.0.1:0").await);
    let addr = assert_ok!(listener.local_addr());
    tokio::spawn(async move {
        let _ = axum::serve(
            listener,
            app.into_make_service_with_connect_info::<SocketAddr>(),
        )
        .await;
    });
    addr
}

async fn two_category_server() -> SocketAddr {
    let table = assert_ok!(CategoryTable::from_json(TWO_CATEGORIES));
    spawn_server(table, &trusted_config()).await
}

async fn get_as(addr: SocketAddr, path: &str, ip: &str) -> (StatusCode, Value) {
    let response = assert_ok!(
        reqwest::Client::new()
            .get(format!("http://{addr}{path}"))
            .header("x-forwarded-for", ip)
            .send()
            .await
    );
    let status = response.status();
    let body = response.json::<Value>().await.unwrap_or(Value::Null);
    (status, body)
}

async fn connect(addr: SocketAddr) -> Ws {
    let (ws, _) = assert_ok!(tokio_tungstenite::connect_async(format!("ws://{addr}/ws")).await);
    ws
}

async fn next_json(ws: &mut Ws) -> Value {
    let Ok(Some(Ok(msg))) = tokio::time::timeout(Duration::from_secs(5), ws.next()).await else {
        panic!("expected a websocket message");
    };
    let text = assert_ok!(msg.to_text());
    assert_ok!(serde_json::from_str(text))
}

fn u64_at(value: &Value, path: &[&str]) -> Option<u64> {
    path.iter()
        .try_fold(value, |v, key| v.get(key))
        .and_then(Value::as_u64)
}

#[tokio::test]
async fn full_draw_lifecycle_over_http() {
    let addr = two_category_server().await;

    let (status, first) = get_as(addr, "/draw", "10.0.0.1").await;
    assert_eq!(status, StatusCode::OK);
    let Some(concept) = first.get("concept").and_then(Value::as_str) else {
        panic!("first draw should assign a concept");
    };
    let expected_color = if concept == "z" { "#222222" } else { "#111111" };
    assert_eq!(first.get("color").and_then(Value::as_str), Some(expected_color));
    assert_eq!(u64_at(&first, &["remaining"]), Some(2));

    let (status, again) = get_as(addr, "/draw", "10.0.0.1").await;
    assert_eq!(status, StatusCode::FORBIDDEN);
    assert_eq!(
        again.get("previous").and_then(|p| p.get("concept")),
        first.get("concept")
    );
    assert_eq!(u64_at(&again, &["remaining"]), Some(2));

    for ip in ["10.0.0.2", "10.0.0.3"] {
        let (status, body) = get_as(addr, "/draw", ip).await;
        assert_eq!(status, StatusCode::OK);
        assert!(body.get("concept").and_then(Value::as_str).is_some());
    }

    let (status, exhausted) = get_as(addr, "/draw", "10.0.0.4").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(exhausted.get("concept"), Some(&Value::Null));
    assert_eq!(u64_at(&exhausted, &["remaining"]), Some(0));

    let (_, status_body) = get_as(addr, "/status", "10.0.0.4").await;
    assert_eq!(status_body.get("drawn").and_then(Value::as_bool), Some(false));
    assert_eq!(u64_at(&status_body, &["remaining"]), Some(0));

    let (_, monitor) = get_as(addr, "/api/monitor", "10.0.0.99").await;
    assert_eq!(u64_at(&monitor, &["stats", "total_participants"]), Some(3));
    assert_eq!(u64_at(&monitor, &["stats", "remaining_concepts"]), Some(0));
    assert_eq!(u64_at(&monitor, &["stats", "total_concepts"]), Some(3));
    assert_eq!(u64_at(&monitor, &["stats", "category_stats", "A"]), Some(2));
    assert_eq!(u64_at(&monitor, &["stats", "category_stats", "B"]), Some(1));
}

#[tokio::test]
async fn socket_peer_is_the_identity_by_default() {
    let addr = spawn_server(CategoryTable::builtin(), &DrawConfig::default()).await;

    let (status, first) = get_as(addr, "/draw", "10.9.9.9").await;
    assert_eq!(status, StatusCode::OK);
    assert!(first.get("concept").and_then(Value::as_str).is_some());

    // A different forwarded address does not make a new participant.
    let (status, again) = get_as(addr, "/draw", "10.9.9.10").await;
    assert_eq!(status, StatusCode::FORBIDDEN);
    assert_eq!(
        again.get("previous").and_then(|p| p.get("ip")).and_then(Value::as_str),
        Some("127.0.0.1")
    );

    let (_, status_body) = get_as(addr, "/status", "10.9.9.11").await;
    assert_eq!(status_body.get("drawn").and_then(Value::as_bool), Some(true));
    assert_eq!(status_body.get("concept"), first.get("concept"));

    let (_, monitor) = get_as(addr, "/api/monitor", "10.9.9.12").await;
    let ips: Option<Vec<&str>> = monitor
        .get("participants")
        .and_then(Value::as_array)
        .map(|list| list.iter().filter_map(|p| p.get("ip")?.as_str()).collect());
    assert_eq!(ips, Some(vec!["127.0.0.1"]));
    assert_eq!(u64_at(&monitor, &["stats", "remaining_concepts"]), Some(14));
}

#[tokio::test]
async fn invalid_forwarded_address_is_bad_request() {
    let addr = two_category_server().await;
    let (status, body) = get_as(addr, "/draw", "2001:db8::1").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(u64_at(&body, &["error", "code"]), Some(1001));

    let (_, monitor) = get_as(addr, "/api/monitor", "10.0.0.1").await;
    assert_eq!(u64_at(&monitor, &["stats", "remaining_concepts"]), Some(3));
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn concurrent_http_draws_hand_out_each_concept_once() {
    let addr = spawn_server(CategoryTable::builtin(), &trusted_config()).await;

    let mut handles = Vec::new();
    for i in 1..=30u8 {
        handles.push(tokio::spawn(async move {
            get_as(addr, "/draw", &format!("10.1.0.{i}")).await
        }));
    }

    let mut assigned = 0;
    let mut exhausted = 0;
    for handle in handles {
        let (status, body) = assert_ok!(handle.await);
        assert_eq!(status, StatusCode::OK);
        if body.get("concept").and_then(Value::as_str).is_some() {
            assigned += 1;
        } else {
            exhausted += 1;
        }
    }
    assert_eq!(assigned, 15);
    assert_eq!(exhausted, 15);

    let (_, monitor) = get_as(addr, "/api/monitor", "10.0.0.1").await;
    assert_eq!(u64_at(&monitor, &["stats", "total_participants"]), Some(15));
    assert_eq!(u64_at(&monitor, &["stats", "remaining_concepts"]), Some(0));
}

#[tokio::test]
async fn observer_gets_snapshot_then_live_events() {
    let addr = two_category_server().await;
    let mut ws = connect(addr).await;

    let snapshot = next_json(&mut ws).await;
    assert_eq!(snapshot.get("type").and_then(Value::as_str), Some("snapshot"));
    assert_eq!(u64_at(&snapshot, &["payload", "stats", "total_participants"]), Some(0));
    assert_eq!(u64_at(&snapshot, &["payload", "stats", "total_concepts"]), Some(3));

    let (_, drawn) = get_as(addr, "/draw", "10.0.0.1").await;

    let event = next_json(&mut ws).await;
    assert_eq!(event.get("type").and_then(Value::as_str), Some("event"));
    let payload = event.get("payload").cloned().unwrap_or(Value::Null);
    assert_eq!(
        payload.get("event_type").and_then(Value::as_str),
        Some("participant_drew")
    );
    assert_eq!(payload.get("ip").and_then(Value::as_str), Some("10.0.0.1"));
    assert_eq!(payload.get("concept"), drawn.get("concept"));
    assert_eq!(u64_at(&payload, &["sequence"]), Some(1));
    assert_eq!(u64_at(&payload, &["remaining"]), Some(2));

    // A blocked repeat produces no event; the ping reply is next.
    let _ = get_as(addr, "/draw", "10.0.0.1").await;
    let ping = r#"{"id": "p1", "type": "command", "payload": {"command": "ping"}}"#;
    assert_ok!(ws.send(Message::text(ping)).await);
    let reply = next_json(&mut ws).await;
    assert_eq!(reply.get("type").and_then(Value::as_str), Some("response"));
    assert_eq!(reply.get("id").and_then(Value::as_str), Some("p1"));
}

#[tokio::test]
async fn late_observer_is_seeded_with_earlier_draws() {
    let addr = two_category_server().await;
    let _ = get_as(addr, "/draw", "10.0.0.1").await;
    let _ = get_as(addr, "/draw", "10.0.0.2").await;

    let mut ws = connect(addr).await;
    let snapshot = next_json(&mut ws).await;
    let participants = snapshot
        .get("payload")
        .and_then(|p| p.get("participants"))
        .and_then(Value::as_array)
        .map(Vec::len);
    assert_eq!(participants, Some(2));
    assert_eq!(u64_at(&snapshot, &["payload", "stats", "remaining_concepts"]), Some(1));

    let _ = get_as(addr, "/draw", "10.0.0.3").await;
    let event = next_json(&mut ws).await;
    assert_eq!(u64_at(&event, &["payload", "sequence"]), Some(3));
}

#[tokio::test]
async fn every_observer_sees_every_draw_in_order() {
    let addr = spawn_server(CategoryTable::builtin(), &trusted_config()).await;
    let mut first = connect(addr).await;
    let mut second = connect(addr).await;
    let _ = next_json(&mut first).await;
    let _ = next_json(&mut second).await;

    for i in 1..=5u8 {
        let _ = get_as(addr, "/draw", &format!("10.2.0.{i}")).await;
    }

    for ws in [&mut first, &mut second] {
        for expected in 1..=5u64 {
            let event = next_json(ws).await;
            assert_eq!(u64_at(&event, &["payload", "sequence"]), Some(expected));
        }
    }
}
