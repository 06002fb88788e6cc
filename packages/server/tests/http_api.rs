//! HTTP API integration tests.
//!
//! Tests for the participant, message and heartbeat endpoints.

mod fixtures;

use std::time::Duration;

use fixtures::{T0, TestServer};
use lounge_server::{
    domain::{ChatStore, InactivityPolicy, Timestamp},
    usecase::SweepInactiveUseCase,
};
use reqwest::{Client, StatusCode};
use serde_json::{Value, json};

async fn register(client: &Client, server: &TestServer, name: &str) -> StatusCode {
    client
        .post(server.url("/participants"))
        .json(&json!({"name": name}))
        .send()
        .await
        .expect("Failed to send request")
        .status()
}

async fn post_message(
    client: &Client,
    server: &TestServer,
    user: &str,
    body: Value,
) -> StatusCode {
    client
        .post(server.url("/messages"))
        .header("User", user)
        .json(&body)
        .send()
        .await
        .expect("Failed to send request")
        .status()
}

async fn messages_for(
    client: &Client,
    server: &TestServer,
    user: &str,
    query: &str,
) -> Vec<Value> {
    let response = client
        .get(server.url(&format!("/messages{query}")))
        .header("User", user)
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), StatusCode::OK);
    let body: Value = response.json().await.expect("Failed to parse JSON");
    body.as_array().expect("Response should be an array").clone()
}

fn texts(messages: &[Value]) -> Vec<&str> {
    messages
        .iter()
        .map(|m| m["text"].as_str().unwrap())
        .collect()
}

#[tokio::test]
async fn test_health_endpoint() {
    // テスト項目: /health エンドポイントが正常に動作する
    // given (前提条件):
    let server = TestServer::start().await;
    let client = Client::new();

    // when (操作):
    let response = client
        .get(server.url("/health"))
        .send()
        .await
        .expect("Failed to send request");

    // then (期待する結果):
    assert_eq!(response.status(), StatusCode::OK);
    let body: Value = response.json().await.expect("Failed to parse JSON");
    assert_eq!(body["status"], "ok");
}

#[tokio::test]
async fn test_register_then_conflict() {
    // テスト項目: Ana の登録は 201、同名の再登録は 409
    // given (前提条件):
    let server = TestServer::start().await;
    let client = Client::new();

    // when (操作):
    let first = register(&client, &server, "Ana").await;
    let second = register(&client, &server, "Ana").await;
    let other = register(&client, &server, "Bob").await;

    // then (期待する結果):
    assert_eq!(first, StatusCode::CREATED);
    assert_eq!(second, StatusCode::CONFLICT);
    assert_eq!(other, StatusCode::CREATED);
}

#[tokio::test]
async fn test_register_invalid_input() {
    // テスト項目: 空の名前・name 欠落・JSON でないボディは 422
    let server = TestServer::start().await;
    let client = Client::new();

    let empty = register(&client, &server, "").await;
    let missing = client
        .post(server.url("/participants"))
        .json(&json!({"nome": "Ana"}))
        .send()
        .await
        .unwrap()
        .status();
    let not_a_string = client
        .post(server.url("/participants"))
        .json(&json!({"name": 42}))
        .send()
        .await
        .unwrap()
        .status();

    assert_eq!(empty, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(missing, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(not_a_string, StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn test_list_participants() {
    // テスト項目: /participants は name と lastStatus の一覧を返す
    // given (前提条件):
    let server = TestServer::start().await;
    let client = Client::new();
    register(&client, &server, "Ana").await;
    register(&client, &server, "Bob").await;

    // when (操作):
    let response = client
        .get(server.url("/participants"))
        .send()
        .await
        .expect("Failed to send request");

    // then (期待する結果):
    assert_eq!(response.status(), StatusCode::OK);
    let body: Value = response.json().await.unwrap();
    assert_eq!(
        body,
        json!([
            {"name": "Ana", "lastStatus": T0},
            {"name": "Bob", "lastStatus": T0},
        ])
    );
}

#[tokio::test]
async fn test_broadcast_visible_with_join_notice() {
    // テスト項目: Ana の全員宛てメッセージが、入室通知の後に Bob から見える
    // given (前提条件):
    let server = TestServer::start().await;
    let client = Client::new();
    assert_eq!(register(&client, &server, "Ana").await, StatusCode::CREATED);

    // when (操作):
    let posted = post_message(
        &client,
        &server,
        "Ana",
        json!({"to": "Todos", "text": "hi", "type": "message"}),
    )
    .await;
    let for_bob = messages_for(&client, &server, "Bob", "").await;

    // then (期待する結果):
    assert_eq!(posted, StatusCode::CREATED);
    assert_eq!(for_bob.len(), 2);
    assert_eq!(for_bob[0]["from"], "Ana");
    assert_eq!(for_bob[0]["type"], "status");
    assert_eq!(for_bob[0]["to"], "Todos");
    assert_eq!(for_bob[1]["text"], "hi");
    assert_eq!(for_bob[1]["type"], "message");
}

#[tokio::test]
async fn test_private_message_visibility() {
    // テスト項目: Ana→Bob の private_message は Carol には見えない
    // given (前提条件):
    let server = TestServer::start().await;
    let client = Client::new();
    register(&client, &server, "Ana").await;

    // when (操作):
    let posted = post_message(
        &client,
        &server,
        "Ana",
        json!({"to": "Bob", "text": "secret", "type": "private_message"}),
    )
    .await;

    // then (期待する結果):
    assert_eq!(posted, StatusCode::CREATED);
    let for_carol = messages_for(&client, &server, "Carol", "").await;
    let for_bob = messages_for(&client, &server, "Bob", "").await;
    let for_ana = messages_for(&client, &server, "Ana", "").await;
    assert!(!texts(&for_carol).contains(&"secret"));
    assert!(texts(&for_bob).contains(&"secret"));
    assert!(texts(&for_ana).contains(&"secret"));
}

#[tokio::test]
async fn test_messages_limit() {
    // テスト項目: limit=2 は末尾 2 件、数値でない limit は全件
    // given (前提条件):
    let server = TestServer::start().await;
    let client = Client::new();
    register(&client, &server, "Ana").await;
    for text in ["one", "two", "three"] {
        post_message(
            &client,
            &server,
            "Ana",
            json!({"to": "Todos", "text": text, "type": "message"}),
        )
        .await;
    }

    // when (操作):
    let limited = messages_for(&client, &server, "Bob", "?limit=2").await;
    let unlimited = messages_for(&client, &server, "Bob", "?limit=abc").await;
    let zero = messages_for(&client, &server, "Bob", "?limit=0").await;

    // then (期待する結果):
    assert_eq!(texts(&limited), vec!["two", "three"]);
    assert_eq!(unlimited.len(), 4);
    assert_eq!(zero.len(), 4);
}

#[tokio::test]
async fn test_post_message_rejections() {
    // テスト項目: 未登録の送信者・不正な種別・欠落フィールドは 422
    // given (前提条件):
    let server = TestServer::start().await;
    let client = Client::new();
    register(&client, &server, "Ana").await;

    // when (操作):
    let unknown_sender = post_message(
        &client,
        &server,
        "Mallory",
        json!({"to": "Todos", "text": "hi", "type": "message"}),
    )
    .await;
    let status_kind = post_message(
        &client,
        &server,
        "Ana",
        json!({"to": "Todos", "text": "hi", "type": "status"}),
    )
    .await;
    let bogus_kind = post_message(
        &client,
        &server,
        "Ana",
        json!({"to": "Todos", "text": "hi", "type": "shout"}),
    )
    .await;
    let missing_text =
        post_message(&client, &server, "Ana", json!({"to": "Todos", "type": "message"})).await;
    let no_header = client
        .post(server.url("/messages"))
        .json(&json!({"to": "Todos", "text": "hi", "type": "message"}))
        .send()
        .await
        .unwrap()
        .status();

    // then (期待する結果):
    assert_eq!(unknown_sender, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(status_kind, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(bogus_kind, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(missing_text, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(no_header, StatusCode::UNPROCESSABLE_ENTITY);

    // 入室通知以外は何も書き込まれていない
    assert_eq!(server.store.list_messages().await.unwrap().len(), 1);
}

#[tokio::test]
async fn test_heartbeat() {
    // テスト項目: 登録済みの参加者のハートビートは 200、未登録は 404
    // given (前提条件):
    let server = TestServer::start().await;
    let client = Client::new();
    register(&client, &server, "Ana").await;
    server.clock.advance_millis(5_000);

    // when (操作):
    let known = client
        .post(server.url("/status"))
        .header("User", "Ana")
        .send()
        .await
        .unwrap()
        .status();
    let unknown = client
        .post(server.url("/status"))
        .header("User", "Ghost")
        .send()
        .await
        .unwrap()
        .status();
    let anonymous = client
        .post(server.url("/status"))
        .send()
        .await
        .unwrap()
        .status();

    // then (期待する結果):
    assert_eq!(known, StatusCode::OK);
    assert_eq!(unknown, StatusCode::NOT_FOUND);
    assert_eq!(anonymous, StatusCode::NOT_FOUND);

    let participants = server.store.list_participants().await.unwrap();
    assert_eq!(participants[0].last_seen_at, Timestamp::new(T0 + 5_000));
}

#[tokio::test]
async fn test_sweep_evicts_silent_participant() {
    // テスト項目: ハートビートを送らない Dee は掃除で退室し、退室通知が全員に見える
    // given (前提条件):
    let server = TestServer::start().await;
    let client = Client::new();
    register(&client, &server, "Dee").await;
    register(&client, &server, "Eve").await;
    server.clock.advance_millis(9_000);
    client
        .post(server.url("/status"))
        .header("User", "Eve")
        .send()
        .await
        .unwrap();
    server.clock.advance_millis(2_000);

    // when (操作): T0+11s に掃除
    let sweep = SweepInactiveUseCase::new(
        server.store.clone(),
        InactivityPolicy::new(Duration::from_secs(10)),
    );
    let report = sweep.execute(Timestamp::new(T0 + 11_000)).await.unwrap();

    // then (期待する結果):
    assert_eq!(report.evicted.len(), 1);
    let participants: Value = client
        .get(server.url("/participants"))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(participants, json!([{"name": "Eve", "lastStatus": T0 + 9_000}]));

    let for_eve = messages_for(&client, &server, "Eve", "?limit=1").await;
    assert_eq!(for_eve[0]["from"], "Dee");
    assert_eq!(for_eve[0]["type"], "status");
    assert_eq!(for_eve[0]["text"], "left the room");

    // Dee はもう投稿できない
    let posted = post_message(
        &client,
        &server,
        "Dee",
        json!({"to": "Todos", "text": "still here?", "type": "message"}),
    )
    .await;
    assert_eq!(posted, StatusCode::UNPROCESSABLE_ENTITY);
}
