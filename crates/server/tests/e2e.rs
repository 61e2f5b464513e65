use std::net::SocketAddr;
use std::sync::Arc;

use reqwest::StatusCode as HttpStatusCode;
use serde_json::json;
use service::todo::repository::mock::{sample_todos, InMemoryTodoRepository};
use tokio::net::TcpListener;

struct TestApp {
    base_url: String,
}

// In-memory store; the Postgres path is covered by the gated repository tests
async fn start_server() -> anyhow::Result<TestApp> {
    let repo = Arc::new(InMemoryTodoRepository::with_todos(sample_todos()));
    let app = server::startup::build_app(repo);

    let listener = TcpListener::bind((std::net::Ipv4Addr::LOCALHOST, 0)).await?;
    let addr: SocketAddr = listener.local_addr()?;
    let base_url = format!("http://{}:{}", addr.ip(), addr.port());

    tokio::spawn(async move {
        if let Err(e) = axum::serve(listener, app).await { eprintln!("server error: {}", e); }
    });

    Ok(TestApp { base_url })
}

#[tokio::test]
async fn e2e_public_health() -> anyhow::Result<()> {
    let app = start_server().await?;
    let res = reqwest::get(format!("{}/health", app.base_url)).await?;
    assert_eq!(res.status(), HttpStatusCode::OK);
    let body = res.json::<serde_json::Value>().await?;
    assert_eq!(body["status"], "ok");
    Ok(())
}

#[tokio::test]
async fn e2e_create_then_fetch_and_filter() -> anyhow::Result<()> {
    let app = start_server().await?;
    let c = reqwest::Client::new();

    let res = c.post(format!("{}/api/todos", app.base_url))
        .json(&json!({"owner": "OHMNET Bot", "status": false, "category": "homework", "body": "frogs"}))
        .send().await?;
    assert_eq!(res.status(), HttpStatusCode::CREATED);
    let created = res.json::<serde_json::Value>().await?;
    let id = created["id"].as_str().unwrap_or_default().to_owned();
    assert!(!id.is_empty());

    let res = c.get(format!("{}/api/todos/{}", app.base_url, id)).send().await?;
    assert_eq!(res.status(), HttpStatusCode::OK);
    let stored = res.json::<serde_json::Value>().await?;
    assert_eq!(stored["owner"], "OHMNET Bot");
    assert_eq!(stored["category"], "homework");

    let res = c.get(format!("{}/api/todos", app.base_url))
        .query(&[("owner", "ohm")])
        .send().await?;
    assert_eq!(res.status(), HttpStatusCode::OK);
    let found = res.json::<Vec<serde_json::Value>>().await?;
    assert_eq!(found.len(), 1);
    assert_eq!(found[0]["id"], id.as_str());
    Ok(())
}

#[tokio::test]
async fn e2e_rejects_invalid_payload_without_storing() -> anyhow::Result<()> {
    let app = start_server().await?;
    let c = reqwest::Client::new();

    let res = c.post(format!("{}/api/todos", app.base_url))
        .json(&json!({"owner": "Pat", "category": "IBM", "body": "missing status"}))
        .send().await?;
    assert_eq!(res.status(), HttpStatusCode::BAD_REQUEST);
    let body = res.json::<serde_json::Value>().await?;
    assert_eq!(body["fields"], json!(["status"]));

    let all = c.get(format!("{}/api/todos", app.base_url)).send().await?
        .json::<Vec<serde_json::Value>>().await?;
    assert_eq!(all.len(), 4);
    Ok(())
}
