use std::net::SocketAddr;

use configs::{AppConfig, AuthConfig, DatabaseConfig};
use reqwest::StatusCode as HttpStatusCode;
use serde_json::{json, Value};
use tokio::net::TcpListener;

struct TestApp {
    base_url: String,
    client: reqwest::Client,
}

impl TestApp {
    fn url(&self, path: &str) -> String { format!("{}{}", self.base_url, path) }
}

// 每个测试一个独立的内存库
fn test_config() -> AppConfig {
    AppConfig {
        database: DatabaseConfig {
            url: "sqlite::memory:".into(),
            max_connections: 1,
            min_connections: 1,
            ..DatabaseConfig::default()
        },
        auth: AuthConfig { jwt_secret: "e2e-secret".into(), token_ttl_hours: 1 },
        ..AppConfig::default()
    }
}

async fn start_server() -> anyhow::Result<TestApp> {
    let app = server::startup::build_app(&test_config()).await?;
    let listener = TcpListener::bind((std::net::Ipv4Addr::LOCALHOST, 0)).await?;
    let addr: SocketAddr = listener.local_addr()?;
    let base_url = format!("http://{}:{}", addr.ip(), addr.port());

    tokio::spawn(async move {
        if let Err(e) = axum::serve(listener, app).await { eprintln!("server error: {}", e); }
    });

    Ok(TestApp { base_url, client: reqwest::Client::new() })
}

async fn login_token(app: &TestApp) -> anyhow::Result<String> {
    let res = app
        .client
        .post(app.url("/administradores/login"))
        .json(&json!({"email": migration::DEFAULT_ADMIN_EMAIL, "password": migration::DEFAULT_ADMIN_PASSWORD}))
        .send()
        .await?;
    assert_eq!(res.status(), HttpStatusCode::OK);
    let body: Value = res.json().await?;
    Ok(body["token"].as_str().unwrap_or_default().to_string())
}

#[tokio::test]
async fn e2e_home_and_docs() -> anyhow::Result<()> {
    let app = start_server().await?;
    let res = app.client.get(app.url("/")).send().await?;
    assert_eq!(res.status(), HttpStatusCode::OK);
    let body: Value = res.json().await?;
    assert!(body["message"].as_str().is_some());

    let res = app.client.get(app.url("/api-docs/openapi.json")).send().await?;
    assert_eq!(res.status(), HttpStatusCode::OK);
    Ok(())
}

#[tokio::test]
async fn e2e_unknown_path() -> anyhow::Result<()> {
    let app = start_server().await?;
    let res = app.client.get(app.url("/nao-existe")).send().await?;
    assert_eq!(res.status(), HttpStatusCode::UNAUTHORIZED);

    let token = login_token(&app).await?;
    let res = app.client.get(app.url("/nao-existe")).bearer_auth(&token).send().await?;
    assert_eq!(res.status(), HttpStatusCode::NOT_FOUND);
    Ok(())
}

#[tokio::test]
async fn e2e_vehicle_lifecycle() -> anyhow::Result<()> {
    let app = start_server().await?;

    let res = app.client.get(app.url("/veiculos")).send().await?;
    assert_eq!(res.status(), HttpStatusCode::UNAUTHORIZED);

    let token = login_token(&app).await?;
    let res = app
        .client
        .post(app.url("/veiculos"))
        .bearer_auth(&token)
        .json(&json!({"name": "Fusca", "brand": "Volkswagen", "year": 1970}))
        .send()
        .await?;
    assert_eq!(res.status(), HttpStatusCode::CREATED);
    let location = res
        .headers()
        .get(reqwest::header::LOCATION)
        .and_then(|v| v.to_str().ok())
        .map(str::to_string);
    let created: Value = res.json().await?;
    assert_eq!(location, Some(format!("/veiculos/{}", created["id"])));

    let res = app.client.get(app.url("/veiculos?pagina=1")).bearer_auth(&token).send().await?;
    assert_eq!(res.status(), HttpStatusCode::OK);
    let list: Value = res.json().await?;
    assert_eq!(list, json!([created]));
    Ok(())
}

#[tokio::test]
async fn e2e_administrator_creation() -> anyhow::Result<()> {
    let app = start_server().await?;
    let token = login_token(&app).await?;

    let res = app
        .client
        .post(app.url("/administradores"))
        .bearer_auth(&token)
        .json(&json!({"email": "", "password": "", "role": ""}))
        .send()
        .await?;
    assert_eq!(res.status(), HttpStatusCode::BAD_REQUEST);
    let body: Value = res.json().await?;
    assert_eq!(body["messages"].as_array().map(Vec::len), Some(3));

    let res = app
        .client
        .post(app.url("/administradores"))
        .bearer_auth(&token)
        .json(&json!({"email": "editor@teste.com", "password": "abc", "role": "Editor"}))
        .send()
        .await?;
    assert_eq!(res.status(), HttpStatusCode::CREATED);

    let res = app
        .client
        .post(app.url("/administradores/login"))
        .json(&json!({"email": "editor@teste.com", "password": "abc"}))
        .send()
        .await?;
    assert_eq!(res.status(), HttpStatusCode::OK);
    let body: Value = res.json().await?;
    assert_eq!(body["role"], "Editor");

    let editor = body["token"].as_str().unwrap_or_default();
    let res = app.client.get(app.url("/administradores")).bearer_auth(editor).send().await?;
    assert_eq!(res.status(), HttpStatusCode::FORBIDDEN);
    Ok(())
}
