pub mod auth;
pub mod administrators;
pub mod vehicles;

use axum::{
    middleware,
    routing::{get, post},
    Json, Router,
};
use serde::{Deserialize, Deserializer};
use tower_http::{
    cors::CorsLayer,
    trace::{TraceLayer, DefaultMakeSpan, DefaultOnRequest, DefaultOnResponse, DefaultOnFailure},
};
use tracing::Level;
use utoipa::OpenApi;

use common::types::Home;

use crate::openapi::ApiDoc;
use self::auth::ServerState;

/// `?pagina=N` on listing endpoints; absent or empty means the whole set
#[derive(Debug, Default, Deserialize, utoipa::IntoParams)]
#[into_params(parameter_in = Query)]
pub struct PageQuery {
    /// 1-based page number, ten items per page
    #[serde(default, deserialize_with = "empty_page_as_none")]
    pub pagina: Option<u32>,
}

fn empty_page_as_none<'de, D: Deserializer<'de>>(d: D) -> Result<Option<u32>, D::Error> {
    match Option::<String>::deserialize(d)? {
        None => Ok(None),
        Some(s) if s.trim().is_empty() => Ok(None),
        Some(s) => s
            .trim()
            .parse::<u32>()
            .map(Some)
            .map_err(|_| serde::de::Error::custom(format!("pagina must be a non-negative integer, got '{s}'"))),
    }
}

#[utoipa::path(get, path = "/", tag = "home", responses((status = 200, description = "API info", body = crate::openapi::HomeDoc)))]
pub async fn home() -> Json<Home> {
    Json(Home::default())
}

async fn openapi_json() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}

/// Build the full application router.
///
/// Every request passes the bearer-token middleware, which picks the route's
/// policy from method and path.
pub fn build_router(state: ServerState, cors: CorsLayer) -> Router {
    Router::new()
        .route("/", get(home))
        .route("/api-docs/openapi.json", get(openapi_json))
        .route("/administradores/login", post(auth::login))
        .route("/administradores", get(administrators::list).post(administrators::create))
        .route("/veiculos", get(vehicles::list).post(vehicles::create))
        .layer(middleware::from_fn_with_state(
            state.clone(),
            auth::require_bearer_token_state,
        ))
        .with_state(state)
        .layer(cors)
        .layer(
            TraceLayer::new_for_http()
                // 每次请求创建 span，包含方法和路径等，日志级别为 INFO
                .make_span_with(
                    DefaultMakeSpan::new()
                        .level(Level::INFO)
                        .include_headers(false),
                )
                .on_request(
                    DefaultOnRequest::new()
                        .level(Level::INFO),
                )
                // 响应返回时打点，包含状态码与耗时
                .on_response(
                    DefaultOnResponse::new()
                        .level(Level::INFO)
                        .include_headers(false),
                )
                .on_failure(
                    DefaultOnFailure::new()
                        .level(Level::ERROR),
                )
        )
}
