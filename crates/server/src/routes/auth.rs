use std::sync::Arc;

use axum::{
    extract::{rejection::JsonRejection, Request, State},
    http::{header::AUTHORIZATION, HeaderMap, Method, StatusCode},
    middleware::Next,
    response::Response,
    Json,
};
use sea_orm::DatabaseConnection;
use tracing::{info, warn};

use service::administrator::{
    domain::{AuthenticatedAdministrator, LoginInput, Role},
    repository::SeaOrmAdministratorRepository,
    AdministratorService,
};
use service::errors::ServiceError;
use service::token::TokenService;
use service::vehicle::{repository::SeaOrmVehicleRepository, VehicleService};

use crate::errors::ApiError;

pub type Administrators = AdministratorService<SeaOrmAdministratorRepository>;
pub type Vehicles = VehicleService<SeaOrmVehicleRepository>;

/// Services shared by every handler, wired once at startup.
#[derive(Clone)]
pub struct ServerState {
    pub administrators: Arc<Administrators>,
    pub vehicles: Arc<Vehicles>,
    pub tokens: Arc<TokenService>,
}

impl ServerState {
    pub fn new(db: DatabaseConnection, auth: &configs::AuthConfig) -> Result<Self, ServiceError> {
        let administrators = AdministratorService::new(Arc::new(SeaOrmAdministratorRepository { db: db.clone() }));
        let vehicles = VehicleService::new(Arc::new(SeaOrmVehicleRepository { db }));
        Ok(Self {
            administrators: Arc::new(administrators),
            vehicles: Arc::new(vehicles),
            tokens: Arc::new(TokenService::new(&auth.jwt_secret, auth.token_ttl_hours)?),
        })
    }
}

#[utoipa::path(
    post, path = "/administradores/login", tag = "administradores",
    request_body = crate::openapi::LoginRequest,
    responses(
        (status = 200, description = "Logged in", body = crate::openapi::AuthenticatedAdministratorDoc),
        (status = 400, description = "Malformed body", body = crate::openapi::ValidationErrorsDoc),
        (status = 401, description = "Unauthorized")
    )
)]
pub async fn login(
    State(state): State<ServerState>,
    payload: Result<Json<LoginInput>, JsonRejection>,
) -> Result<Json<AuthenticatedAdministrator>, ApiError> {
    let Json(input) = payload?;
    let admin = state.administrators.login(&input).await?.ok_or(ApiError::Unauthorized)?;
    let token = state.tokens.issue(&admin.email, admin.role)?;
    info!(id = admin.id, role = %admin.role, "administrator_logged_in");
    Ok(Json(AuthenticatedAdministrator { email: admin.email, role: admin.role, token }))
}

const ADMIN_ONLY: &[Role] = &[Role::Admin];
const ADMIN_OR_EDITOR: &[Role] = &[Role::Admin, Role::Editor];

/// Who may call a route
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Policy {
    Anonymous,
    /// any valid token
    Authenticated,
    /// valid token whose role is listed
    Roles(&'static [Role]),
}

/// Policy table; anything not listed needs a valid token.
pub fn policy_for(method: &Method, path: &str) -> Policy {
    if method == Method::OPTIONS || path == "/" || path.starts_with("/api-docs") {
        return Policy::Anonymous;
    }
    match path {
        "/administradores/login" if method == Method::POST => Policy::Anonymous,
        "/administradores" => Policy::Roles(ADMIN_ONLY),
        "/veiculos" if method == Method::POST => Policy::Roles(ADMIN_OR_EDITOR),
        _ => Policy::Authenticated,
    }
}

fn bearer_token(headers: &HeaderMap) -> Option<&str> {
    headers
        .get(AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        .and_then(|h| h.strip_prefix("Bearer "))
        .map(str::trim)
        .filter(|t| !t.is_empty())
}

/// 全局中间件：按路由策略校验 Authorization: Bearer <token>
/// Missing, malformed, invalid or expired token → 401; role outside the policy → 403.
/// On success the decoded claims are available to handlers as an extension.
pub async fn require_bearer_token_state(
    State(state): State<ServerState>,
    mut req: Request,
    next: Next,
) -> Result<Response, StatusCode> {
    let policy = policy_for(req.method(), req.uri().path());
    if policy == Policy::Anonymous {
        return Ok(next.run(req).await);
    }

    let path = req.uri().path().to_string();
    let Some(token) = bearer_token(req.headers()) else {
        warn!(path = %path, "missing or malformed Authorization header");
        return Err(StatusCode::UNAUTHORIZED);
    };

    let claims = match state.tokens.verify(token) {
        Ok(claims) => claims,
        Err(e) => {
            warn!(path = %path, err = %e, "token validation failed");
            return Err(StatusCode::UNAUTHORIZED);
        }
    };

    if let Policy::Roles(allowed) = policy {
        if !allowed.contains(&claims.role) {
            warn!(path = %path, role = %claims.role, "role not allowed for route");
            return Err(StatusCode::FORBIDDEN);
        }
    }

    req.extensions_mut().insert(claims);
    Ok(next.run(req).await)
}
