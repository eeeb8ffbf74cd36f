use axum::{
    extract::{
        rejection::{JsonRejection, QueryRejection},
        Query, State,
    },
    http::{header::LOCATION, HeaderName, StatusCode},
    Extension, Json,
};
use tracing::info;

use service::administrator::domain::{AdministratorInput, AdministratorView, NewAdministrator};
use service::token::TokenClaims;

use crate::errors::ApiError;
use crate::routes::{auth::ServerState, PageQuery};

#[utoipa::path(
    get, path = "/administradores", tag = "administradores",
    params(PageQuery),
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Administrators, password omitted", body = [crate::openapi::AdministratorViewDoc]),
        (status = 400, description = "Malformed pagina", body = crate::openapi::ValidationErrorsDoc),
        (status = 401, description = "Unauthorized"),
        (status = 403, description = "Forbidden")
    )
)]
pub async fn list(
    State(state): State<ServerState>,
    query: Result<Query<PageQuery>, QueryRejection>,
) -> Result<Json<Vec<AdministratorView>>, ApiError> {
    let Query(q) = query?;
    let admins = state.administrators.list(q.pagina).await?;
    info!(count = admins.len(), page = ?q.pagina, "list administrators");
    Ok(Json(admins.iter().map(AdministratorView::from).collect()))
}

#[utoipa::path(
    post, path = "/administradores", tag = "administradores",
    request_body = crate::openapi::AdministratorInputDoc,
    security(("bearer_auth" = [])),
    responses(
        (status = 201, description = "Created", body = crate::openapi::AdministratorViewDoc),
        (status = 400, description = "Validation Error", body = crate::openapi::ValidationErrorsDoc),
        (status = 401, description = "Unauthorized"),
        (status = 403, description = "Forbidden")
    )
)]
pub async fn create(
    State(state): State<ServerState>,
    Extension(claims): Extension<TokenClaims>,
    payload: Result<Json<AdministratorInput>, JsonRejection>,
) -> Result<(StatusCode, [(HeaderName, String); 1], Json<AdministratorView>), ApiError> {
    let Json(input) = payload?;
    let new = NewAdministrator::try_from(input)?;
    let created = state.administrators.create(new).await?;
    info!(id = created.id, created_by = %claims.email, "administrator created via api");
    Ok((
        StatusCode::CREATED,
        [(LOCATION, format!("/administradores/{}", created.id))],
        Json(AdministratorView::from(&created)),
    ))
}
