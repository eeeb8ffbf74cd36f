use axum::{
    extract::{
        rejection::{JsonRejection, QueryRejection},
        Query, State,
    },
    http::{header::LOCATION, HeaderName, StatusCode},
    Extension, Json,
};
use tracing::info;

use service::token::TokenClaims;
use service::vehicle::domain::{NewVehicle, Vehicle, VehicleInput};

use crate::errors::ApiError;
use crate::routes::{auth::ServerState, PageQuery};

#[utoipa::path(
    get, path = "/veiculos", tag = "veiculos",
    params(PageQuery),
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Vehicles", body = [crate::openapi::VehicleDoc]),
        (status = 400, description = "Malformed pagina", body = crate::openapi::ValidationErrorsDoc),
        (status = 401, description = "Unauthorized")
    )
)]
pub async fn list(
    State(state): State<ServerState>,
    query: Result<Query<PageQuery>, QueryRejection>,
) -> Result<Json<Vec<Vehicle>>, ApiError> {
    let Query(q) = query?;
    let vehicles = state.vehicles.list(q.pagina).await?;
    info!(count = vehicles.len(), page = ?q.pagina, "list vehicles");
    Ok(Json(vehicles))
}

#[utoipa::path(
    post, path = "/veiculos", tag = "veiculos",
    request_body = crate::openapi::VehicleInputDoc,
    security(("bearer_auth" = [])),
    responses(
        (status = 201, description = "Created", body = crate::openapi::VehicleDoc),
        (status = 400, description = "Validation Error", body = crate::openapi::ValidationErrorsDoc),
        (status = 401, description = "Unauthorized"),
        (status = 403, description = "Forbidden")
    )
)]
pub async fn create(
    State(state): State<ServerState>,
    Extension(claims): Extension<TokenClaims>,
    payload: Result<Json<VehicleInput>, JsonRejection>,
) -> Result<(StatusCode, [(HeaderName, String); 1], Json<Vehicle>), ApiError> {
    let Json(input) = payload?;
    let new = NewVehicle::try_from(input)?;
    let created = state.vehicles.create(new).await?;
    info!(id = created.id, created_by = %claims.email, role = %claims.role, "vehicle created via api");
    Ok((
        StatusCode::CREATED,
        [(LOCATION, format!("/veiculos/{}", created.id))],
        Json(created),
    ))
}
