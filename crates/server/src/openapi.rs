use utoipa::openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme};
use utoipa::{Modify, OpenApi, ToSchema};

#[derive(ToSchema)]
pub struct HomeDoc { pub message: String, pub doc: String }

#[derive(ToSchema)]
pub struct LoginRequest { pub email: String, pub password: String }

#[derive(ToSchema)]
pub struct AuthenticatedAdministratorDoc {
    pub email: String,
    /// `Adm` or `Editor`
    pub role: String,
    pub token: String,
}

#[derive(utoipa::ToSchema)]
pub struct AdministratorInputDoc {
    pub email: String,
    pub password: String,
    /// `Adm` or `Editor`
    pub role: Option<String>,
}

#[derive(utoipa::ToSchema)]
pub struct AdministratorViewDoc { pub id: i32, pub email: String, pub role: String }

#[derive(utoipa::ToSchema)]
pub struct VehicleInputDoc {
    pub name: String,
    pub brand: String,
    /// 1950 or later
    pub year: i32,
}

#[derive(utoipa::ToSchema)]
pub struct VehicleDoc { pub id: i32, pub name: String, pub brand: String, pub year: i32 }

#[derive(utoipa::ToSchema)]
pub struct ValidationErrorsDoc { pub messages: Vec<String> }

struct BearerAuth;

impl Modify for BearerAuth {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "bearer_auth",
                SecurityScheme::Http(HttpBuilder::new().scheme(HttpAuthScheme::Bearer).bearer_format("JWT").build()),
            );
        }
    }
}

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::routes::home,
        crate::routes::auth::login,
        crate::routes::administrators::list,
        crate::routes::administrators::create,
        crate::routes::vehicles::list,
        crate::routes::vehicles::create,
    ),
    components(
        schemas(
            HomeDoc,
            LoginRequest,
            AuthenticatedAdministratorDoc,
            AdministratorInputDoc,
            AdministratorViewDoc,
            VehicleInputDoc,
            VehicleDoc,
            ValidationErrorsDoc,
        )
    ),
    modifiers(&BearerAuth),
    tags(
        (name = "home"),
        (name = "administradores"),
        (name = "veiculos")
    )
)]
pub struct ApiDoc;
