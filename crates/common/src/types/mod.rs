use serde::Serialize;

/// Payload served at `/`
#[derive(Serialize, Debug)]
pub struct Home {
    pub message: &'static str,
    pub doc: &'static str,
}

impl Default for Home {
    fn default() -> Self {
        Self {
            message: "Welcome to the vehicles API",
            doc: "/api-docs/openapi.json",
        }
    }
}
