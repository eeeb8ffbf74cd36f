pub mod types;
pub mod utils;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn home_points_to_openapi_document() {
        let h = types::Home::default();
        assert_eq!(h.doc, "/api-docs/openapi.json");
        let json = serde_json::to_value(&h).unwrap();
        assert_eq!(json["message"], h.message);
    }
}
