// Endpoint paths shared between the server and its clients

/// Prefix every API route is nested under
pub const API_PREFIX: &str = "/api";

/// Collection route: list and create
pub const ITEMS: &str = "/api/items";

/// Health check route
pub const HEALTH: &str = "/api/health";

/// Swagger UI
pub const DOCS: &str = "/api/docs";

/// Raw OpenAPI document
pub const DOCS_JSON: &str = "/api/docs-json";

/// Single item route: get, update and delete
pub fn item_by_id(id: &str) -> String {
    format!("{}/{}", ITEMS, id)
}
