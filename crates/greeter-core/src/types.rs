use serde::Serialize;

/// Body of `GET /api/hello`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HelloResponse {
    pub message: String,
}

impl HelloResponse {
    #[must_use]
    pub fn greeting() -> Self {
        Self {
            message: "hello world".to_string(),
        }
    }
}

/// Body of `GET /api/health`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub message: String,
}

impl HealthResponse {
    #[must_use]
    pub fn running() -> Self {
        Self {
            status: "OK".to_string(),
            message: "greeter server is running".to_string(),
        }
    }
}
