//! JSON bodies exchanged with clients.

use serde::{Deserialize, Serialize};

/// Name reported by `GET /`.
pub const APP_NAME: &str = "wiki";

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppInfo {
    pub app: String,
}

impl Default for AppInfo {
    fn default() -> Self {
        Self { app: APP_NAME.to_string() }
    }
}

/// Body of `POST /documents/{title}`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct WriteRequest {
    pub content: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorBody {
    pub reason: String,
}
