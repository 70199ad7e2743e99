use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
pub enum ApiVersion {
    #[serde(rename = "v1")]
    V1,
    #[serde(rename = "v2")]
    V2,
}

impl Default for ApiVersion {
    fn default() -> Self {
        ApiVersion::V1
    }
}

impl ApiVersion {
    /// Unknown tags fall back to v1, which keeps the legacy response shape.
    pub fn parse(s: &str) -> ApiVersion {
        match s {
            "v2" => ApiVersion::V2,
            _ => ApiVersion::V1,
        }
    }
}
