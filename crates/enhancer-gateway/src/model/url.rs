use enhancer_core::Identifier;
use serde::{Deserialize, Serialize};

/// Body of `POST /enhance`. A missing `url` field is treated as empty.
#[derive(Deserialize)]
pub struct EnhanceForm {
    #[serde(default)]
    pub url: String,
}

#[derive(Serialize)]
pub struct EnhanceResponse {
    pub key: Identifier,
    pub enhanced_url: String,
    pub original_url: String,
}
