mod health;
mod url;

pub use health::health_handler;
pub use url::{enhance_handler, fallback_handler, missing_key_handler, redirect_handler};
