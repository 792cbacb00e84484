//! HTTP surface for the URL enhancer.
//!
//! Translates `POST /enhance` and `GET /enhanced/{key}` into calls on a
//! [`RedirectStore`](enhancer_core::RedirectStore) and maps its errors onto
//! status codes.

pub mod app;
pub mod error;
pub mod handlers;
pub mod model;
pub mod state;

pub use app::App;
pub use error::AppError;
pub use state::AppState;
