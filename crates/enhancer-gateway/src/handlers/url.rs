use crate::error::{AppError, Result};
use crate::model::{EnhanceForm, EnhanceResponse};
use crate::state::AppState;
use axum::extract::rejection::{FormRejection, QueryRejection};
use axum::extract::{Path, Query, State};
use axum::http::{header, HeaderValue, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::{Form, Json};
use tracing::info;

/// Reads `url` from the urlencoded body, falling back to the query string.
/// A body or query that cannot be decoded counts as carrying no `url`.
pub async fn enhance_handler(
    State(state): State<AppState>,
    query: std::result::Result<Query<EnhanceForm>, QueryRejection>,
    body: std::result::Result<Form<EnhanceForm>, FormRejection>,
) -> Result<(StatusCode, Json<EnhanceResponse>)> {
    let url = body
        .ok()
        .map(|Form(form)| form.url)
        .filter(|url| !url.is_empty())
        .or_else(|| query.ok().map(|Query(form)| form.url))
        .unwrap_or_default();

    let key = state.store().allocate(&url).await?;
    let enhanced_url = key.to_url(state.redirect_base());

    info!(key = %key, "issued enhanced url");

    Ok((
        StatusCode::CREATED,
        Json(EnhanceResponse {
            key,
            enhanced_url,
            original_url: url,
        }),
    ))
}

pub async fn redirect_handler(
    State(state): State<AppState>,
    Path(key): Path<String>,
) -> Result<Response> {
    redirect_to(&state, &key).await
}

/// `GET /enhanced` and `GET /enhanced/` carry no key; the store reports it as missing.
pub async fn missing_key_handler(State(state): State<AppState>) -> Result<Response> {
    redirect_to(&state, "").await
}

async fn redirect_to(state: &AppState, key: &str) -> Result<Response> {
    let target_url = state.store().resolve(key).await?;
    let location = HeaderValue::from_str(&target_url)
        .map_err(|_| AppError::InvalidRedirectTarget(key.to_string()))?;

    Ok((StatusCode::MOVED_PERMANENTLY, [(header::LOCATION, location)]).into_response())
}

pub async fn fallback_handler() -> Response {
    AppError::RouteNotFound.into_response()
}
