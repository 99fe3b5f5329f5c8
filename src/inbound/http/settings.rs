//! Settings HTTP handlers for the shared preference record.
//!
//! ```text
//! GET  /api/settings
//! POST /api/settings
//! ```
//!
//! One unkeyed record shared by every caller; updates merge supplied fields
//! over the current values inside the store.

use actix_web::{get, post, web};

use crate::domain::{Error, Settings, SettingsPatch};
use crate::inbound::http::ApiResult;
use crate::inbound::http::state::HttpState;

/// Read the shared settings record.
#[utoipa::path(
    get,
    path = "/api/settings",
    responses(
        (status = 200, description = "Current settings", body = Settings),
        (status = 503, description = "Service unavailable", body = Error)
    ),
    tags = ["settings"],
    operation_id = "getSettings"
)]
#[get("/settings")]
pub async fn get_settings(state: web::Data<HttpState>) -> ApiResult<web::Json<Settings>> {
    let settings = state.settings.get_settings().await?;
    Ok(web::Json(settings))
}

/// Merge supplied fields over the shared settings record.
#[utoipa::path(
    post,
    path = "/api/settings",
    request_body = SettingsPatch,
    responses(
        (status = 200, description = "Settings after the merge", body = Settings),
        (status = 400, description = "Invalid request", body = Error),
        (status = 503, description = "Service unavailable", body = Error)
    ),
    tags = ["settings"],
    operation_id = "updateSettings"
)]
#[post("/settings")]
pub async fn update_settings(
    state: web::Data<HttpState>,
    payload: web::Json<SettingsPatch>,
) -> ApiResult<web::Json<Settings>> {
    let settings = state.settings.update_settings(payload.into_inner()).await?;
    Ok(web::Json(settings))
}
