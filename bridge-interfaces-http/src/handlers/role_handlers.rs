use std::collections::HashMap;

use axum::extract::{Query, State};
use axum::http::HeaderMap;
use axum::Json;

use bridge_application::dtos::RoleLookupResponse;
use bridge_application::queries::role_queries;
use bridge_application::AppState;
use bridge_domain::ROLE_LOOKUP_KEYS;

use crate::error::HttpError;
use crate::middleware::authorize;

pub async fn roles_by_roblox(
    State(state): State<AppState>,
    headers: HeaderMap,
    Query(params): Query<HashMap<String, String>>,
) -> Result<Json<RoleLookupResponse>, HttpError> {
    authorize(&state.config, &headers)?;
    state.require(&ROLE_LOOKUP_KEYS)?;
    let roblox_id = roblox_id_param(&params)?;

    let lookup = role_queries::lookup_roles(&state, &roblox_id).await;
    Ok(Json(lookup.into()))
}

pub(crate) fn roblox_id_param(params: &HashMap<String, String>) -> Result<String, HttpError> {
    params
        .get("robloxId")
        .map(|id| id.trim())
        .filter(|id| !id.is_empty())
        .map(str::to_string)
        .ok_or_else(|| HttpError::bad_request("robloxId parameter required"))
}
