//! Module listing, status, and hook handlers.

use axum::Json;
use axum::extract::{Path, State};

use modhub_core::error::AppError;

use crate::dto::response::{ApiResponse, HookResponse, ModuleResponse};
use crate::error::ApiError;
use crate::state::AppState;

/// GET /api/modules
pub async fn list_modules(
    State(state): State<AppState>,
) -> Result<Json<ApiResponse<Vec<ModuleResponse>>>, ApiError> {
    let modules = state
        .registry
        .modules_info()?
        .into_iter()
        .map(|info| {
            let url = state.urls.module_url(&info.name, "", &[]);
            ModuleResponse::new(info, url)
        })
        .collect();
    Ok(Json(ApiResponse::ok(modules)))
}

/// GET /api/modules/{name}
pub async fn get_module(
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> Result<Json<ApiResponse<ModuleResponse>>, ApiError> {
    let info = state.registry.module_info(&name)?;
    let url = state.urls.module_url(&info.name, "", &[]);
    Ok(Json(ApiResponse::ok(ModuleResponse::new(info, url))))
}

/// GET /api/modules/{name}/hooks
pub async fn module_hooks(
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> Result<Json<ApiResponse<Vec<HookResponse>>>, ApiError> {
    if !state.registry.module_exists(&name)? {
        return Err(AppError::not_found(format!("no module named '{name}'")).into());
    }

    let hooks = state
        .registry
        .hooks_for(&name)?
        .iter()
        .map(|(hook, implementation)| HookResponse {
            hook: hook.clone(),
            callable: implementation.callable.clone(),
            source: implementation.source.clone(),
        })
        .collect();
    Ok(Json(ApiResponse::ok(hooks)))
}
