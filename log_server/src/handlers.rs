use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::{Json, Redirect},
};
use std::sync::Arc;

use crate::{
    config::Config,
    services::{read_log_blocks, ServiceError},
    types::LogBlocksQuery,
};

pub async fn get_log_blocks(
    State(config): State<Arc<Config>>,
    Query(query): Query<LogBlocksQuery>,
) -> Result<Json<Vec<Vec<String>>>, StatusCode> {
    match read_log_blocks(&config.log_file(), query.max_blocks()).await {
        Ok(blocks) => Ok(Json(blocks)),
        Err(ServiceError::NotFound(path)) => {
            tracing::warn!("Log file {} does not exist", path);
            Err(StatusCode::NOT_FOUND)
        }
        Err(e) => {
            tracing::error!("Failed to read log blocks: {}", e);
            Err(StatusCode::NOT_FOUND)
        }
    }
}

pub async fn redirect_to_viewer() -> Redirect {
    Redirect::temporary("/")
}
