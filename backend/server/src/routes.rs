use std::sync::Arc;

use axum::{
    Json,
    extract::{
        self, Path,
        rejection::{JsonRejection, PathRejection},
    },
    http::StatusCode,
    response::IntoResponse,
};
use wishes::{CreatedWish, ErrorBody, Message, NewWish, Wish};

use crate::{
    error::AppError,
    state::State,
    store::{Readiness, StoreError},
};

pub async fn list_handler(
    extract::State(state): extract::State<Arc<State>>,
) -> Result<Json<Vec<Wish>>, AppError> {
    Ok(Json(state.store.list().await?))
}

pub async fn create_handler(
    extract::State(state): extract::State<Arc<State>>,
    payload: Result<Json<NewWish>, JsonRejection>,
) -> Result<(StatusCode, Json<CreatedWish>), AppError> {
    let Json(payload) = payload.map_err(|_| AppError::MalformedPayload)?;
    let content = payload.content.ok_or(StoreError::InvalidInput)?;

    let created = state.store.create(&content).await?;

    #[cfg(feature = "verbose")]
    tracing::info!("Created wish {}", created.id);

    Ok((StatusCode::CREATED, Json(created)))
}

pub async fn delete_handler(
    extract::State(state): extract::State<Arc<State>>,
    id: Result<Path<i64>, PathRejection>,
) -> Result<Json<Message>, AppError> {
    let Path(id) = id.map_err(|_| AppError::MalformedPayload)?;

    state.store.delete(id).await?;

    #[cfg(feature = "verbose")]
    tracing::info!("Deleted wish {id}");

    Ok(Json(Message {
        message: "Wish deleted successfully".to_string(),
    }))
}

pub async fn health_handler(
    extract::State(state): extract::State<Arc<State>>,
) -> impl IntoResponse {
    match state.store.readiness().await {
        Readiness::Ready => (
            StatusCode::OK,
            Json(Message {
                message: "ready".to_string(),
            }),
        )
            .into_response(),
        Readiness::Uninitialized => (
            StatusCode::SERVICE_UNAVAILABLE,
            Json(ErrorBody {
                error: StoreError::NotReady.to_string(),
            }),
        )
            .into_response(),
        Readiness::Failed(reason) => (
            StatusCode::SERVICE_UNAVAILABLE,
            Json(ErrorBody { error: reason }),
        )
            .into_response(),
    }
}
