use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::{delete, get, post, put},
    Json, Router,
};

use crate::controllers::lote_controller::LoteController;
use crate::dto::lote_dto::{ActualizarLoteRequest, CrearLoteRequest};
use crate::dto::ApiResponse;
use crate::models::lote::Lote;
use crate::state::AppState;
use crate::utils::errors::AppError;

pub fn create_lote_router() -> Router<AppState> {
    Router::new()
        .route("/", get(listar_lotes))
        .route("/", post(crear_lote))
        .route("/:id", get(obtener_lote))
        .route("/:id", put(actualizar_lote))
        .route("/:id", delete(eliminar_lote))
}

async fn listar_lotes(State(state): State<AppState>) -> Result<Json<Vec<Lote>>, AppError> {
    let controller = LoteController::new(state.pool.clone());
    Ok(Json(controller.listar().await?))
}

async fn obtener_lote(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Json<Lote>, AppError> {
    let controller = LoteController::new(state.pool.clone());
    Ok(Json(controller.obtener_por_id(id).await?))
}

async fn crear_lote(
    State(state): State<AppState>,
    Json(request): Json<CrearLoteRequest>,
) -> Result<(StatusCode, Json<Lote>), AppError> {
    let controller = LoteController::new(state.pool.clone());
    let lote = controller.crear(request).await?;
    Ok((StatusCode::CREATED, Json(lote)))
}

async fn actualizar_lote(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(request): Json<ActualizarLoteRequest>,
) -> Result<Json<Lote>, AppError> {
    let controller = LoteController::new(state.pool.clone());
    Ok(Json(controller.actualizar(id, request).await?))
}

async fn eliminar_lote(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Json<ApiResponse<Lote>>, AppError> {
    let controller = LoteController::new(state.pool.clone());
    let lote = controller.eliminar(id).await?;
    Ok(Json(ApiResponse::success_with_message(
        lote,
        "Lote eliminado exitosamente".to_string(),
    )))
}
