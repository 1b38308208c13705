use axum::{
    extract::{Path, State},
    routing::get,
    Json, Router,
};

use crate::controllers::ubicacion_controller::UbicacionController;
use crate::models::ubicacion::{Ciudad, Colonia, Estado};
use crate::state::AppState;
use crate::utils::errors::AppError;

pub fn create_ubicacion_router() -> Router<AppState> {
    Router::new()
        .route("/estados", get(obtener_estados))
        .route("/ciudades/:estado_id", get(obtener_ciudades))
        .route("/colonias/:ciudad_id", get(obtener_colonias))
}

async fn obtener_estados(
    State(state): State<AppState>,
) -> Result<Json<Vec<Estado>>, AppError> {
    let controller = UbicacionController::new(state.pool.clone());
    Ok(Json(controller.estados().await?))
}

async fn obtener_ciudades(
    State(state): State<AppState>,
    Path(estado_id): Path<i32>,
) -> Result<Json<Vec<Ciudad>>, AppError> {
    let controller = UbicacionController::new(state.pool.clone());
    Ok(Json(controller.ciudades(estado_id).await?))
}

async fn obtener_colonias(
    State(state): State<AppState>,
    Path(ciudad_id): Path<i32>,
) -> Result<Json<Vec<Colonia>>, AppError> {
    let controller = UbicacionController::new(state.pool.clone());
    Ok(Json(controller.colonias(ciudad_id).await?))
}
