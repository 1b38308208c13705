use axum::{
    extract::{Path, State},
    routing::{get, post},
    Json, Router,
};

use crate::controllers::pago_controller::PagoController;
use crate::dto::pago_dto::RegistrarPagoRequest;
use crate::models::pago::{Pago, ResumenPagos};
use crate::state::AppState;
use crate::utils::errors::AppError;

pub fn create_pago_router() -> Router<AppState> {
    Router::new()
        .route("/resumen", get(resumen_pagos))
        .route("/detalle/:id", get(pagos_por_contrato))
        .route("/registrar", post(registrar_pago))
}

async fn resumen_pagos(
    State(state): State<AppState>,
) -> Result<Json<Vec<ResumenPagos>>, AppError> {
    let controller = PagoController::new(state.pool.clone());
    Ok(Json(controller.resumen().await?))
}

async fn pagos_por_contrato(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Json<Vec<Pago>>, AppError> {
    let controller = PagoController::new(state.pool.clone());
    Ok(Json(controller.por_contrato(id).await?))
}

async fn registrar_pago(
    State(state): State<AppState>,
    Json(request): Json<RegistrarPagoRequest>,
) -> Result<Json<Pago>, AppError> {
    let controller = PagoController::new(state.pool.clone());
    Ok(Json(controller.registrar(request).await?))
}
