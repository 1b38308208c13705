use axum::{
    extract::State,
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};

use crate::controllers::contrato_controller::ContratoController;
use crate::dto::contrato_dto::{ContratoCreadoResponse, CrearContratoRequest};
use crate::models::contrato::ContratoResumen;
use crate::state::AppState;
use crate::utils::errors::AppError;

pub fn create_contrato_router() -> Router<AppState> {
    Router::new()
        .route("/", post(crear_contrato))
        .route("/", get(listar_contratos))
}

async fn crear_contrato(
    State(state): State<AppState>,
    Json(request): Json<CrearContratoRequest>,
) -> Result<(StatusCode, Json<ContratoCreadoResponse>), AppError> {
    let controller = ContratoController::new(state.pool.clone());
    let response = controller.crear(request).await?;
    Ok((StatusCode::CREATED, Json(response)))
}

async fn listar_contratos(
    State(state): State<AppState>,
) -> Result<Json<Vec<ContratoResumen>>, AppError> {
    let controller = ContratoController::new(state.pool.clone());
    let response = controller.listar().await?;
    Ok(Json(response))
}
