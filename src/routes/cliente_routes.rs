use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::{delete, get, post, put},
    Json, Router,
};

use crate::controllers::cliente_controller::ClienteController;
use crate::dto::cliente_dto::{ActualizarClienteRequest, CrearClienteRequest};
use crate::dto::ApiResponse;
use crate::models::cliente::Cliente;
use crate::state::AppState;
use crate::utils::errors::AppError;

pub fn create_cliente_router() -> Router<AppState> {
    Router::new()
        .route("/", get(listar_clientes))
        .route("/", post(crear_cliente))
        .route("/:curp", get(obtener_cliente))
        .route("/:curp", put(actualizar_cliente))
        .route("/:curp", delete(eliminar_cliente))
}

async fn listar_clientes(
    State(state): State<AppState>,
) -> Result<Json<Vec<Cliente>>, AppError> {
    let controller = ClienteController::new(state.pool.clone());
    Ok(Json(controller.listar().await?))
}

async fn obtener_cliente(
    State(state): State<AppState>,
    Path(curp): Path<String>,
) -> Result<Json<Cliente>, AppError> {
    let controller = ClienteController::new(state.pool.clone());
    Ok(Json(controller.obtener_por_curp(&curp).await?))
}

async fn crear_cliente(
    State(state): State<AppState>,
    Json(request): Json<CrearClienteRequest>,
) -> Result<(StatusCode, Json<Cliente>), AppError> {
    let controller = ClienteController::new(state.pool.clone());
    let cliente = controller.crear(request).await?;
    Ok((StatusCode::CREATED, Json(cliente)))
}

async fn actualizar_cliente(
    State(state): State<AppState>,
    Path(curp): Path<String>,
    Json(request): Json<ActualizarClienteRequest>,
) -> Result<Json<Cliente>, AppError> {
    let controller = ClienteController::new(state.pool.clone());
    Ok(Json(controller.actualizar(&curp, request).await?))
}

async fn eliminar_cliente(
    State(state): State<AppState>,
    Path(curp): Path<String>,
) -> Result<Json<ApiResponse<Cliente>>, AppError> {
    let controller = ClienteController::new(state.pool.clone());
    let cliente = controller.eliminar(&curp).await?;
    Ok(Json(ApiResponse::success_with_message(
        cliente,
        "Cliente eliminado exitosamente".to_string(),
    )))
}
