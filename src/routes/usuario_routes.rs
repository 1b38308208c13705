use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::{delete, get, post, put},
    Json, Router,
};

use crate::controllers::usuario_controller::UsuarioController;
use crate::dto::usuario_dto::{ActualizarUsuarioRequest, CrearUsuarioRequest};
use crate::dto::ApiResponse;
use crate::models::usuario::Usuario;
use crate::state::AppState;
use crate::utils::errors::AppError;

pub fn create_usuario_router() -> Router<AppState> {
    Router::new()
        .route("/", get(listar_usuarios))
        .route("/", post(crear_usuario))
        .route("/:id", get(obtener_usuario))
        .route("/:id", put(actualizar_usuario))
        .route("/:id", delete(eliminar_usuario))
}

async fn listar_usuarios(
    State(state): State<AppState>,
) -> Result<Json<Vec<Usuario>>, AppError> {
    let controller = UsuarioController::new(state.pool.clone());
    Ok(Json(controller.listar().await?))
}

async fn obtener_usuario(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Json<Usuario>, AppError> {
    let controller = UsuarioController::new(state.pool.clone());
    Ok(Json(controller.obtener_por_id(id).await?))
}

async fn crear_usuario(
    State(state): State<AppState>,
    Json(request): Json<CrearUsuarioRequest>,
) -> Result<(StatusCode, Json<Usuario>), AppError> {
    let controller = UsuarioController::new(state.pool.clone());
    let usuario = controller.crear(request).await?;
    Ok((StatusCode::CREATED, Json(usuario)))
}

async fn actualizar_usuario(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(request): Json<ActualizarUsuarioRequest>,
) -> Result<Json<Usuario>, AppError> {
    let controller = UsuarioController::new(state.pool.clone());
    Ok(Json(controller.actualizar(id, request).await?))
}

async fn eliminar_usuario(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Json<ApiResponse<Usuario>>, AppError> {
    let controller = UsuarioController::new(state.pool.clone());
    let usuario = controller.eliminar(id).await?;
    Ok(Json(ApiResponse::success_with_message(
        usuario,
        "Usuario eliminado exitosamente".to_string(),
    )))
}
