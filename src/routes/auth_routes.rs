use axum::{
    extract::{Path, State},
    routing::post,
    Json, Router,
};
use serde_json::{json, Value};

use crate::controllers::auth_controller::AuthController;
use crate::dto::auth_dto::{
    LoginRequest, RecuperarRequest, RestablecerRequest, VerificarOtpRequest,
};
use crate::state::AppState;
use crate::utils::errors::AppError;

pub fn create_auth_router() -> Router<AppState> {
    Router::new()
        .route("/login", post(login))
        .route("/verificar-otp", post(verificar_otp))
        .route("/recuperar", post(recuperar))
        .route("/restablecer/:token", post(restablecer))
}

async fn login(
    State(state): State<AppState>,
    Json(request): Json<LoginRequest>,
) -> Result<Json<Value>, AppError> {
    let controller = AuthController::new(&state);
    controller.login(request).await?;
    Ok(Json(json!({
        "status": "success",
        "msg": "Código 2FA enviado al correo"
    })))
}

async fn verificar_otp(
    State(state): State<AppState>,
    Json(request): Json<VerificarOtpRequest>,
) -> Result<Json<Value>, AppError> {
    let controller = AuthController::new(&state);
    let verificacion = controller.verificar_otp(request).await?;
    Ok(Json(json!({
        "status": "success",
        "msg": "Autenticación exitosa",
        "token": verificacion.token,
        "user": verificacion.user,
    })))
}

async fn recuperar(
    State(state): State<AppState>,
    Json(request): Json<RecuperarRequest>,
) -> Result<Json<Value>, AppError> {
    let controller = AuthController::new(&state);
    controller.recuperar(request).await?;
    Ok(Json(json!({
        "status": "success",
        "msg": "Correo enviado correctamente"
    })))
}

async fn restablecer(
    State(state): State<AppState>,
    Path(token): Path<String>,
    Json(request): Json<RestablecerRequest>,
) -> Result<Json<Value>, AppError> {
    let controller = AuthController::new(&state);
    controller.restablecer(&token, request).await?;
    Ok(Json(json!({
        "status": "success",
        "msg": "Contraseña actualizada correctamente"
    })))
}
