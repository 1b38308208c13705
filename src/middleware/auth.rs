//! Middleware de autenticación con JWT
//!
//! Valida el token Bearer y deja los claims disponibles como extensión
//! del request para los handlers protegidos.

use axum::{
    extract::{Request, State},
    http::header::AUTHORIZATION,
    middleware::Next,
    response::Response,
};

use crate::services::auth_service::validar_token;
use crate::state::AppState;
use crate::utils::errors::AppError;

pub async fn requerir_autenticacion(
    State(state): State<AppState>,
    mut request: Request,
    next: Next,
) -> Result<Response, AppError> {
    let encabezado = request
        .headers()
        .get(AUTHORIZATION)
        .and_then(|valor| valor.to_str().ok())
        .ok_or_else(|| {
            AppError::Unauthorized("Falta el encabezado Authorization".to_string())
        })?;

    let token = encabezado.strip_prefix("Bearer ").ok_or_else(|| {
        AppError::Unauthorized("Formato esperado: Bearer <token>".to_string())
    })?;

    let claims = validar_token(&state.config.jwt_secret, token)?;
    request.extensions_mut().insert(claims);

    Ok(next.run(request).await)
}
