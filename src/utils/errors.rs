//! Sistema de manejo de errores
//!
//! Este módulo define todos los tipos de errores del sistema
//! y su conversión a respuestas HTTP apropiadas.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;
use tracing::error;

/// Errores principales de la aplicación
#[derive(Error, Debug)]
pub enum AppError {
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Error de validación")]
    Validation(#[from] validator::ValidationErrors),

    #[error("{0}")]
    BadRequest(String),

    #[error("{0}")]
    BusinessRule(String),

    #[error("No autorizado: {0}")]
    Unauthorized(String),

    #[error("{0}")]
    NotFound(String),

    #[error("{0}")]
    Conflict(String),

    #[error("Internal server error: {0}")]
    Internal(String),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, body) = match self {
            AppError::Database(e) => {
                error!("Error de base de datos: {}", e);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    json!({
                        "message": "Error al acceder a la base de datos",
                        "error": e.to_string(),
                    }),
                )
            }

            AppError::Validation(e) => {
                let detalles: Vec<String> = e
                    .field_errors()
                    .iter()
                    .flat_map(|(campo, errores)| {
                        errores.iter().map(move |err| match &err.message {
                            Some(msg) => msg.to_string(),
                            None => format!("Campo '{}' inválido", campo),
                        })
                    })
                    .collect();
                (
                    StatusCode::BAD_REQUEST,
                    json!({
                        "mensaje": "Error de validación",
                        "detalles": detalles,
                    }),
                )
            }

            AppError::BadRequest(msg) | AppError::BusinessRule(msg) => {
                (StatusCode::BAD_REQUEST, json!({ "message": msg }))
            }

            AppError::Unauthorized(msg) => {
                (StatusCode::UNAUTHORIZED, json!({ "message": msg }))
            }

            AppError::NotFound(msg) => (StatusCode::NOT_FOUND, json!({ "message": msg })),

            AppError::Conflict(msg) => (StatusCode::CONFLICT, json!({ "message": msg })),

            AppError::Internal(msg) => {
                error!("Error interno: {}", msg);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    json!({
                        "message": "Error interno del servidor",
                        "error": msg,
                    }),
                )
            }
        };

        (status, Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_found_produce_404() {
        let response = AppError::NotFound("Lote no encontrado".to_string()).into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn regla_de_negocio_produce_400() {
        let response =
            AppError::BusinessRule("El enganche debe ser menor que el precio total".to_string())
                .into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }
}
