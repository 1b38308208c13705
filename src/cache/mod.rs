//! Almacenamiento temporal clave-valor
//!
//! Estado transitorio con expiración (OTP, bloqueos de login, tokens de
//! restablecimiento). Se inyecta como trait para que sobreviva reinicios y
//! escale horizontalmente cuando hay Redis disponible; en desarrollo basta
//! la implementación en memoria.

pub mod memoria;
pub mod redis_client;

use async_trait::async_trait;

use crate::utils::errors::AppError;

pub use memoria::AlmacenMemoria;
pub use redis_client::AlmacenRedis;

/// Operaciones del almacén temporal
#[async_trait]
pub trait AlmacenTemporal: Send + Sync {
    /// Leer un valor vigente; `None` si no existe o ya expiró
    async fn obtener(&self, clave: &str) -> Result<Option<String>, AppError>;

    /// Guardar un valor con tiempo de vida en segundos
    async fn guardar(&self, clave: &str, valor: &str, ttl_segundos: u64)
        -> Result<(), AppError>;

    /// Eliminar una clave; no falla si no existe
    async fn eliminar(&self, clave: &str) -> Result<(), AppError>;
}
