//! Almacén temporal respaldado en Redis
//!
//! Adecuado para despliegues con varias réplicas: el estado de OTP y
//! bloqueos queda fuera del proceso.

use async_trait::async_trait;
use redis::{aio::ConnectionManager, AsyncCommands};
use tracing::{debug, info, warn};

use super::AlmacenTemporal;
use crate::utils::errors::AppError;

#[derive(Clone)]
pub struct AlmacenRedis {
    manager: ConnectionManager,
}

impl AlmacenRedis {
    /// Conectar y verificar el servidor con un PING
    pub async fn new(redis_url: &str) -> Result<Self, AppError> {
        info!("🔗 Conectando a Redis");

        let cliente = redis::Client::open(redis_url)
            .map_err(|e| AppError::Internal(format!("Error de Redis: {}", e)))?;
        let manager = ConnectionManager::new(cliente)
            .await
            .map_err(|e| AppError::Internal(format!("Error de Redis: {}", e)))?;

        let mut conn = manager.clone();
        let _: () = redis::cmd("PING")
            .query_async(&mut conn)
            .await
            .map_err(|e| AppError::Internal(format!("Error de Redis: {}", e)))?;

        info!("✅ Redis conectado exitosamente");
        Ok(Self { manager })
    }

    fn clave_completa(clave: &str) -> String {
        format!("inmobiliaria:{}", clave)
    }
}

#[async_trait]
impl AlmacenTemporal for AlmacenRedis {
    async fn obtener(&self, clave: &str) -> Result<Option<String>, AppError> {
        let mut conn = self.manager.clone();
        match conn.get::<_, Option<String>>(Self::clave_completa(clave)).await {
            Ok(valor) => Ok(valor),
            Err(e) => {
                warn!("⚠️ Error leyendo la clave {}: {}", clave, e);
                Err(AppError::Internal(format!("Error de Redis: {}", e)))
            }
        }
    }

    async fn guardar(
        &self,
        clave: &str,
        valor: &str,
        ttl_segundos: u64,
    ) -> Result<(), AppError> {
        let mut conn = self.manager.clone();
        conn.set_ex::<_, _, ()>(Self::clave_completa(clave), valor, ttl_segundos)
            .await
            .map_err(|e| AppError::Internal(format!("Error de Redis: {}", e)))?;
        debug!("💾 Clave {} guardada (TTL: {}s)", clave, ttl_segundos);
        Ok(())
    }

    async fn eliminar(&self, clave: &str) -> Result<(), AppError> {
        let mut conn = self.manager.clone();
        // No fallar si la clave ya no existe
        let resultado: Result<i64, _> = conn.del(Self::clave_completa(clave)).await;
        if let Err(e) = resultado {
            warn!("⚠️ Error eliminando la clave {}: {}", clave, e);
        }
        Ok(())
    }
}
