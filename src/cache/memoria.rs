//! Almacén temporal en memoria
//!
//! Implementación para desarrollo y pruebas: un mapa protegido con RwLock
//! cuyas entradas caducan por instante de expiración.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use std::time::{Duration, Instant};
use tokio::sync::RwLock;

use super::AlmacenTemporal;
use crate::utils::errors::AppError;

#[derive(Clone, Default)]
pub struct AlmacenMemoria {
    entradas: Arc<RwLock<HashMap<String, (String, Instant)>>>,
}

impl AlmacenMemoria {
    pub fn new() -> Self {
        Self::default()
    }

    /// Retirar las entradas vencidas
    async fn limpiar_expiradas(&self) {
        let ahora = Instant::now();
        let mut entradas = self.entradas.write().await;
        entradas.retain(|_, (_, expira)| *expira > ahora);
    }
}

#[async_trait]
impl AlmacenTemporal for AlmacenMemoria {
    async fn obtener(&self, clave: &str) -> Result<Option<String>, AppError> {
        let entradas = self.entradas.read().await;
        match entradas.get(clave) {
            Some((valor, expira)) if *expira > Instant::now() => Ok(Some(valor.clone())),
            _ => Ok(None),
        }
    }

    async fn guardar(
        &self,
        clave: &str,
        valor: &str,
        ttl_segundos: u64,
    ) -> Result<(), AppError> {
        self.limpiar_expiradas().await;
        let expira = Instant::now() + Duration::from_secs(ttl_segundos);
        let mut entradas = self.entradas.write().await;
        entradas.insert(clave.to_string(), (valor.to_string(), expira));
        log::debug!("💾 Clave '{}' guardada en memoria (TTL: {}s)", clave, ttl_segundos);
        Ok(())
    }

    async fn eliminar(&self, clave: &str) -> Result<(), AppError> {
        let mut entradas = self.entradas.write().await;
        entradas.remove(clave);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn guardar_y_obtener() {
        let almacen = AlmacenMemoria::new();
        almacen.guardar("otp:ana@b.com", "123456", 300).await.unwrap();
        assert_eq!(
            almacen.obtener("otp:ana@b.com").await.unwrap(),
            Some("123456".to_string())
        );
    }

    #[tokio::test]
    async fn entrada_con_ttl_cero_expira() {
        let almacen = AlmacenMemoria::new();
        almacen.guardar("clave", "valor", 0).await.unwrap();
        assert_eq!(almacen.obtener("clave").await.unwrap(), None);
    }

    #[tokio::test]
    async fn eliminar_es_idempotente() {
        let almacen = AlmacenMemoria::new();
        almacen.guardar("clave", "valor", 60).await.unwrap();
        almacen.eliminar("clave").await.unwrap();
        almacen.eliminar("clave").await.unwrap();
        assert_eq!(almacen.obtener("clave").await.unwrap(), None);
    }
}
