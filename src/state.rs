//! Shared application state
//!
//! Este módulo define el estado compartido de la aplicación que se pasa
//! a través del router de Axum.

use sqlx::PgPool;
use std::sync::Arc;

use crate::cache::AlmacenTemporal;
use crate::config::EnvironmentConfig;
use crate::services::notificador::Notificador;

#[derive(Clone)]
pub struct AppState {
    pub pool: PgPool,
    pub config: EnvironmentConfig,
    pub almacen: Arc<dyn AlmacenTemporal>,
    pub notificador: Arc<dyn Notificador>,
}

impl AppState {
    pub fn new(
        pool: PgPool,
        config: EnvironmentConfig,
        almacen: Arc<dyn AlmacenTemporal>,
        notificador: Arc<dyn Notificador>,
    ) -> Self {
        Self {
            pool,
            config,
            almacen,
            notificador,
        }
    }
}
