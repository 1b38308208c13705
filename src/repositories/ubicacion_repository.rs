//! Repositorio del catálogo geográfico

use sqlx::PgPool;

use crate::models::ubicacion::{Ciudad, Colonia, Estado};
use crate::utils::errors::AppError;

pub struct UbicacionRepository {
    pool: PgPool,
}

impl UbicacionRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn obtener_estados(&self) -> Result<Vec<Estado>, AppError> {
        let estados = sqlx::query_as::<_, Estado>("SELECT * FROM estado ORDER BY nombre_estado")
            .fetch_all(&self.pool)
            .await?;
        Ok(estados)
    }

    pub async fn obtener_ciudades(&self, id_estado: i32) -> Result<Vec<Ciudad>, AppError> {
        let ciudades = sqlx::query_as::<_, Ciudad>(
            "SELECT * FROM ciudad WHERE id_estado = $1 ORDER BY nombre_ciudad",
        )
        .bind(id_estado)
        .fetch_all(&self.pool)
        .await?;
        Ok(ciudades)
    }

    pub async fn obtener_colonias(&self, id_ciudad: i32) -> Result<Vec<Colonia>, AppError> {
        let colonias = sqlx::query_as::<_, Colonia>(
            "SELECT * FROM colonia WHERE id_ciudad = $1 ORDER BY nombre_colonia",
        )
        .bind(id_ciudad)
        .fetch_all(&self.pool)
        .await?;
        Ok(colonias)
    }
}
