use sqlx::PgPool;

use crate::models::ubicacion::{Ciudad, Colonia, Estado};
use crate::repositories::ubicacion_repository::UbicacionRepository;
use crate::utils::errors::AppError;

pub struct UbicacionController {
    repository: UbicacionRepository,
}

impl UbicacionController {
    pub fn new(pool: PgPool) -> Self {
        Self {
            repository: UbicacionRepository::new(pool),
        }
    }

    pub async fn estados(&self) -> Result<Vec<Estado>, AppError> {
        self.repository.obtener_estados().await
    }

    pub async fn ciudades(&self, id_estado: i32) -> Result<Vec<Ciudad>, AppError> {
        self.repository.obtener_ciudades(id_estado).await
    }

    pub async fn colonias(&self, id_ciudad: i32) -> Result<Vec<Colonia>, AppError> {
        self.repository.obtener_colonias(id_ciudad).await
    }
}
