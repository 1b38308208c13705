use sqlx::PgPool;
use validator::Validate;

use crate::dto::lote_dto::{ActualizarLoteRequest, CrearLoteRequest};
use crate::models::lote::{EstadoPropiedad, Lote};
use crate::repositories::lote_repository::{LoteRepository, NuevoLote, ParcheLote};
use crate::utils::errors::AppError;

pub struct LoteController {
    repository: LoteRepository,
}

impl LoteController {
    pub fn new(pool: PgPool) -> Self {
        Self {
            repository: LoteRepository::new(pool),
        }
    }

    pub async fn listar(&self) -> Result<Vec<Lote>, AppError> {
        self.repository.obtener_todos().await
    }

    pub async fn obtener_por_id(&self, id: i32) -> Result<Lote, AppError> {
        self.repository
            .obtener_por_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Lote no encontrado".to_string()))
    }

    pub async fn crear(&self, request: CrearLoteRequest) -> Result<Lote, AppError> {
        request.validate()?;
        request.validar_enums()?;

        let estado_propiedad = request
            .estado_propiedad
            .unwrap_or_else(|| EstadoPropiedad::Disponible.as_str().to_string());

        self.repository
            .crear(NuevoLote {
                tipo: request.tipo,
                numlote: request.numlote,
                manzana: request.manzana,
                direccion: request.direccion,
                id_colonia: request.id_colonia,
                id_ciudad: request.id_ciudad,
                nombre_colonia_nueva: request.nombre_colonia_nueva,
                superficie_m2: request.superficie_m2,
                precio: request.precio,
                estado_propiedad,
                imagen: request.imagen,
            })
            .await
    }

    pub async fn actualizar(
        &self,
        id: i32,
        request: ActualizarLoteRequest,
    ) -> Result<Lote, AppError> {
        request.validate()?;

        use std::str::FromStr;
        if let Some(tipo) = &request.tipo {
            crate::models::lote::TipoLote::from_str(tipo)
                .map_err(AppError::BadRequest)?;
        }
        if let Some(estado) = &request.estado_propiedad {
            EstadoPropiedad::from_str(estado).map_err(AppError::BadRequest)?;
        }

        self.repository
            .actualizar(
                id,
                ParcheLote {
                    tipo: request.tipo,
                    numlote: request.numlote,
                    manzana: request.manzana,
                    direccion: request.direccion,
                    id_colonia: request.id_colonia,
                    id_ciudad: request.id_ciudad,
                    nombre_colonia_nueva: request.nombre_colonia_nueva,
                    superficie_m2: request.superficie_m2,
                    precio: request.precio,
                    estado_propiedad: request.estado_propiedad,
                    imagen: request.imagen,
                },
            )
            .await
    }

    pub async fn eliminar(&self, id: i32) -> Result<Lote, AppError> {
        self.repository.eliminar(id).await
    }
}
