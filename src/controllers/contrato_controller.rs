use sqlx::PgPool;

use crate::dto::contrato_dto::{ContratoCreadoResponse, CrearContratoRequest};
use crate::models::contrato::ContratoResumen;
use crate::repositories::contrato_repository::ContratoRepository;
use crate::services::contrato_service::ContratoService;
use crate::utils::errors::AppError;

pub struct ContratoController {
    service: ContratoService,
    repository: ContratoRepository,
}

impl ContratoController {
    pub fn new(pool: PgPool) -> Self {
        Self {
            service: ContratoService::new(pool.clone()),
            repository: ContratoRepository::new(pool),
        }
    }

    /// Crear el contrato con su calendario de pagos (transaccional)
    pub async fn crear(
        &self,
        request: CrearContratoRequest,
    ) -> Result<ContratoCreadoResponse, AppError> {
        let creado = self.service.crear_contrato(request).await?;
        Ok(ContratoCreadoResponse {
            contrato: creado.contrato,
            mensualidad: creado.mensualidad,
            pagos: creado.pagos,
        })
    }

    pub async fn listar(&self) -> Result<Vec<ContratoResumen>, AppError> {
        self.repository.obtener_todos().await
    }
}
