use sqlx::PgPool;
use validator::Validate;

use crate::dto::pago_dto::RegistrarPagoRequest;
use crate::models::pago::{Pago, ResumenPagos};
use crate::repositories::pago_repository::PagoRepository;
use crate::utils::errors::AppError;

/// Método de pago por omisión al registrar un pago
const METODO_EFECTIVO: &str = "efectivo";

pub struct PagoController {
    repository: PagoRepository,
}

impl PagoController {
    pub fn new(pool: PgPool) -> Self {
        Self {
            repository: PagoRepository::new(pool),
        }
    }

    pub async fn por_contrato(&self, id_contrato: i32) -> Result<Vec<Pago>, AppError> {
        self.repository.obtener_por_contrato(id_contrato).await
    }

    pub async fn registrar(&self, request: RegistrarPagoRequest) -> Result<Pago, AppError> {
        request.validate()?;
        let metodo = request
            .metodo_pago
            .unwrap_or_else(|| METODO_EFECTIVO.to_string());
        self.repository.registrar_pago(request.id_pago, &metodo).await
    }

    pub async fn resumen(&self) -> Result<Vec<ResumenPagos>, AppError> {
        self.repository.resumen().await
    }
}
