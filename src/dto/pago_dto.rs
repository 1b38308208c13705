//! DTOs de pagos

use serde::Deserialize;
use validator::Validate;

// Request para registrar (marcar pagado) un pago
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct RegistrarPagoRequest {
    #[validate(range(min = 1, message = "El ID del pago debe ser un entero positivo"))]
    pub id_pago: i32,

    #[validate(length(max = 50, message = "El método de pago no debe exceder los 50 caracteres"))]
    pub metodo_pago: Option<String>,
}
