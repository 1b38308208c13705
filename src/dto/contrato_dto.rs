//! DTOs de contratos de venta

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use validator::{Validate, ValidationError, ValidationErrors};

use crate::models::contrato::{ContratoVenta, EstadoContrato};
use crate::models::pago::Pago;
use crate::utils::validation::{validar_monto_no_negativo, validar_monto_positivo};

// Request para crear un contrato de venta con su calendario de pagos
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CrearContratoRequest {
    #[validate(range(min = 1, message = "El ID del lote debe ser un entero positivo"))]
    pub id_lote: i32,

    #[validate(custom = "validar_monto_positivo")]
    pub precio_total: Decimal,

    #[validate(custom = "validar_monto_no_negativo")]
    pub enganche: Decimal,

    #[validate(range(min = 1, message = "El plazo debe ser de al menos 1 mes"))]
    pub plazo_meses: i32,

    pub estado_contrato: Option<String>,

    // --- Resolución del cliente ---
    pub id_cliente: Option<i32>,
    pub correo_cliente: Option<String>,

    // Datos para alta inline; prohibidos cuando viene id_cliente
    #[validate(length(max = 100, message = "El nombre no debe exceder los 100 caracteres"))]
    pub nombre: Option<String>,
    #[validate(length(
        max = 50,
        message = "El apellido paterno no debe exceder los 50 caracteres"
    ))]
    pub apellido_paterno: Option<String>,
    #[validate(length(
        max = 50,
        message = "El apellido materno no debe exceder los 50 caracteres"
    ))]
    pub apellido_materno: Option<String>,
    #[validate(length(max = 20, message = "El teléfono no debe exceder los 20 caracteres"))]
    pub telefono: Option<String>,
}

impl CrearContratoRequest {
    /// Reglas condicionales que el derive no puede expresar:
    /// con `id_cliente` presente los datos inline están prohibidos,
    /// y sin `id_cliente` debe venir `correo_cliente`.
    pub fn validar_condicionales(&self) -> Result<(), ValidationErrors> {
        let mut errores = ValidationErrors::new();

        if self.id_cliente.is_some() {
            if self.nombre.is_some() || self.apellido_paterno.is_some() {
                let mut error = ValidationError::new("prohibido");
                error.message = Some(
                    "No envíe datos de cliente nuevo cuando proporciona un id_cliente".into(),
                );
                errores.add("nombre", error);
            }
        } else if self.correo_cliente.is_none() {
            let mut error = ValidationError::new("requerido");
            error.message = Some(
                "Debe proporcionar id_cliente o correo_cliente con datos para crear cliente"
                    .into(),
            );
            errores.add("correo_cliente", error);
        }

        if let Some(estado) = &self.estado_contrato {
            if EstadoContrato::from_str(estado).is_err() {
                let mut error = ValidationError::new("estado_contrato");
                error.message =
                    Some("El estado del contrato debe ser activo, cancelado o pagado".into());
                errores.add("estado_contrato", error);
            }
        }

        if errores.is_empty() {
            Ok(())
        } else {
            Err(errores)
        }
    }
}

// Response de creación: contrato + mensualidad calculada + calendario
#[derive(Debug, Serialize)]
pub struct ContratoCreadoResponse {
    pub contrato: ContratoVenta,
    pub mensualidad: Decimal,
    pub pagos: Vec<Pago>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request_base() -> CrearContratoRequest {
        CrearContratoRequest {
            id_lote: 7,
            precio_total: "120000.00".parse().unwrap(),
            enganche: "20000.00".parse().unwrap(),
            plazo_meses: 10,
            estado_contrato: None,
            id_cliente: None,
            correo_cliente: Some("a@b.com".to_string()),
            nombre: Some("Ana".to_string()),
            apellido_paterno: Some("Lopez".to_string()),
            apellido_materno: None,
            telefono: None,
        }
    }

    #[test]
    fn request_valido_pasa() {
        let req = request_base();
        assert!(req.validate().is_ok());
        assert!(req.validar_condicionales().is_ok());
    }

    #[test]
    fn plazo_cero_falla() {
        let mut req = request_base();
        req.plazo_meses = 0;
        assert!(req.validate().is_err());
    }

    #[test]
    fn precio_negativo_falla() {
        let mut req = request_base();
        req.precio_total = "-1.00".parse().unwrap();
        assert!(req.validate().is_err());
    }

    #[test]
    fn datos_inline_con_id_cliente_prohibidos() {
        let mut req = request_base();
        req.id_cliente = Some(3);
        assert!(req.validar_condicionales().is_err());
    }

    #[test]
    fn sin_id_ni_correo_falla() {
        let mut req = request_base();
        req.correo_cliente = None;
        req.nombre = None;
        req.apellido_paterno = None;
        assert!(req.validar_condicionales().is_err());
    }

    #[test]
    fn estado_contrato_invalido_falla() {
        let mut req = request_base();
        req.estado_contrato = Some("suspendido".to_string());
        assert!(req.validar_condicionales().is_err());
    }
}
