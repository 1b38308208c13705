//! Modelo de pago (mensualidad de un contrato)

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Fila de la tabla `pago`
#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
pub struct Pago {
    pub id_pago: i32,
    pub id_contrato: i32,
    pub numero_pago: i32,
    pub monto: Decimal,
    pub fecha_pago: NaiveDate,
    pub metodo_pago: String,
    pub estado_pago: String,
}

/// Pago por insertar: el calendario de amortización genera estos
/// registros antes de que existan en la base de datos.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NuevoPago {
    pub id_contrato: i32,
    pub numero_pago: i32,
    pub monto: Decimal,
    pub fecha_pago: NaiveDate,
    pub metodo_pago: String,
    pub estado_pago: String,
}

/// Estado de un pago
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EstadoPago {
    Pendiente,
    Pagado,
    Atrasado,
}

impl EstadoPago {
    pub fn as_str(&self) -> &'static str {
        match self {
            EstadoPago::Pendiente => "pendiente",
            EstadoPago::Pagado => "pagado",
            EstadoPago::Atrasado => "atrasado",
        }
    }
}

impl std::str::FromStr for EstadoPago {
    type Err = String;

    fn from_str(valor: &str) -> Result<Self, Self::Err> {
        match valor {
            "pendiente" => Ok(EstadoPago::Pendiente),
            "pagado" => Ok(EstadoPago::Pagado),
            "atrasado" => Ok(EstadoPago::Atrasado),
            otro => Err(format!("Estado de pago desconocido: {}", otro)),
        }
    }
}

/// Resumen de pagos por contrato
#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
pub struct ResumenPagos {
    pub id_contrato: i32,
    pub cliente_nombre: String,
    pub apellido_paterno: String,
    pub pagados: i64,
    pub pendientes: i64,
    pub proximo_vencimiento: Option<NaiveDate>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn estado_de_pago_ida_y_vuelta() {
        for estado in [EstadoPago::Pendiente, EstadoPago::Pagado, EstadoPago::Atrasado] {
            assert_eq!(EstadoPago::from_str(estado.as_str()).unwrap(), estado);
        }
        assert!(EstadoPago::from_str("parcial").is_err());
    }
}
