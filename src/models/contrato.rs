//! Modelo de contrato de venta

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Fila de la tabla `contrato_venta`
#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
pub struct ContratoVenta {
    pub id_contrato: i32,
    pub id_lote: i32,
    pub id_cliente: i32,
    pub precio_total: Decimal,
    pub enganche: Decimal,
    pub plazo_meses: i32,
    pub estado_contrato: String,
    pub fecha_contrato: DateTime<Utc>,
}

/// Fila del listado de contratos con datos del cliente y del lote
#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
pub struct ContratoResumen {
    pub id_contrato: i32,
    pub id_lote: i32,
    pub id_cliente: i32,
    pub precio_total: Decimal,
    pub enganche: Decimal,
    pub plazo_meses: i32,
    pub estado_contrato: String,
    pub fecha_contrato: DateTime<Utc>,
    pub cliente_nombre: String,
    pub apellido_paterno: String,
    pub apellido_materno: Option<String>,
    pub correo: String,
    pub telefono: Option<String>,
    pub lote_tipo: String,
    pub numlote: String,
    pub direccion: Option<String>,
}

/// Estado del contrato
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EstadoContrato {
    Activo,
    Cancelado,
    Pagado,
}

impl EstadoContrato {
    pub fn as_str(&self) -> &'static str {
        match self {
            EstadoContrato::Activo => "activo",
            EstadoContrato::Cancelado => "cancelado",
            EstadoContrato::Pagado => "pagado",
        }
    }
}

impl std::str::FromStr for EstadoContrato {
    type Err = String;

    fn from_str(valor: &str) -> Result<Self, Self::Err> {
        match valor {
            "activo" => Ok(EstadoContrato::Activo),
            "cancelado" => Ok(EstadoContrato::Cancelado),
            "pagado" => Ok(EstadoContrato::Pagado),
            otro => Err(format!("Estado de contrato desconocido: {}", otro)),
        }
    }
}
