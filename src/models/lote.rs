//! Modelo de lote (propiedad en venta)

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Fila de la tabla `lote`
#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
pub struct Lote {
    pub id_propiedad: i32,
    pub tipo: String,
    pub numlote: String,
    pub manzana: Option<String>,
    pub direccion: Option<String>,
    pub id_colonia: Option<i32>,
    pub superficie_m2: Decimal,
    pub precio: Decimal,
    pub estado_propiedad: String,
    pub imagen: Option<String>,
}

/// Estado de disponibilidad de una propiedad.
///
/// Un contrato sólo puede crearse sobre un lote en estado `Disponible`;
/// la creación lo deja en `EnProceso`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EstadoPropiedad {
    Disponible,
    EnProceso,
    Rentada,
    Vendida,
}

impl EstadoPropiedad {
    pub fn as_str(&self) -> &'static str {
        match self {
            EstadoPropiedad::Disponible => "disponible",
            EstadoPropiedad::EnProceso => "en_proceso",
            EstadoPropiedad::Rentada => "rentada",
            EstadoPropiedad::Vendida => "vendida",
        }
    }
}

impl std::str::FromStr for EstadoPropiedad {
    type Err = String;

    fn from_str(valor: &str) -> Result<Self, Self::Err> {
        match valor {
            "disponible" => Ok(EstadoPropiedad::Disponible),
            "en_proceso" => Ok(EstadoPropiedad::EnProceso),
            "rentada" => Ok(EstadoPropiedad::Rentada),
            "vendida" => Ok(EstadoPropiedad::Vendida),
            otro => Err(format!("Estado de propiedad desconocido: {}", otro)),
        }
    }
}

/// Tipo de propiedad
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TipoLote {
    Casa,
    Departamento,
    Terreno,
    Comercial,
    Otro,
}

impl TipoLote {
    pub fn as_str(&self) -> &'static str {
        match self {
            TipoLote::Casa => "casa",
            TipoLote::Departamento => "departamento",
            TipoLote::Terreno => "terreno",
            TipoLote::Comercial => "comercial",
            TipoLote::Otro => "otro",
        }
    }
}

impl std::str::FromStr for TipoLote {
    type Err = String;

    fn from_str(valor: &str) -> Result<Self, Self::Err> {
        match valor {
            "casa" => Ok(TipoLote::Casa),
            "departamento" => Ok(TipoLote::Departamento),
            "terreno" => Ok(TipoLote::Terreno),
            "comercial" => Ok(TipoLote::Comercial),
            "otro" => Ok(TipoLote::Otro),
            otro => Err(format!("Tipo de lote desconocido: {}", otro)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn estado_propiedad_ida_y_vuelta() {
        for estado in [
            EstadoPropiedad::Disponible,
            EstadoPropiedad::EnProceso,
            EstadoPropiedad::Rentada,
            EstadoPropiedad::Vendida,
        ] {
            assert_eq!(EstadoPropiedad::from_str(estado.as_str()).unwrap(), estado);
        }
    }

    #[test]
    fn estado_desconocido_falla() {
        assert!(EstadoPropiedad::from_str("ocupado").is_err());
    }

    #[test]
    fn tipo_de_lote_ida_y_vuelta() {
        for tipo in [
            TipoLote::Casa,
            TipoLote::Departamento,
            TipoLote::Terreno,
            TipoLote::Comercial,
            TipoLote::Otro,
        ] {
            assert_eq!(TipoLote::from_str(tipo.as_str()).unwrap(), tipo);
        }
    }
}
