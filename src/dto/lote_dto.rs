//! DTOs de lotes

use rust_decimal::Decimal;
use serde::Deserialize;
use std::str::FromStr;
use validator::{Validate, ValidationError, ValidationErrors};

use crate::models::lote::{EstadoPropiedad, TipoLote};
use crate::utils::validation::validar_monto_positivo;

// Request para crear un lote
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CrearLoteRequest {
    pub tipo: String,

    #[validate(length(min = 1, max = 20, message = "El número de lote es obligatorio"))]
    pub numlote: String,

    #[validate(length(max = 20))]
    pub manzana: Option<String>,

    #[validate(length(max = 200))]
    pub direccion: Option<String>,

    pub id_colonia: Option<i32>,
    pub id_ciudad: Option<i32>,
    pub nombre_colonia_nueva: Option<String>,

    #[validate(custom = "validar_monto_positivo")]
    pub superficie_m2: Decimal,

    #[validate(custom = "validar_monto_positivo")]
    pub precio: Decimal,

    pub estado_propiedad: Option<String>,
    pub imagen: Option<String>,
}

impl CrearLoteRequest {
    pub fn validar_enums(&self) -> Result<(), ValidationErrors> {
        let mut errores = ValidationErrors::new();

        if TipoLote::from_str(&self.tipo).is_err() {
            let mut error = ValidationError::new("tipo");
            error.message = Some(
                "El tipo debe ser casa, departamento, terreno, comercial u otro".into(),
            );
            errores.add("tipo", error);
        }

        if let Some(estado) = &self.estado_propiedad {
            if EstadoPropiedad::from_str(estado).is_err() {
                let mut error = ValidationError::new("estado_propiedad");
                error.message = Some(
                    "El estado debe ser disponible, en_proceso, rentada o vendida".into(),
                );
                errores.add("estado_propiedad", error);
            }
        }

        // Para resolver o crear la colonia se necesita la ciudad
        if self.nombre_colonia_nueva.is_some() && self.id_ciudad.is_none() {
            let mut error = ValidationError::new("id_ciudad");
            error.message =
                Some("Se requiere id_ciudad para registrar una colonia nueva".into());
            errores.add("id_ciudad", error);
        }

        if errores.is_empty() {
            Ok(())
        } else {
            Err(errores)
        }
    }
}

// Actualización parcial de lote
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct ActualizarLoteRequest {
    pub tipo: Option<String>,
    #[validate(length(min = 1, max = 20))]
    pub numlote: Option<String>,
    #[validate(length(max = 20))]
    pub manzana: Option<String>,
    #[validate(length(max = 200))]
    pub direccion: Option<String>,
    pub id_colonia: Option<i32>,
    pub id_ciudad: Option<i32>,
    pub nombre_colonia_nueva: Option<String>,
    #[validate(custom = "validar_monto_positivo")]
    pub superficie_m2: Option<Decimal>,
    #[validate(custom = "validar_monto_positivo")]
    pub precio: Option<Decimal>,
    pub estado_propiedad: Option<String>,
    pub imagen: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request_base() -> CrearLoteRequest {
        CrearLoteRequest {
            tipo: "casa".to_string(),
            numlote: "A12".to_string(),
            manzana: Some("M1".to_string()),
            direccion: Some("Calle 5".to_string()),
            id_colonia: None,
            id_ciudad: Some(1),
            nombre_colonia_nueva: Some("Colonia Centro".to_string()),
            superficie_m2: "200.00".parse().unwrap(),
            precio: "1500000.00".parse().unwrap(),
            estado_propiedad: Some("disponible".to_string()),
            imagen: None,
        }
    }

    #[test]
    fn lote_valido_pasa() {
        let req = request_base();
        assert!(req.validate().is_ok());
        assert!(req.validar_enums().is_ok());
    }

    #[test]
    fn tipo_desconocido_falla() {
        let mut req = request_base();
        req.tipo = "castillo".to_string();
        assert!(req.validar_enums().is_err());
    }

    #[test]
    fn colonia_nueva_sin_ciudad_falla() {
        let mut req = request_base();
        req.id_ciudad = None;
        assert!(req.validar_enums().is_err());
    }
}
