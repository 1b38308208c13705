//! DTOs de clientes

use serde::Deserialize;
use validator::Validate;

use crate::utils::validation::{validar_correo, validar_curp, validar_telefono};

// Request para crear un cliente
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CrearClienteRequest {
    #[validate(length(
        min = 1,
        max = 100,
        message = "El nombre es obligatorio y no debe exceder los 100 caracteres"
    ))]
    pub nombre: String,

    #[validate(length(
        min = 1,
        max = 50,
        message = "El apellido paterno es obligatorio y no debe exceder los 50 caracteres"
    ))]
    pub apellido_paterno: String,

    #[validate(length(max = 50, message = "El apellido materno no debe exceder los 50 caracteres"))]
    pub apellido_materno: Option<String>,

    #[validate(custom = "validar_correo")]
    pub correo: String,

    #[validate(custom = "validar_telefono")]
    pub telefono: Option<String>,

    #[validate(custom = "validar_curp")]
    pub curp: String,

    #[validate(length(equal = 20, message = "La Clave de Elector debe tener 20 caracteres"))]
    pub clave_elector: Option<String>,

    pub doc_identificacion: Option<String>,
    pub doc_curp: Option<String>,
}

// Actualización parcial: sólo los campos presentes se modifican
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct ActualizarClienteRequest {
    #[validate(length(min = 1, max = 100))]
    pub nombre: Option<String>,
    #[validate(length(min = 1, max = 50))]
    pub apellido_paterno: Option<String>,
    #[validate(length(max = 50))]
    pub apellido_materno: Option<String>,
    #[validate(custom = "validar_correo")]
    pub correo: Option<String>,
    #[validate(custom = "validar_telefono")]
    pub telefono: Option<String>,
    #[validate(length(equal = 20))]
    pub clave_elector: Option<String>,
    pub doc_identificacion: Option<String>,
    pub doc_curp: Option<String>,
}

impl ActualizarClienteRequest {
    pub fn esta_vacio(&self) -> bool {
        self.nombre.is_none()
            && self.apellido_paterno.is_none()
            && self.apellido_materno.is_none()
            && self.correo.is_none()
            && self.telefono.is_none()
            && self.clave_elector.is_none()
            && self.doc_identificacion.is_none()
            && self.doc_curp.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cliente_valido_pasa() {
        let req = CrearClienteRequest {
            nombre: "Ana".to_string(),
            apellido_paterno: "Lopez".to_string(),
            apellido_materno: None,
            correo: "ana@ejemplo.com".to_string(),
            telefono: Some("5512345678".to_string()),
            curp: "LOPA900101MDFRRN08".to_string(),
            clave_elector: None,
            doc_identificacion: None,
            doc_curp: None,
        };
        assert!(req.validate().is_ok());
    }

    #[test]
    fn curp_corta_falla() {
        let req = CrearClienteRequest {
            nombre: "Ana".to_string(),
            apellido_paterno: "Lopez".to_string(),
            apellido_materno: None,
            correo: "ana@ejemplo.com".to_string(),
            telefono: None,
            curp: "CORTA".to_string(),
            clave_elector: None,
            doc_identificacion: None,
            doc_curp: None,
        };
        assert!(req.validate().is_err());
    }

    #[test]
    fn patch_vacio_se_detecta() {
        let req = ActualizarClienteRequest::default();
        assert!(req.esta_vacio());
    }
}
