//! DTOs de usuarios del sistema

use serde::Deserialize;
use validator::Validate;

use crate::utils::validation::validar_correo;

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CrearUsuarioRequest {
    #[validate(length(min = 1, max = 100, message = "El nombre de usuario es obligatorio"))]
    pub usuario: String,

    #[validate(custom = "validar_correo")]
    pub correo: String,

    #[validate(length(min = 6, message = "La contraseña debe tener al menos 6 caracteres"))]
    pub password: String,

    pub rol: Option<String>,
}

// Actualización parcial de usuario
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct ActualizarUsuarioRequest {
    #[validate(length(min = 1, max = 100))]
    pub usuario: Option<String>,
    #[validate(custom = "validar_correo")]
    pub correo: Option<String>,
    #[validate(length(min = 6))]
    pub password: Option<String>,
    pub rol: Option<String>,
}
