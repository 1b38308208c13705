//! DTOs del flujo de autenticación con 2FA por correo

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::utils::validation::validar_correo;

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct LoginRequest {
    #[validate(custom = "validar_correo")]
    pub correo: String,

    #[validate(length(min = 1, message = "Correo y contraseña son requeridos"))]
    pub password: String,
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct VerificarOtpRequest {
    #[validate(custom = "validar_correo")]
    pub correo: String,

    #[validate(length(equal = 6, message = "El OTP debe tener 6 dígitos"))]
    pub otp: String,
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct RecuperarRequest {
    #[validate(custom = "validar_correo")]
    pub correo: String,
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct RestablecerRequest {
    #[validate(length(min = 6, message = "Contraseña muy corta"))]
    pub password: String,
}

/// Usuario autenticado dentro de la respuesta de verificación
#[derive(Debug, Serialize)]
pub struct UsuarioAutenticado {
    pub nombre: String,
    pub rol: String,
    pub correo: String,
}

#[derive(Debug, Serialize)]
pub struct VerificacionResponse {
    pub token: String,
    pub user: UsuarioAutenticado,
}
