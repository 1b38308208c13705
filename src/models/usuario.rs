//! Modelo de usuario del sistema

use serde::Serialize;

/// Fila de la tabla `usuario`. El hash de contraseña nunca se serializa
/// en las respuestas.
#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
pub struct Usuario {
    pub id_usuario: i32,
    pub usuario: String,
    pub correo: String,
    #[serde(skip_serializing)]
    pub password: String,
    pub rol: String,
}
