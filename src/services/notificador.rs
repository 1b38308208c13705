//! Notificaciones por correo
//!
//! El envío real de correo queda fuera del núcleo; el resto del sistema
//! sólo necesita saber si la notificación se aceptó o falló, así que la
//! interfaz es un trait inyectable.

use async_trait::async_trait;
use tracing::info;

use crate::utils::errors::AppError;

/// Canal de notificaciones del flujo de autenticación
#[async_trait]
pub trait Notificador: Send + Sync {
    /// Entregar el código 2FA al correo del usuario
    async fn enviar_otp(&self, correo: &str, otp: &str) -> Result<(), AppError>;

    /// Entregar el enlace de restablecimiento de contraseña
    async fn enviar_reset(&self, correo: &str, enlace: &str) -> Result<(), AppError>;
}

/// Implementación que registra el envío en la bitácora del servidor.
/// El código nunca se expone en la respuesta HTTP.
pub struct NotificadorBitacora;

#[async_trait]
impl Notificador for NotificadorBitacora {
    async fn enviar_otp(&self, correo: &str, _otp: &str) -> Result<(), AppError> {
        info!(correo = %correo, "📧 Código 2FA generado y entregado al canal de correo");
        Ok(())
    }

    async fn enviar_reset(&self, correo: &str, _enlace: &str) -> Result<(), AppError> {
        info!(correo = %correo, "📧 Enlace de restablecimiento entregado al canal de correo");
        Ok(())
    }
}
