//! Autenticación con 2FA por correo
//!
//! Login con contraseña + OTP de 6 dígitos, bloqueo temporal por intentos
//! fallidos y restablecimiento de contraseña con token de un solo uso.
//! Todo el estado transitorio vive en el almacén temporal inyectado.

use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::{info, warn};
use uuid::Uuid;

use crate::cache::AlmacenTemporal;
use crate::config::EnvironmentConfig;
use crate::dto::auth_dto::{UsuarioAutenticado, VerificacionResponse};
use crate::models::usuario::Usuario;
use crate::repositories::usuario_repository::UsuarioRepository;
use crate::services::notificador::Notificador;
use crate::utils::errors::AppError;

/// Claims del token de sesión
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    pub sub: String,
    pub rol: String,
    pub exp: i64,
}

/// Firmar el token de sesión tras verificar el OTP
pub fn generar_token(
    secreto: &str,
    usuario: &Usuario,
    horas: i64,
) -> Result<String, AppError> {
    let exp = chrono::Utc::now() + chrono::Duration::hours(horas);
    let claims = Claims {
        sub: usuario.id_usuario.to_string(),
        rol: usuario.rol.clone(),
        exp: exp.timestamp(),
    };
    encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(secreto.as_ref()),
    )
    .map_err(|e| AppError::Internal(format!("Error al firmar el token: {}", e)))
}

/// Validar firma y vigencia de un token de sesión
pub fn validar_token(secreto: &str, token: &str) -> Result<Claims, AppError> {
    decode::<Claims>(
        token,
        &DecodingKey::from_secret(secreto.as_ref()),
        &Validation::default(),
    )
    .map(|datos| datos.claims)
    .map_err(|_| AppError::Unauthorized("Token inválido o expirado".to_string()))
}

pub struct AuthService {
    usuarios: UsuarioRepository,
    almacen: Arc<dyn AlmacenTemporal>,
    notificador: Arc<dyn Notificador>,
    config: EnvironmentConfig,
}

impl AuthService {
    pub fn new(
        usuarios: UsuarioRepository,
        almacen: Arc<dyn AlmacenTemporal>,
        notificador: Arc<dyn Notificador>,
        config: EnvironmentConfig,
    ) -> Self {
        Self {
            usuarios,
            almacen,
            notificador,
            config,
        }
    }

    fn clave_otp(correo: &str) -> String {
        format!("otp:{}", correo)
    }

    fn clave_intentos(correo: &str) -> String {
        format!("intentos:{}", correo)
    }

    fn clave_bloqueo(correo: &str) -> String {
        format!("bloqueo:{}", correo)
    }

    fn clave_reset(token: &str) -> String {
        format!("reset:{}", token)
    }

    /// Primer paso del login: contraseña correcta genera y envía un OTP
    pub async fn login(&self, correo: &str, password: &str) -> Result<(), AppError> {
        let usuario = self
            .usuarios
            .obtener_por_correo(correo)
            .await?
            .ok_or_else(|| AppError::NotFound("Usuario no encontrado".to_string()))?;

        if self.almacen.obtener(&Self::clave_bloqueo(correo)).await?.is_some() {
            return Err(AppError::BadRequest(
                "Usuario bloqueado temporalmente".to_string(),
            ));
        }

        let password_valida = bcrypt::verify(password, &usuario.password)
            .map_err(|e| AppError::Internal(format!("Error al verificar contraseña: {}", e)))?;

        if !password_valida {
            return Err(self.registrar_intento_fallido(correo).await?);
        }

        self.almacen.eliminar(&Self::clave_intentos(correo)).await?;

        let otp = format!("{:06}", rand::thread_rng().gen_range(0..1_000_000));
        self.almacen
            .guardar(&Self::clave_otp(correo), &otp, self.config.otp_ttl_segundos)
            .await?;
        self.notificador.enviar_otp(correo, &otp).await?;

        info!(correo = %correo, "Código 2FA enviado al correo");
        Ok(())
    }

    /// Contabilizar un intento fallido; al llegar al límite el usuario
    /// queda bloqueado y el contador se reinicia.
    async fn registrar_intento_fallido(&self, correo: &str) -> Result<AppError, AppError> {
        let clave = Self::clave_intentos(correo);
        let intentos: u32 = self
            .almacen
            .obtener(&clave)
            .await?
            .and_then(|valor| valor.parse().ok())
            .unwrap_or(0)
            + 1;

        if intentos >= self.config.max_intentos_login {
            self.almacen.eliminar(&clave).await?;
            self.almacen
                .guardar(
                    &Self::clave_bloqueo(correo),
                    "1",
                    self.config.bloqueo_segundos,
                )
                .await?;
            warn!(correo = %correo, "Usuario bloqueado por intentos fallidos");
            return Ok(AppError::BadRequest(
                "Usuario bloqueado por intentos fallidos".to_string(),
            ));
        }

        self.almacen
            .guardar(&clave, &intentos.to_string(), 15 * 60)
            .await?;
        Ok(AppError::BadRequest("Contraseña incorrecta".to_string()))
    }

    /// Segundo paso: el OTP es de un solo uso y caduca a los 5 minutos
    pub async fn verificar_otp(
        &self,
        correo: &str,
        otp: &str,
    ) -> Result<VerificacionResponse, AppError> {
        let clave = Self::clave_otp(correo);
        let guardado = self
            .almacen
            .obtener(&clave)
            .await?
            .ok_or_else(|| AppError::BadRequest("OTP no generado o expirado".to_string()))?;

        if guardado != otp {
            return Err(AppError::BadRequest("OTP incorrecto".to_string()));
        }

        self.almacen.eliminar(&clave).await?;

        let usuario = self
            .usuarios
            .obtener_por_correo(correo)
            .await?
            .ok_or_else(|| AppError::NotFound("Usuario no encontrado".to_string()))?;

        let token = generar_token(
            &self.config.jwt_secret,
            &usuario,
            self.config.jwt_expiration_horas,
        )?;

        Ok(VerificacionResponse {
            token,
            user: UsuarioAutenticado {
                nombre: usuario.usuario,
                rol: usuario.rol,
                correo: usuario.correo,
            },
        })
    }

    /// Emitir un token de restablecimiento y entregarlo al notificador
    pub async fn enviar_enlace_recuperacion(&self, correo: &str) -> Result<(), AppError> {
        self.usuarios
            .obtener_por_correo(correo)
            .await?
            .ok_or_else(|| AppError::NotFound("Usuario no encontrado".to_string()))?;

        let token = Uuid::new_v4().simple().to_string();
        self.almacen
            .guardar(
                &Self::clave_reset(&token),
                correo,
                self.config.reset_ttl_segundos,
            )
            .await?;

        let enlace = format!("{}/{}", self.config.reset_url_base, token);
        self.notificador.enviar_reset(correo, &enlace).await?;

        info!(correo = %correo, "Enlace de restablecimiento emitido");
        Ok(())
    }

    /// Consumir el token de restablecimiento y guardar la nueva contraseña
    pub async fn restablecer_password(
        &self,
        token: &str,
        password: &str,
    ) -> Result<(), AppError> {
        let clave = Self::clave_reset(token);
        let correo = self
            .almacen
            .obtener(&clave)
            .await?
            .ok_or_else(|| AppError::BadRequest("Token inválido o expirado".to_string()))?;

        let hash = bcrypt::hash(password, bcrypt::DEFAULT_COST)
            .map_err(|e| AppError::Internal(format!("Error al hashear contraseña: {}", e)))?;

        self.usuarios.actualizar_password(&correo, &hash).await?;
        self.almacen.eliminar(&clave).await?;

        info!(correo = %correo, "Contraseña actualizada correctamente");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn usuario_de_prueba() -> Usuario {
        Usuario {
            id_usuario: 42,
            usuario: "admin".to_string(),
            correo: "admin@ejemplo.com".to_string(),
            password: "$2b$12$hash".to_string(),
            rol: "administrador".to_string(),
        }
    }

    #[test]
    fn token_ida_y_vuelta() {
        let usuario = usuario_de_prueba();
        let token = generar_token("secreto-de-prueba", &usuario, 1).unwrap();
        let claims = validar_token("secreto-de-prueba", &token).unwrap();
        assert_eq!(claims.sub, "42");
        assert_eq!(claims.rol, "administrador");
    }

    #[test]
    fn token_con_otro_secreto_falla() {
        let usuario = usuario_de_prueba();
        let token = generar_token("secreto-de-prueba", &usuario, 1).unwrap();
        assert!(validar_token("otro-secreto", &token).is_err());
    }
}
