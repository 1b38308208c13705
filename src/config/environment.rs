//! Configuración de variables de entorno
//!
//! Este módulo maneja la configuración del entorno y variables de configuración.

use std::env;

/// Configuración del entorno
#[derive(Debug, Clone)]
pub struct EnvironmentConfig {
    pub environment: String,
    pub port: u16,
    pub host: String,
    pub jwt_secret: String,
    pub jwt_expiration_horas: i64,
    pub otp_ttl_segundos: u64,
    pub reset_ttl_segundos: u64,
    pub max_intentos_login: u32,
    pub bloqueo_segundos: u64,
    pub redis_url: Option<String>,
    pub reset_url_base: String,
}

impl Default for EnvironmentConfig {
    fn default() -> Self {
        Self {
            environment: env::var("ENVIRONMENT").unwrap_or_else(|_| "development".to_string()),
            port: env::var("PORT")
                .unwrap_or_else(|_| "3000".to_string())
                .parse()
                .expect("PORT must be a valid number"),
            host: env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
            jwt_secret: env::var("JWT_SECRET").expect("JWT_SECRET must be set"),
            jwt_expiration_horas: env::var("JWT_EXPIRATION_HORAS")
                .unwrap_or_else(|_| "1".to_string())
                .parse()
                .expect("JWT_EXPIRATION_HORAS must be a valid number"),
            otp_ttl_segundos: 5 * 60,
            reset_ttl_segundos: 15 * 60,
            max_intentos_login: 5,
            bloqueo_segundos: 60,
            redis_url: env::var("REDIS_URL").ok(),
            reset_url_base: env::var("RESET_URL_BASE")
                .unwrap_or_else(|_| "http://localhost:4200/reset".to_string()),
        }
    }
}
