//! Utilidades de validación
//!
//! Funciones helper compartidas entre los DTOs para validar
//! correos, teléfonos, CURP y montos.

use regex::Regex;
use rust_decimal::Decimal;
use std::sync::OnceLock;
use validator::ValidationError;

fn regex_correo() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").unwrap())
}

fn regex_telefono() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^\d{10}$").unwrap())
}

/// Validar formato de correo electrónico
pub fn validar_correo(valor: &str) -> Result<(), ValidationError> {
    if regex_correo().is_match(valor) {
        Ok(())
    } else {
        let mut error = ValidationError::new("correo");
        error.message = Some("Correo inválido".into());
        Err(error)
    }
}

/// Validar teléfono de 10 dígitos
pub fn validar_telefono(valor: &str) -> Result<(), ValidationError> {
    if regex_telefono().is_match(valor) {
        Ok(())
    } else {
        let mut error = ValidationError::new("telefono");
        error.message = Some("El teléfono debe contener exactamente 10 dígitos".into());
        Err(error)
    }
}

/// Validar CURP de 18 caracteres
pub fn validar_curp(valor: &str) -> Result<(), ValidationError> {
    if valor.chars().count() == 18 {
        Ok(())
    } else {
        let mut error = ValidationError::new("curp");
        error.message = Some("La CURP debe tener 18 caracteres".into());
        Err(error)
    }
}

/// Validar que un monto sea positivo
pub fn validar_monto_positivo(valor: &Decimal) -> Result<(), ValidationError> {
    if valor.is_sign_positive() && !valor.is_zero() {
        Ok(())
    } else {
        let mut error = ValidationError::new("monto");
        error.message = Some("El monto debe ser positivo".into());
        Err(error)
    }
}

/// Validar que un monto no sea negativo
pub fn validar_monto_no_negativo(valor: &Decimal) -> Result<(), ValidationError> {
    if valor.is_sign_negative() {
        let mut error = ValidationError::new("monto");
        error.message = Some("El monto no puede ser negativo".into());
        Err(error)
    } else {
        Ok(())
    }
}

/// Normalizar teléfono: recortar espacios alrededor
pub fn normalizar_telefono(telefono: Option<&str>) -> Option<String> {
    telefono.map(|t| t.trim().to_string()).filter(|t| !t.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn correo_valido_pasa() {
        assert!(validar_correo("ana@ejemplo.com").is_ok());
    }

    #[test]
    fn correo_sin_arroba_falla() {
        assert!(validar_correo("ana.ejemplo.com").is_err());
    }

    #[test]
    fn telefono_de_diez_digitos_pasa() {
        assert!(validar_telefono("5512345678").is_ok());
        assert!(validar_telefono("55123").is_err());
        assert!(validar_telefono("55123456789").is_err());
    }

    #[test]
    fn curp_de_18_caracteres_pasa() {
        assert!(validar_curp("GOMC900101HDFRRL09").is_ok());
        assert!(validar_curp("CORTA").is_err());
    }

    #[test]
    fn normalizar_telefono_recorta_espacios() {
        assert_eq!(
            normalizar_telefono(Some("  5512345678  ")),
            Some("5512345678".to_string())
        );
        assert_eq!(normalizar_telefono(Some("   ")), None);
        assert_eq!(normalizar_telefono(None), None);
    }
}
