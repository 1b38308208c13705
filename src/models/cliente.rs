//! Modelo de cliente (comprador)

use serde::Serialize;

/// Fila de la tabla `cliente`
#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
pub struct Cliente {
    pub id_cliente: i32,
    pub nombre: String,
    pub apellido_paterno: String,
    pub apellido_materno: Option<String>,
    pub correo: String,
    pub telefono: Option<String>,
    pub curp: Option<String>,
    pub clave_elector: Option<String>,
    pub doc_identificacion: Option<String>,
    pub doc_curp: Option<String>,
}

/// Datos mínimos para dar de alta un cliente durante la creación
/// de un contrato (resolución por correo sin coincidencia).
#[derive(Debug, Clone)]
pub struct ClienteMinimo {
    pub nombre: String,
    pub apellido_paterno: String,
    pub apellido_materno: Option<String>,
    pub correo: String,
    pub telefono: Option<String>,
}
