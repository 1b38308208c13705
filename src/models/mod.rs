//! Modelos del sistema
//!
//! Este módulo contiene todos los modelos de datos que mapean exactamente
//! al schema PostgreSQL con las convenciones estándar.

pub mod cliente;
pub mod contrato;
pub mod lote;
pub mod pago;
pub mod ubicacion;
pub mod usuario;
