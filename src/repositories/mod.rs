//! Acceso a datos con SQL parametrizado
//!
//! Los métodos de instancia usan el pool; las funciones asociadas con
//! `conn: &mut PgConnection` participan en la transacción del llamador.

pub mod cliente_repository;
pub mod contrato_repository;
pub mod lote_repository;
pub mod pago_repository;
pub mod ubicacion_repository;
pub mod usuario_repository;
