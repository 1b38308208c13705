//! Controladores: orquestan DTOs, servicios y repositorios

pub mod auth_controller;
pub mod cliente_controller;
pub mod contrato_controller;
pub mod lote_controller;
pub mod pago_controller;
pub mod ubicacion_controller;
pub mod usuario_controller;
