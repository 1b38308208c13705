pub mod auth_routes;
pub mod cliente_routes;
pub mod contrato_routes;
pub mod lote_routes;
pub mod pago_routes;
pub mod ubicacion_routes;
pub mod usuario_routes;
