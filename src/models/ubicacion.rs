//! Modelos del catálogo geográfico (estado, ciudad, colonia)

use serde::Serialize;

#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
pub struct Estado {
    pub id_estado: i32,
    pub nombre_estado: String,
}

#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
pub struct Ciudad {
    pub id_ciudad: i32,
    pub id_estado: i32,
    pub nombre_ciudad: String,
}

#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
pub struct Colonia {
    pub id_colonia: i32,
    pub id_ciudad: i32,
    pub nombre_colonia: String,
    pub codigo_postal: Option<String>,
}
