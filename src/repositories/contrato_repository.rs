//! Repositorio de contratos de venta

use rust_decimal::Decimal;
use sqlx::{PgConnection, PgPool};

use crate::models::contrato::{ContratoResumen, ContratoVenta};
use crate::utils::errors::AppError;

/// Datos validados para insertar un contrato
#[derive(Debug, Clone)]
pub struct NuevoContrato {
    pub id_lote: i32,
    pub id_cliente: i32,
    pub precio_total: Decimal,
    pub enganche: Decimal,
    pub plazo_meses: i32,
    pub estado_contrato: String,
}

pub struct ContratoRepository {
    pool: PgPool,
}

impl ContratoRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Listado de contratos con datos del cliente y del lote
    pub async fn obtener_todos(&self) -> Result<Vec<ContratoResumen>, AppError> {
        let contratos = sqlx::query_as::<_, ContratoResumen>(
            r#"
            SELECT cv.id_contrato, cv.id_lote, cv.id_cliente, cv.precio_total, cv.enganche,
                   cv.plazo_meses, cv.estado_contrato, cv.fecha_contrato,
                   c.nombre AS cliente_nombre, c.apellido_paterno, c.apellido_materno,
                   c.correo, c.telefono,
                   l.tipo AS lote_tipo, l.numlote, l.direccion
            FROM contrato_venta cv
            INNER JOIN cliente c ON cv.id_cliente = c.id_cliente
            INNER JOIN lote l ON cv.id_lote = l.id_propiedad
            ORDER BY cv.fecha_contrato DESC
            "#,
        )
        .fetch_all(&self.pool)
        .await?;
        Ok(contratos)
    }

    /// Insertar el contrato dentro de la transacción abierta; la validación
    /// de negocio ya ocurrió antes de llegar aquí.
    pub async fn insertar_tx(
        conn: &mut PgConnection,
        datos: &NuevoContrato,
    ) -> Result<ContratoVenta, AppError> {
        let contrato = sqlx::query_as::<_, ContratoVenta>(
            r#"
            INSERT INTO contrato_venta
                (id_lote, id_cliente, precio_total, enganche, plazo_meses, estado_contrato)
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING *
            "#,
        )
        .bind(datos.id_lote)
        .bind(datos.id_cliente)
        .bind(datos.precio_total)
        .bind(datos.enganche)
        .bind(datos.plazo_meses)
        .bind(&datos.estado_contrato)
        .fetch_one(&mut *conn)
        .await?;
        Ok(contrato)
    }
}
