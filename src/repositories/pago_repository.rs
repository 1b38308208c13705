//! Repositorio de pagos

use sqlx::{PgConnection, PgPool};

use crate::models::pago::{EstadoPago, NuevoPago, Pago, ResumenPagos};
use crate::utils::errors::AppError;

pub struct PagoRepository {
    pool: PgPool,
}

impl PagoRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn obtener_por_contrato(&self, id_contrato: i32) -> Result<Vec<Pago>, AppError> {
        let pagos = sqlx::query_as::<_, Pago>(
            "SELECT * FROM pago WHERE id_contrato = $1 ORDER BY numero_pago",
        )
        .bind(id_contrato)
        .fetch_all(&self.pool)
        .await?;
        Ok(pagos)
    }

    /// Marcar un pago como pagado con el método indicado; la fecha queda
    /// sellada con el día en que se registró.
    pub async fn registrar_pago(
        &self,
        id_pago: i32,
        metodo_pago: &str,
    ) -> Result<Pago, AppError> {
        let pago = sqlx::query_as::<_, Pago>(
            r#"
            UPDATE pago
            SET estado_pago = $1, metodo_pago = $2, fecha_pago = CURRENT_DATE
            WHERE id_pago = $3
            RETURNING *
            "#,
        )
        .bind(EstadoPago::Pagado.as_str())
        .bind(metodo_pago)
        .bind(id_pago)
        .fetch_optional(&self.pool)
        .await?
        .ok_or_else(|| AppError::NotFound("Pago no encontrado".to_string()))?;
        Ok(pago)
    }

    /// Resumen por contrato: pagados, pendientes y próximo vencimiento
    pub async fn resumen(&self) -> Result<Vec<ResumenPagos>, AppError> {
        let resumen = sqlx::query_as::<_, ResumenPagos>(
            r#"
            SELECT cv.id_contrato,
                   c.nombre AS cliente_nombre,
                   c.apellido_paterno,
                   COUNT(*) FILTER (WHERE p.estado_pago = 'pagado') AS pagados,
                   COUNT(*) FILTER (WHERE p.estado_pago <> 'pagado') AS pendientes,
                   MIN(p.fecha_pago) FILTER (WHERE p.estado_pago <> 'pagado') AS proximo_vencimiento
            FROM contrato_venta cv
            INNER JOIN cliente c ON cv.id_cliente = c.id_cliente
            INNER JOIN pago p ON p.id_contrato = cv.id_contrato
            GROUP BY cv.id_contrato, c.nombre, c.apellido_paterno
            ORDER BY cv.id_contrato
            "#,
        )
        .fetch_all(&self.pool)
        .await?;
        Ok(resumen)
    }

    /// Insertar el calendario completo dentro de la transacción abierta.
    /// El orden de inserción sigue el orden de entrada (numero_pago 1..N);
    /// los consumidores dependen de que ORDER BY numero_pago devuelva el
    /// orden de creación.
    pub async fn insertar_calendario_tx(
        conn: &mut PgConnection,
        pagos: &[NuevoPago],
    ) -> Result<Vec<Pago>, AppError> {
        let mut creados = Vec::with_capacity(pagos.len());
        for pago in pagos {
            let creado = sqlx::query_as::<_, Pago>(
                r#"
                INSERT INTO pago (id_contrato, numero_pago, monto, fecha_pago, metodo_pago, estado_pago)
                VALUES ($1, $2, $3, $4, $5, $6)
                RETURNING *
                "#,
            )
            .bind(pago.id_contrato)
            .bind(pago.numero_pago)
            .bind(pago.monto)
            .bind(pago.fecha_pago)
            .bind(&pago.metodo_pago)
            .bind(&pago.estado_pago)
            .fetch_one(&mut *conn)
            .await?;
            creados.push(creado);
        }
        Ok(creados)
    }
}
