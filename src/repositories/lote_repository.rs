//! Repositorio de lotes

use rust_decimal::Decimal;
use sqlx::{PgConnection, PgPool};

use crate::models::lote::Lote;
use crate::utils::errors::AppError;

/// Datos para insertar un lote nuevo
#[derive(Debug, Clone)]
pub struct NuevoLote {
    pub tipo: String,
    pub numlote: String,
    pub manzana: Option<String>,
    pub direccion: Option<String>,
    pub id_colonia: Option<i32>,
    pub id_ciudad: Option<i32>,
    pub nombre_colonia_nueva: Option<String>,
    pub superficie_m2: Decimal,
    pub precio: Decimal,
    pub estado_propiedad: String,
    pub imagen: Option<String>,
}

/// Actualización parcial de un lote: sólo los campos `Some` se aplican
#[derive(Debug, Clone, Default)]
pub struct ParcheLote {
    pub tipo: Option<String>,
    pub numlote: Option<String>,
    pub manzana: Option<String>,
    pub direccion: Option<String>,
    pub id_colonia: Option<i32>,
    pub id_ciudad: Option<i32>,
    pub nombre_colonia_nueva: Option<String>,
    pub superficie_m2: Option<Decimal>,
    pub precio: Option<Decimal>,
    pub estado_propiedad: Option<String>,
    pub imagen: Option<String>,
}

pub struct LoteRepository {
    pool: PgPool,
}

impl LoteRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn obtener_todos(&self) -> Result<Vec<Lote>, AppError> {
        let lotes = sqlx::query_as::<_, Lote>("SELECT * FROM lote ORDER BY id_propiedad")
            .fetch_all(&self.pool)
            .await?;
        Ok(lotes)
    }

    pub async fn obtener_por_id(&self, id: i32) -> Result<Option<Lote>, AppError> {
        let lote = sqlx::query_as::<_, Lote>("SELECT * FROM lote WHERE id_propiedad = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(lote)
    }

    /// Insertar un lote. Si viene `nombre_colonia_nueva`, la colonia se
    /// resuelve o se crea dentro de la misma transacción que el lote.
    pub async fn crear(&self, datos: NuevoLote) -> Result<Lote, AppError> {
        let mut tx = self.pool.begin().await?;

        let id_colonia = match (&datos.nombre_colonia_nueva, datos.id_ciudad) {
            (Some(nombre), Some(id_ciudad)) => {
                Some(resolver_colonia(&mut tx, id_ciudad, nombre).await?)
            }
            _ => datos.id_colonia,
        };

        let lote = sqlx::query_as::<_, Lote>(
            r#"
            INSERT INTO lote (tipo, numlote, manzana, direccion, id_colonia, superficie_m2, precio, estado_propiedad, imagen)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
            RETURNING *
            "#,
        )
        .bind(&datos.tipo)
        .bind(&datos.numlote)
        .bind(&datos.manzana)
        .bind(&datos.direccion)
        .bind(id_colonia)
        .bind(datos.superficie_m2)
        .bind(datos.precio)
        .bind(&datos.estado_propiedad)
        .bind(&datos.imagen)
        .fetch_one(&mut *tx)
        .await?;

        tx.commit().await?;
        Ok(lote)
    }

    /// Aplicar una actualización parcial con COALESCE: los campos ausentes
    /// conservan su valor. Nunca se interpolan nombres de columna. Igual que
    /// en el alta, una colonia nueva se resuelve en la misma transacción.
    pub async fn actualizar(&self, id: i32, parche: ParcheLote) -> Result<Lote, AppError> {
        let mut tx = self.pool.begin().await?;

        let id_colonia = match (&parche.nombre_colonia_nueva, parche.id_ciudad) {
            (Some(nombre), Some(id_ciudad)) => {
                Some(resolver_colonia(&mut tx, id_ciudad, nombre).await?)
            }
            _ => parche.id_colonia,
        };

        let lote = sqlx::query_as::<_, Lote>(
            r#"
            UPDATE lote SET
                tipo             = COALESCE($2, tipo),
                numlote          = COALESCE($3, numlote),
                manzana          = COALESCE($4, manzana),
                direccion        = COALESCE($5, direccion),
                id_colonia       = COALESCE($6, id_colonia),
                superficie_m2    = COALESCE($7, superficie_m2),
                precio           = COALESCE($8, precio),
                estado_propiedad = COALESCE($9, estado_propiedad),
                imagen           = COALESCE($10, imagen)
            WHERE id_propiedad = $1
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(parche.tipo)
        .bind(parche.numlote)
        .bind(parche.manzana)
        .bind(parche.direccion)
        .bind(id_colonia)
        .bind(parche.superficie_m2)
        .bind(parche.precio)
        .bind(parche.estado_propiedad)
        .bind(parche.imagen)
        .fetch_optional(&mut *tx)
        .await?
        .ok_or_else(|| AppError::NotFound("Lote no encontrado".to_string()))?;

        tx.commit().await?;
        Ok(lote)
    }

    pub async fn eliminar(&self, id: i32) -> Result<Lote, AppError> {
        let lote =
            sqlx::query_as::<_, Lote>("DELETE FROM lote WHERE id_propiedad = $1 RETURNING *")
                .bind(id)
                .fetch_optional(&self.pool)
                .await?
                .ok_or_else(|| AppError::NotFound("Lote no encontrado".to_string()))?;
        Ok(lote)
    }

    /// Leer el lote con candado de fila (SELECT ... FOR UPDATE) para
    /// serializar intentos de contrato concurrentes sobre la misma propiedad.
    pub async fn obtener_para_actualizar(
        conn: &mut PgConnection,
        id: i32,
    ) -> Result<Option<Lote>, AppError> {
        let lote =
            sqlx::query_as::<_, Lote>("SELECT * FROM lote WHERE id_propiedad = $1 FOR UPDATE")
                .bind(id)
                .fetch_optional(&mut *conn)
                .await?;
        Ok(lote)
    }

    /// Cambiar el estado de la propiedad dentro de la transacción abierta
    pub async fn actualizar_estado(
        conn: &mut PgConnection,
        id: i32,
        estado: &str,
    ) -> Result<(), AppError> {
        sqlx::query("UPDATE lote SET estado_propiedad = $1 WHERE id_propiedad = $2")
            .bind(estado)
            .bind(id)
            .execute(&mut *conn)
            .await?;
        Ok(())
    }
}

/// Buscar la colonia por nombre dentro de la ciudad; crearla si no existe.
async fn resolver_colonia(
    tx: &mut sqlx::Transaction<'_, sqlx::Postgres>,
    id_ciudad: i32,
    nombre: &str,
) -> Result<i32, AppError> {
    let existente: Option<(i32,)> = sqlx::query_as(
        "SELECT id_colonia FROM colonia WHERE id_ciudad = $1 AND nombre_colonia = $2 LIMIT 1",
    )
    .bind(id_ciudad)
    .bind(nombre)
    .fetch_optional(&mut **tx)
    .await?;

    if let Some((id_colonia,)) = existente {
        return Ok(id_colonia);
    }

    let (id_colonia,): (i32,) = sqlx::query_as(
        "INSERT INTO colonia (id_ciudad, nombre_colonia) VALUES ($1, $2) RETURNING id_colonia",
    )
    .bind(id_ciudad)
    .bind(nombre)
    .fetch_one(&mut **tx)
    .await?;

    Ok(id_colonia)
}
