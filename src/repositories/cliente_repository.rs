//! Repositorio de clientes

use sqlx::{PgConnection, PgPool};

use crate::models::cliente::{Cliente, ClienteMinimo};
use crate::utils::errors::AppError;

/// Datos completos para el alta de un cliente vía CRUD
#[derive(Debug, Clone)]
pub struct NuevoCliente {
    pub nombre: String,
    pub apellido_paterno: String,
    pub apellido_materno: Option<String>,
    pub correo: String,
    pub telefono: Option<String>,
    pub curp: String,
    pub clave_elector: Option<String>,
    pub doc_identificacion: Option<String>,
    pub doc_curp: Option<String>,
}

/// Actualización parcial de un cliente
#[derive(Debug, Clone, Default)]
pub struct ParcheCliente {
    pub nombre: Option<String>,
    pub apellido_paterno: Option<String>,
    pub apellido_materno: Option<String>,
    pub correo: Option<String>,
    pub telefono: Option<String>,
    pub clave_elector: Option<String>,
    pub doc_identificacion: Option<String>,
    pub doc_curp: Option<String>,
}

pub struct ClienteRepository {
    pool: PgPool,
}

impl ClienteRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn obtener_todos(&self) -> Result<Vec<Cliente>, AppError> {
        let clientes = sqlx::query_as::<_, Cliente>("SELECT * FROM cliente ORDER BY id_cliente")
            .fetch_all(&self.pool)
            .await?;
        Ok(clientes)
    }

    pub async fn obtener_por_curp(&self, curp: &str) -> Result<Option<Cliente>, AppError> {
        let cliente = sqlx::query_as::<_, Cliente>("SELECT * FROM cliente WHERE curp = $1")
            .bind(curp)
            .fetch_optional(&self.pool)
            .await?;
        Ok(cliente)
    }

    pub async fn crear(&self, datos: NuevoCliente) -> Result<Cliente, AppError> {
        self.verificar_unicidad(&datos, None).await?;

        let cliente = sqlx::query_as::<_, Cliente>(
            r#"
            INSERT INTO cliente
                (nombre, apellido_paterno, apellido_materno, correo, telefono, curp, clave_elector, doc_identificacion, doc_curp)
            VALUES
                ($1, $2, $3, $4, $5, $6, $7, $8, $9)
            RETURNING *
            "#,
        )
        .bind(&datos.nombre)
        .bind(&datos.apellido_paterno)
        .bind(&datos.apellido_materno)
        .bind(&datos.correo)
        .bind(&datos.telefono)
        .bind(&datos.curp)
        .bind(&datos.clave_elector)
        .bind(&datos.doc_identificacion)
        .bind(&datos.doc_curp)
        .fetch_one(&self.pool)
        .await?;

        Ok(cliente)
    }

    pub async fn actualizar_por_curp(
        &self,
        curp: &str,
        parche: ParcheCliente,
    ) -> Result<Cliente, AppError> {
        // Unicidad de los campos que cambian, excluyendo al propio cliente
        let pares = [
            ("correo", parche.correo.as_deref()),
            ("telefono", parche.telefono.as_deref()),
            ("clave_elector", parche.clave_elector.as_deref()),
        ];
        for (campo, valor) in pares {
            if let Some(valor) = valor {
                if self.campo_ocupado(campo, valor, Some(curp)).await? {
                    return Err(AppError::Conflict(format!(
                        "El {} '{}' ya está registrado en otro cliente",
                        campo, valor
                    )));
                }
            }
        }

        let cliente = sqlx::query_as::<_, Cliente>(
            r#"
            UPDATE cliente SET
                nombre             = COALESCE($2, nombre),
                apellido_paterno   = COALESCE($3, apellido_paterno),
                apellido_materno   = COALESCE($4, apellido_materno),
                correo             = COALESCE($5, correo),
                telefono           = COALESCE($6, telefono),
                clave_elector      = COALESCE($7, clave_elector),
                doc_identificacion = COALESCE($8, doc_identificacion),
                doc_curp           = COALESCE($9, doc_curp)
            WHERE curp = $1
            RETURNING *
            "#,
        )
        .bind(curp)
        .bind(parche.nombre)
        .bind(parche.apellido_paterno)
        .bind(parche.apellido_materno)
        .bind(parche.correo)
        .bind(parche.telefono)
        .bind(parche.clave_elector)
        .bind(parche.doc_identificacion)
        .bind(parche.doc_curp)
        .fetch_optional(&self.pool)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("No existe un cliente con CURP '{}'", curp)))?;

        Ok(cliente)
    }

    pub async fn eliminar_por_curp(&self, curp: &str) -> Result<Cliente, AppError> {
        let cliente =
            sqlx::query_as::<_, Cliente>("DELETE FROM cliente WHERE curp = $1 RETURNING *")
                .bind(curp)
                .fetch_optional(&self.pool)
                .await?
                .ok_or_else(|| AppError::NotFound("Cliente no encontrado".to_string()))?;
        Ok(cliente)
    }

    async fn verificar_unicidad(
        &self,
        datos: &NuevoCliente,
        excluir_curp: Option<&str>,
    ) -> Result<(), AppError> {
        let pares = [
            ("correo", Some(datos.correo.as_str())),
            ("telefono", datos.telefono.as_deref()),
            ("curp", Some(datos.curp.as_str())),
            ("clave_elector", datos.clave_elector.as_deref()),
        ];
        for (campo, valor) in pares {
            if let Some(valor) = valor {
                if self.campo_ocupado(campo, valor, excluir_curp).await? {
                    return Err(AppError::Conflict(format!(
                        "El {} '{}' ya está registrado en otro cliente",
                        campo, valor
                    )));
                }
            }
        }
        Ok(())
    }

    /// Verificar si un valor único ya existe. El nombre de columna proviene
    /// de una lista fija interna, nunca de datos del usuario.
    async fn campo_ocupado(
        &self,
        campo: &str,
        valor: &str,
        excluir_curp: Option<&str>,
    ) -> Result<bool, AppError> {
        let consulta = match (campo, excluir_curp.is_some()) {
            ("correo", false) => "SELECT 1 FROM cliente WHERE correo = $1 LIMIT 1",
            ("correo", true) => "SELECT 1 FROM cliente WHERE correo = $1 AND curp <> $2 LIMIT 1",
            ("telefono", false) => "SELECT 1 FROM cliente WHERE telefono = $1 LIMIT 1",
            ("telefono", true) => {
                "SELECT 1 FROM cliente WHERE telefono = $1 AND curp <> $2 LIMIT 1"
            }
            ("curp", false) => "SELECT 1 FROM cliente WHERE curp = $1 LIMIT 1",
            ("curp", true) => "SELECT 1 FROM cliente WHERE curp = $1 AND curp <> $2 LIMIT 1",
            ("clave_elector", false) => "SELECT 1 FROM cliente WHERE clave_elector = $1 LIMIT 1",
            ("clave_elector", true) => {
                "SELECT 1 FROM cliente WHERE clave_elector = $1 AND curp <> $2 LIMIT 1"
            }
            _ => return Err(AppError::Internal(format!("Campo desconocido: {}", campo))),
        };

        let mut consulta_sql = sqlx::query_scalar::<_, i32>(consulta).bind(valor);
        if let Some(curp) = excluir_curp {
            consulta_sql = consulta_sql.bind(curp);
        }

        Ok(consulta_sql.fetch_optional(&self.pool).await?.is_some())
    }

    // --- Funciones dentro de la transacción de creación de contrato ---

    pub async fn obtener_por_id_tx(
        conn: &mut PgConnection,
        id: i32,
    ) -> Result<Option<Cliente>, AppError> {
        let cliente = sqlx::query_as::<_, Cliente>("SELECT * FROM cliente WHERE id_cliente = $1")
            .bind(id)
            .fetch_optional(&mut *conn)
            .await?;
        Ok(cliente)
    }

    pub async fn buscar_por_correo_tx(
        conn: &mut PgConnection,
        correo: &str,
    ) -> Result<Option<Cliente>, AppError> {
        let cliente = sqlx::query_as::<_, Cliente>("SELECT * FROM cliente WHERE correo = $1")
            .bind(correo)
            .fetch_optional(&mut *conn)
            .await?;
        Ok(cliente)
    }

    /// Alta mínima de cliente durante la creación de un contrato
    pub async fn insertar_minimo_tx(
        conn: &mut PgConnection,
        datos: &ClienteMinimo,
    ) -> Result<Cliente, AppError> {
        let cliente = sqlx::query_as::<_, Cliente>(
            r#"
            INSERT INTO cliente (nombre, apellido_paterno, apellido_materno, correo, telefono)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING *
            "#,
        )
        .bind(&datos.nombre)
        .bind(&datos.apellido_paterno)
        .bind(&datos.apellido_materno)
        .bind(&datos.correo)
        .bind(&datos.telefono)
        .fetch_one(&mut *conn)
        .await?;
        Ok(cliente)
    }
}
