//! Repositorio de usuarios

use sqlx::PgPool;

use crate::models::usuario::Usuario;
use crate::utils::errors::AppError;

/// Datos para el alta de usuario; `password` llega ya hasheada
#[derive(Debug, Clone)]
pub struct NuevoUsuario {
    pub usuario: String,
    pub correo: String,
    pub password: String,
    pub rol: String,
}

/// Actualización parcial de usuario; `password` llega ya hasheada
#[derive(Debug, Clone, Default)]
pub struct ParcheUsuario {
    pub usuario: Option<String>,
    pub correo: Option<String>,
    pub password: Option<String>,
    pub rol: Option<String>,
}

pub struct UsuarioRepository {
    pool: PgPool,
}

impl UsuarioRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn obtener_todos(&self) -> Result<Vec<Usuario>, AppError> {
        let usuarios = sqlx::query_as::<_, Usuario>("SELECT * FROM usuario ORDER BY id_usuario")
            .fetch_all(&self.pool)
            .await?;
        Ok(usuarios)
    }

    pub async fn obtener_por_id(&self, id: i32) -> Result<Option<Usuario>, AppError> {
        let usuario = sqlx::query_as::<_, Usuario>("SELECT * FROM usuario WHERE id_usuario = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(usuario)
    }

    pub async fn obtener_por_correo(&self, correo: &str) -> Result<Option<Usuario>, AppError> {
        let usuario = sqlx::query_as::<_, Usuario>("SELECT * FROM usuario WHERE correo = $1")
            .bind(correo)
            .fetch_optional(&self.pool)
            .await?;
        Ok(usuario)
    }

    pub async fn crear(&self, datos: NuevoUsuario) -> Result<Usuario, AppError> {
        let existe: Option<i32> =
            sqlx::query_scalar("SELECT 1 FROM usuario WHERE correo = $1 LIMIT 1")
                .bind(&datos.correo)
                .fetch_optional(&self.pool)
                .await?;
        if existe.is_some() {
            return Err(AppError::Conflict(format!(
                "El correo '{}' ya está registrado",
                datos.correo
            )));
        }

        let usuario = sqlx::query_as::<_, Usuario>(
            r#"
            INSERT INTO usuario (usuario, correo, password, rol)
            VALUES ($1, $2, $3, $4)
            RETURNING *
            "#,
        )
        .bind(&datos.usuario)
        .bind(&datos.correo)
        .bind(&datos.password)
        .bind(&datos.rol)
        .fetch_one(&self.pool)
        .await?;
        Ok(usuario)
    }

    pub async fn actualizar(&self, id: i32, parche: ParcheUsuario) -> Result<Usuario, AppError> {
        let usuario = sqlx::query_as::<_, Usuario>(
            r#"
            UPDATE usuario SET
                usuario  = COALESCE($2, usuario),
                correo   = COALESCE($3, correo),
                password = COALESCE($4, password),
                rol      = COALESCE($5, rol)
            WHERE id_usuario = $1
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(parche.usuario)
        .bind(parche.correo)
        .bind(parche.password)
        .bind(parche.rol)
        .fetch_optional(&self.pool)
        .await?
        .ok_or_else(|| AppError::NotFound("Usuario no encontrado".to_string()))?;
        Ok(usuario)
    }

    pub async fn actualizar_password(
        &self,
        correo: &str,
        password_hasheada: &str,
    ) -> Result<(), AppError> {
        let resultado = sqlx::query("UPDATE usuario SET password = $1 WHERE correo = $2")
            .bind(password_hasheada)
            .bind(correo)
            .execute(&self.pool)
            .await?;
        if resultado.rows_affected() == 0 {
            return Err(AppError::NotFound("Usuario no encontrado".to_string()));
        }
        Ok(())
    }

    pub async fn eliminar(&self, id: i32) -> Result<Usuario, AppError> {
        let usuario =
            sqlx::query_as::<_, Usuario>("DELETE FROM usuario WHERE id_usuario = $1 RETURNING *")
                .bind(id)
                .fetch_optional(&self.pool)
                .await?
                .ok_or_else(|| AppError::NotFound("Usuario no encontrado".to_string()))?;
        Ok(usuario)
    }
}
