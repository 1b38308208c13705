use sqlx::PgPool;
use validator::Validate;

use crate::dto::usuario_dto::{ActualizarUsuarioRequest, CrearUsuarioRequest};
use crate::models::usuario::Usuario;
use crate::repositories::usuario_repository::{
    NuevoUsuario, ParcheUsuario, UsuarioRepository,
};
use crate::utils::errors::AppError;

/// Rol por omisión para usuarios nuevos
const ROL_VENDEDOR: &str = "vendedor";

pub struct UsuarioController {
    repository: UsuarioRepository,
}

impl UsuarioController {
    pub fn new(pool: PgPool) -> Self {
        Self {
            repository: UsuarioRepository::new(pool),
        }
    }

    pub async fn listar(&self) -> Result<Vec<Usuario>, AppError> {
        self.repository.obtener_todos().await
    }

    pub async fn obtener_por_id(&self, id: i32) -> Result<Usuario, AppError> {
        self.repository
            .obtener_por_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Usuario no encontrado".to_string()))
    }

    pub async fn crear(&self, request: CrearUsuarioRequest) -> Result<Usuario, AppError> {
        request.validate()?;

        let password = bcrypt::hash(&request.password, bcrypt::DEFAULT_COST)
            .map_err(|e| AppError::Internal(format!("Error al hashear contraseña: {}", e)))?;

        self.repository
            .crear(NuevoUsuario {
                usuario: request.usuario,
                correo: request.correo,
                password,
                rol: request.rol.unwrap_or_else(|| ROL_VENDEDOR.to_string()),
            })
            .await
    }

    pub async fn actualizar(
        &self,
        id: i32,
        request: ActualizarUsuarioRequest,
    ) -> Result<Usuario, AppError> {
        request.validate()?;

        let password = match request.password {
            Some(password) => Some(
                bcrypt::hash(&password, bcrypt::DEFAULT_COST).map_err(|e| {
                    AppError::Internal(format!("Error al hashear contraseña: {}", e))
                })?,
            ),
            None => None,
        };

        self.repository
            .actualizar(
                id,
                ParcheUsuario {
                    usuario: request.usuario,
                    correo: request.correo,
                    password,
                    rol: request.rol,
                },
            )
            .await
    }

    pub async fn eliminar(&self, id: i32) -> Result<Usuario, AppError> {
        self.repository.eliminar(id).await
    }
}
