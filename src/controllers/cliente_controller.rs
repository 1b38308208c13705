use sqlx::PgPool;
use validator::Validate;

use crate::dto::cliente_dto::{ActualizarClienteRequest, CrearClienteRequest};
use crate::models::cliente::Cliente;
use crate::repositories::cliente_repository::{
    ClienteRepository, NuevoCliente, ParcheCliente,
};
use crate::utils::errors::AppError;

pub struct ClienteController {
    repository: ClienteRepository,
}

impl ClienteController {
    pub fn new(pool: PgPool) -> Self {
        Self {
            repository: ClienteRepository::new(pool),
        }
    }

    pub async fn listar(&self) -> Result<Vec<Cliente>, AppError> {
        self.repository.obtener_todos().await
    }

    pub async fn obtener_por_curp(&self, curp: &str) -> Result<Cliente, AppError> {
        self.repository
            .obtener_por_curp(curp)
            .await?
            .ok_or_else(|| AppError::NotFound("Cliente no encontrado".to_string()))
    }

    pub async fn crear(&self, request: CrearClienteRequest) -> Result<Cliente, AppError> {
        request.validate()?;

        self.repository
            .crear(NuevoCliente {
                nombre: request.nombre,
                apellido_paterno: request.apellido_paterno,
                apellido_materno: request.apellido_materno,
                correo: request.correo,
                telefono: request.telefono,
                curp: request.curp,
                clave_elector: request.clave_elector,
                doc_identificacion: request.doc_identificacion,
                doc_curp: request.doc_curp,
            })
            .await
    }

    pub async fn actualizar(
        &self,
        curp: &str,
        request: ActualizarClienteRequest,
    ) -> Result<Cliente, AppError> {
        request.validate()?;
        if request.esta_vacio() {
            return Err(AppError::BadRequest(
                "No se proporcionó ningún campo para actualizar".to_string(),
            ));
        }

        self.repository
            .actualizar_por_curp(
                curp,
                ParcheCliente {
                    nombre: request.nombre,
                    apellido_paterno: request.apellido_paterno,
                    apellido_materno: request.apellido_materno,
                    correo: request.correo,
                    telefono: request.telefono,
                    clave_elector: request.clave_elector,
                    doc_identificacion: request.doc_identificacion,
                    doc_curp: request.doc_curp,
                },
            )
            .await
    }

    pub async fn eliminar(&self, curp: &str) -> Result<Cliente, AppError> {
        self.repository.eliminar_por_curp(curp).await
    }
}
