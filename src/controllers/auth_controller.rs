use validator::Validate;

use crate::dto::auth_dto::{
    LoginRequest, RecuperarRequest, RestablecerRequest, VerificacionResponse,
    VerificarOtpRequest,
};
use crate::repositories::usuario_repository::UsuarioRepository;
use crate::services::auth_service::AuthService;
use crate::state::AppState;
use crate::utils::errors::AppError;

pub struct AuthController {
    service: AuthService,
}

impl AuthController {
    pub fn new(state: &AppState) -> Self {
        Self {
            service: AuthService::new(
                UsuarioRepository::new(state.pool.clone()),
                state.almacen.clone(),
                state.notificador.clone(),
                state.config.clone(),
            ),
        }
    }

    pub async fn login(&self, request: LoginRequest) -> Result<(), AppError> {
        request.validate()?;
        self.service.login(&request.correo, &request.password).await
    }

    pub async fn verificar_otp(
        &self,
        request: VerificarOtpRequest,
    ) -> Result<VerificacionResponse, AppError> {
        request.validate()?;
        self.service
            .verificar_otp(&request.correo, &request.otp)
            .await
    }

    pub async fn recuperar(&self, request: RecuperarRequest) -> Result<(), AppError> {
        request.validate()?;
        self.service.enviar_enlace_recuperacion(&request.correo).await
    }

    pub async fn restablecer(
        &self,
        token: &str,
        request: RestablecerRequest,
    ) -> Result<(), AppError> {
        request.validate()?;
        self.service.restablecer_password(token, &request.password).await
    }
}
