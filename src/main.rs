mod cache;
mod config;
mod controllers;
mod dto;
mod middleware;
mod models;
mod repositories;
mod routes;
mod services;
mod state;
mod utils;

use anyhow::Result;
use axum::{routing::get, Router};
use axum::response::Json;
use dotenvy::dotenv;
use serde_json::json;
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::signal;
use tracing::{error, info};

use cache::{AlmacenMemoria, AlmacenRedis, AlmacenTemporal};
use config::database::DatabaseConfig;
use config::EnvironmentConfig;
use middleware::cors::cors_middleware;
use services::notificador::NotificadorBitacora;
use state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Cargar variables de entorno
    dotenv().ok();

    // Configurar logging
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .init();

    info!("🏠 Inmobiliaria Backend - Ventas de lotes con pagos mensuales");
    info!("=============================================================");

    // Inicializar base de datos
    let db_config = DatabaseConfig::default();
    let pool = match db_config.create_pool().await {
        Ok(pool) => pool,
        Err(e) => {
            error!("❌ Error conectando a la base de datos: {}", e);
            return Err(anyhow::anyhow!("Error de base de datos: {}", e));
        }
    };

    // Migraciones embebidas
    sqlx::migrate!("./migrations").run(&pool).await?;
    info!("✅ Migraciones aplicadas");

    let env_config = EnvironmentConfig::default();

    // Almacén temporal: Redis si está configurado, memoria si no
    let almacen: Arc<dyn AlmacenTemporal> = match &env_config.redis_url {
        Some(url) => Arc::new(AlmacenRedis::new(url).await?),
        None => {
            info!("ℹ️ REDIS_URL no configurado, usando almacén en memoria");
            Arc::new(AlmacenMemoria::new())
        }
    };

    let app_state = AppState::new(
        pool,
        env_config.clone(),
        almacen,
        Arc::new(NotificadorBitacora),
    );

    // Usuarios requiere sesión; el resto de los routers queda abierto
    let usuarios_protegidos = routes::usuario_routes::create_usuario_router().layer(
        axum::middleware::from_fn_with_state(
            app_state.clone(),
            middleware::auth::requerir_autenticacion,
        ),
    );

    let app = Router::new()
        .route("/test", get(test_endpoint))
        .nest("/api/contratos", routes::contrato_routes::create_contrato_router())
        .nest("/api/clientes", routes::cliente_routes::create_cliente_router())
        .nest("/api/lotes", routes::lote_routes::create_lote_router())
        .nest("/api/pagos", routes::pago_routes::create_pago_router())
        .nest("/api/ubicaciones", routes::ubicacion_routes::create_ubicacion_router())
        .nest("/api/usuarios", usuarios_protegidos)
        .nest("/api/auth", routes::auth_routes::create_auth_router())
        .layer(cors_middleware())
        .with_state(app_state);

    let addr: SocketAddr = format!("{}:{}", env_config.host, env_config.port).parse()?;

    info!("🌐 Servidor iniciando en http://{}", addr);
    info!("🔍 Endpoints disponibles:");
    info!("   GET  /test - Endpoint de prueba");
    info!("📄 Endpoints - Contratos:");
    info!("   POST /api/contratos - Crear contrato con calendario de pagos");
    info!("   GET  /api/contratos - Listar contratos");
    info!("👥 Endpoints - Clientes:");
    info!("   GET  /api/clientes - Listar clientes");
    info!("   POST /api/clientes - Crear cliente");
    info!("   GET  /api/clientes/:curp - Obtener cliente");
    info!("   PUT  /api/clientes/:curp - Actualizar cliente");
    info!("   DELETE /api/clientes/:curp - Eliminar cliente");
    info!("🗺️ Endpoints - Lotes:");
    info!("   GET  /api/lotes - Listar lotes");
    info!("   POST /api/lotes - Crear lote");
    info!("   GET  /api/lotes/:id - Obtener lote");
    info!("   PUT  /api/lotes/:id - Actualizar lote");
    info!("   DELETE /api/lotes/:id - Eliminar lote");
    info!("💰 Endpoints - Pagos:");
    info!("   GET  /api/pagos/resumen - Resumen por contrato");
    info!("   GET  /api/pagos/detalle/:id - Pagos de un contrato");
    info!("   POST /api/pagos/registrar - Registrar pago");
    info!("📍 Endpoints - Ubicaciones:");
    info!("   GET  /api/ubicaciones/estados - Estados");
    info!("   GET  /api/ubicaciones/ciudades/:estado_id - Ciudades");
    info!("   GET  /api/ubicaciones/colonias/:ciudad_id - Colonias");
    info!("🔐 Endpoints - Autenticación:");
    info!("   POST /api/auth/login - Login (envía OTP)");
    info!("   POST /api/auth/verificar-otp - Verificar OTP");
    info!("   POST /api/auth/recuperar - Enviar enlace de recuperación");
    info!("   POST /api/auth/restablecer/:token - Restablecer contraseña");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| {
            error!("❌ Error del servidor: {}", e);
            anyhow::anyhow!(e)
        })?;

    info!("👋 Servidor terminado");
    Ok(())
}

/// Endpoint de prueba simple
async fn test_endpoint() -> Json<serde_json::Value> {
    Json(json!({
        "message": "Backend inmobiliaria funcionando correctamente",
        "status": "ok",
        "timestamp": chrono::Utc::now().to_rfc3339(),
    }))
}

/// Señal de apagado graceful
async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            info!("🛑 Señal Ctrl+C recibida, apagando servidor...");
        },
        _ = terminate => {
            info!("🛑 Señal de terminación recibida, apagando servidor...");
        },
    }
}
