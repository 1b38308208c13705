use axum::{
    body::Body,
    http::{Request, StatusCode},
    routing::{get, post},
    Json, Router,
};
use serde_json::{json, Value};
use tower::ServiceExt;

#[tokio::test]
async fn test_endpoint_de_prueba() {
    let app = create_test_app();
    let response = app
        .oneshot(Request::builder().uri("/test").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let json: Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(json["status"], "ok");
}

#[tokio::test]
async fn test_crear_contrato_responde_201() {
    let app = create_test_app();
    let response = app
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/api/contratos")
                .header("content-type", "application/json")
                .body(Body::from(
                    json!({
                        "id_lote": 7,
                        "correo_cliente": "a@b.com",
                        "nombre": "Ana",
                        "apellido_paterno": "Lopez",
                        "precio_total": "120000.00",
                        "enganche": "20000.00",
                        "plazo_meses": 10
                    })
                    .to_string(),
                ))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::CREATED);

    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let json: Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(json["mensualidad"], "10000.00");
    assert_eq!(json["pagos"].as_array().unwrap().len(), 10);
}

#[tokio::test]
async fn test_ruta_desconocida_responde_404() {
    let app = create_test_app();
    let response = app
        .oneshot(
            Request::builder()
                .uri("/api/inexistente")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_metodo_incorrecto_responde_405() {
    let app = create_test_app();
    let response = app
        .oneshot(
            Request::builder()
                .method("DELETE")
                .uri("/api/contratos")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);
}

// App de test con las mismas rutas y formas de respuesta que el servidor;
// los handlers son stubs sin base de datos
fn create_test_app() -> Router {
    Router::new()
        .route(
            "/test",
            get(|| async { Json(json!({ "status": "ok" })) }),
        )
        .route(
            "/api/contratos",
            post(|| async {
                let pagos: Vec<Value> = (1..=10)
                    .map(|numero| {
                        json!({
                            "numero_pago": numero,
                            "monto": "10000.00",
                            "estado_pago": "pendiente"
                        })
                    })
                    .collect();
                (
                    StatusCode::CREATED,
                    Json(json!({
                        "contrato": { "id_contrato": 1, "id_lote": 7 },
                        "mensualidad": "10000.00",
                        "pagos": pagos
                    })),
                )
            }),
        )
}
