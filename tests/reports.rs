mod common;

use std::sync::atomic::Ordering;

use axum::http::StatusCode;
use serde_json::{json, Value};
use tienda_backend::models::report::{ReportTable, ReportView};

use common::spawn_app;

fn ventas() -> ReportTable {
    ReportTable {
        columns: vec!["mes".to_string(), "total_ventas".to_string(), "pedidos".to_string()],
        rows: vec![
            vec![json!("2024-01-01"), json!("1520.40"), json!(12)],
            vec![json!("2024-02-01"), Value::Null, json!(0)],
        ],
    }
}

#[tokio::test]
async fn every_report_route_renders_its_view() {
    let app = spawn_app();
    for view in ReportView::ALL {
        app.reports.set(view, ventas());
    }
    app.signed_in("ana").await;

    for view in ReportView::ALL {
        let response = app.server.get(view.path()).await;
        response.assert_status_ok();
        let body: Value = response.json();
        assert_eq!(body["page"], "tabla_generica");
        assert_eq!(body["data"]["title"], view.title());
        assert_eq!(body["data"]["columns"], json!(["mes", "total_ventas", "pedidos"]));
        assert_eq!(body["data"]["rows"][0], json!(["2024-01-01", "1520.40", 12]));
        assert_eq!(body["data"]["rows"][1][1], Value::Null);
    }
}

#[tokio::test]
async fn empty_view_keeps_its_columns() {
    let app = spawn_app();
    app.reports.set(
        ReportView::InventarioActual,
        ReportTable {
            columns: vec!["producto".to_string(), "stock".to_string()],
            rows: vec![],
        },
    );
    app.signed_in("ana").await;

    let body: Value = app.server.get("/inventario_actual").await.json();
    assert_eq!(body["data"]["title"], "Inventario Actual");
    assert_eq!(body["data"]["columns"], json!(["producto", "stock"]));
    assert_eq!(body["data"]["rows"], json!([]));
}

#[tokio::test]
async fn query_failure_surfaces_without_details() {
    let app = spawn_app();
    app.signed_in("ana").await;

    let response = app.server.get("/clientes_pedidos").await;
    assert_eq!(response.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
    let body: Value = response.json();
    assert_eq!(body["error"], "Error de base de datos");
    assert!(!response.text().contains("vista_clientes_con_pedidos"));
}

#[tokio::test]
async fn connection_failure_is_service_unavailable() {
    let app = spawn_app();
    app.signed_in("ana").await;
    app.reports.unavailable.store(true, Ordering::SeqCst);

    let response = app.server.get("/ventas_resumen").await;
    assert_eq!(response.status_code(), StatusCode::SERVICE_UNAVAILABLE);
}
