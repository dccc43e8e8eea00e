mod common;

use actix_web::{test, App};
use certwatch::api::api::api_service_routes;
use certwatch::api::structs::api_service_data::ApiServiceData;
use certwatch::config::structs::configuration::Configuration;
use certwatch::ssl::structs::certificate_manager::CertificateManager;
use serde_json::Value;
use std::sync::Arc;
use std::time::Duration;

fn service_data(manager: Option<Arc<CertificateManager>>) -> Arc<ApiServiceData> {
    Arc::new(ApiServiceData {
        certificate_manager: manager,
        config: Arc::new(Configuration::init()),
    })
}

#[actix_web::test]
async fn test_api_certificate_status() {
    let material = common::create_material();
    let manager = Arc::new(CertificateManager::new(material.paths.clone(), Duration::from_millis(300)).unwrap());

    let app = test::init_service(App::new().configure(api_service_routes(service_data(Some(manager.clone()))))).await;
    let req = test::TestRequest::get().uri("/api/certificate/status").to_request();
    let resp = test::call_service(&app, req).await;
    assert!(resp.status().is_success());

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["status"], "ok");
    assert_eq!(body["generation"], 1);
    assert_eq!(body["trust_anchors"], 1);
    assert_eq!(body["debounce_ms"], 300);
    assert_eq!(body["watcher"], "idle");
    assert_eq!(body["cert_path"], material.paths.cert_path.display().to_string());

    manager.close().await;
}

#[actix_web::test]
async fn test_api_certificate_reload() {
    let material = common::create_material();
    let manager = Arc::new(CertificateManager::new(material.paths.clone(), Duration::from_secs(60)).unwrap());

    let app = test::init_service(App::new().configure(api_service_routes(service_data(Some(manager.clone()))))).await;
    let req = test::TestRequest::post().uri("/api/certificate/reload").to_request();
    let resp = test::call_service(&app, req).await;
    assert!(resp.status().is_success());

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["status"], "ok");
    assert_eq!(body["generation"], 2);
    assert_eq!(manager.snapshot().generation, 2);

    manager.close().await;
}

#[actix_web::test]
async fn test_api_certificate_reload_failure_keeps_credentials() {
    let material = common::create_material();
    let manager = Arc::new(CertificateManager::new(material.paths.clone(), Duration::from_secs(60)).unwrap());
    std::fs::write(&material.paths.key_path, "not a key").unwrap();

    let app = test::init_service(App::new().configure(api_service_routes(service_data(Some(manager.clone()))))).await;
    let req = test::TestRequest::post().uri("/api/certificate/reload").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status().as_u16(), 500);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["status"], "failed");
    assert!(body["error"].as_str().unwrap().contains("server.key"));
    assert_eq!(manager.snapshot().generation, 1);

    manager.close().await;
}

#[actix_web::test]
async fn test_api_certificate_disabled() {
    let app = test::init_service(App::new().configure(api_service_routes(service_data(None)))).await;

    let req = test::TestRequest::get().uri("/api/certificate/status").to_request();
    let resp = test::call_service(&app, req).await;
    assert!(resp.status().is_success());
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["status"], "disabled");

    let req = test::TestRequest::post().uri("/api/certificate/reload").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status().as_u16(), 404);
}

#[actix_web::test]
async fn test_api_not_found() {
    let app = test::init_service(App::new().configure(api_service_routes(service_data(None)))).await;
    let req = test::TestRequest::get().uri("/api/unknown").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status().as_u16(), 404);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["status"], "not found");
}

#[actix_web::test]
async fn test_api_reload_requires_post() {
    let app = test::init_service(App::new().configure(api_service_routes(service_data(None)))).await;
    let req = test::TestRequest::get().uri("/api/certificate/reload").to_request();
    let resp = test::call_service(&app, req).await;
    assert!(!resp.status().is_success());
}
