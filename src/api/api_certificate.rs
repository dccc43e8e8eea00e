use crate::api::structs::api_certificate::{
    CertificateReloadError,
    CertificateReloadResult,
    CertificateStatus
};
use crate::api::structs::api_service_data::ApiServiceData;
use actix_web::http::header::ContentType;
use actix_web::web::Data;
use actix_web::HttpResponse;
use log::{error, info};
use serde_json::json;
use std::sync::Arc;

#[tracing::instrument(level = "debug", skip_all)]
pub async fn api_service_certificate_status(data: Data<Arc<ApiServiceData>>) -> HttpResponse {
    let Some(manager) = &data.certificate_manager else {
        return HttpResponse::Ok().content_type(ContentType::json()).json(json!({
            "status": "disabled"
        }));
    };
    let snapshot = manager.snapshot();
    let paths = manager.paths();
    HttpResponse::Ok().content_type(ContentType::json()).json(CertificateStatus {
        status: String::from("ok"),
        generation: snapshot.generation,
        loaded_at: snapshot.loaded_at.to_rfc3339(),
        cert_path: paths.cert_path.display().to_string(),
        key_path: paths.key_path.display().to_string(),
        ca_path: paths.ca_path.display().to_string(),
        trust_anchors: snapshot.trust_pool.len(),
        debounce_ms: manager.debounce().as_millis() as u64,
        watcher: manager.watcher_state(),
    })
}

#[tracing::instrument(level = "debug", skip_all)]
pub async fn api_service_certificate_reload(data: Data<Arc<ApiServiceData>>) -> HttpResponse {
    let Some(manager) = &data.certificate_manager else {
        return HttpResponse::NotFound().content_type(ContentType::json()).json(json!({
            "status": "disabled"
        }));
    };
    match manager.reload() {
        Ok(snapshot) => {
            info!("[API] Certificates reloaded on request (generation {})", snapshot.generation);
            HttpResponse::Ok().content_type(ContentType::json()).json(CertificateReloadResult {
                status: String::from("ok"),
                generation: snapshot.generation,
                loaded_at: snapshot.loaded_at.to_rfc3339(),
            })
        }
        Err(e) => {
            error!("[API] Certificate reload failed, keeping current ones: {}", e);
            HttpResponse::InternalServerError().content_type(ContentType::json()).json(CertificateReloadError {
                status: String::from("failed"),
                error: e.to_string(),
            })
        }
    }
}
