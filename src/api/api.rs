use std::future::Future;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;
use actix_web::{App, HttpResponse, HttpServer, web};
use actix_web::dev::ServerHandle;
use actix_web::http::header::ContentType;
use actix_web::web::{Data, ServiceConfig};
use log::info;
use serde_json::json;
use crate::api::api_certificate::{api_service_certificate_reload, api_service_certificate_status};
use crate::api::structs::api_service_data::ApiServiceData;

pub fn api_service_routes(data: Arc<ApiServiceData>) -> Box<dyn Fn(&mut ServiceConfig)>
{
    Box::new(move |cfg: &mut ServiceConfig| {
        cfg.app_data(Data::new(data.clone()));
        cfg.default_service(web::route().to(api_service_not_found));
        cfg.service(web::resource("api/certificate/status").route(web::get().to(api_service_certificate_status)));
        cfg.service(web::resource("api/certificate/reload").route(web::post().to(api_service_certificate_reload)));
    })
}

/// Binds the API listener. With `tls_config` the listener requires client
/// certificates as configured there, otherwise it serves plain HTTP.
pub fn api_service(
    addr: SocketAddr,
    data: Arc<ApiServiceData>,
    tls_config: Option<rustls::ServerConfig>
) -> Result<(ServerHandle, impl Future<Output=Result<(), std::io::Error>>), std::io::Error>
{
    let server_config = data.config.server.clone();
    let keep_alive = server_config.keep_alive.unwrap_or(60);
    let request_timeout = server_config.request_timeout.unwrap_or(15);
    let disconnect_timeout = server_config.disconnect_timeout.unwrap_or(15);
    let threads = server_config.threads.unwrap_or(1).max(1);

    let server = HttpServer::new(move || {
        App::new()
            .configure(api_service_routes(data.clone()))
    })
        .keep_alive(Duration::from_secs(keep_alive))
        .client_request_timeout(Duration::from_secs(request_timeout))
        .client_disconnect_timeout(Duration::from_secs(disconnect_timeout))
        .workers(threads as usize);

    let server = match tls_config {
        Some(tls_config) => {
            info!("[API] Starting server listener with mutual TLS on {}", addr);
            server.bind_rustls_0_23((addr.ip(), addr.port()), tls_config)?
        }
        None => {
            info!("[API] Starting server listener on {}", addr);
            server.bind((addr.ip(), addr.port()))?
        }
    };
    let server = server.disable_signals().run();

    Ok((server.handle(), server))
}

pub async fn api_service_not_found() -> HttpResponse
{
    HttpResponse::NotFound().content_type(ContentType::json()).json(json!({
        "status": "not found"
    }))
}
