use std::net::SocketAddr;
use std::path::Path;
use std::process::exit;
use std::sync::Arc;
use std::time::Duration;
use clap::Parser;
use log::{error, info};
use parking_lot::deadlock;
use sentry::ClientInitGuard;
use tokio::runtime::Builder;
use certwatch::api::api::api_service;
use certwatch::api::structs::api_service_data::ApiServiceData;
use certwatch::common::common::setup_logging;
use certwatch::config::structs::configuration::Configuration;
use certwatch::ssl::ssl::{create_selfsigned, create_server_config};
use certwatch::ssl::structs::certificate_manager::CertificateManager;
use certwatch::structs::Cli;

#[tracing::instrument(level = "debug")]
fn main() -> std::io::Result<()>
{
    let args = Cli::parse();

    let config = match Configuration::load_from_file(&args.config, args.create_config) {
        Ok(config) => Arc::new(config),
        Err(_) => exit(101)
    };

    setup_logging(&config);

    info!("{} - Version: {}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"));

    #[warn(unused_variables)]
    let _sentry_guard: ClientInitGuard;
    if config.sentry_config.enabled {
        _sentry_guard = sentry::init((config.sentry_config.dsn.clone(), sentry::ClientOptions {
            release: sentry::release_name!(),
            debug: config.sentry_config.debug,
            sample_rate: config.sentry_config.sample_rate,
            max_breadcrumbs: config.sentry_config.max_breadcrumbs,
            attach_stacktrace: config.sentry_config.attach_stacktrace,
            send_default_pii: config.sentry_config.send_default_pii,
            traces_sample_rate: config.sentry_config.traces_sample_rate,
            session_mode: sentry::SessionMode::Request,
            auto_session_tracking: true,
            ..Default::default()
        }));
    }

    if args.create_selfsigned {
        if let Err(error) = create_selfsigned(Path::new(&args.selfsigned_dir), &args.selfsigned_domain, &args.selfsigned_client_cn) {
            error!("[CERTGEN] {}", error);
            exit(1);
        }
        return Ok(());
    }

    let address: SocketAddr = match config.server.bind_address.parse() {
        Ok(address) => address,
        Err(error) => {
            error!("[BOOT] Invalid bind address {}: {}", config.server.bind_address, error);
            exit(1);
        }
    };

    Builder::new_multi_thread()
        .enable_all()
        .build()?
        .block_on(async {
            let (certificate_manager, tls_config) = if config.tls.enabled {
                let manager = match CertificateManager::new(config.tls.certificate_paths(), config.tls.debounce()) {
                    Ok(manager) => Arc::new(manager),
                    Err(error) => {
                        error!("[CERTIFICATE] {}", error);
                        exit(1);
                    }
                };
                let tls_config = match create_server_config(&manager, config.tls.allowed_cns.clone()) {
                    Ok(tls_config) => tls_config,
                    Err(error) => {
                        error!("[CERTIFICATE] Unable to build the TLS configuration: {}", error);
                        exit(1);
                    }
                };
                (Some(manager), Some(tls_config))
            } else {
                info!("[BOOT] Mutual TLS is disabled, serving plain HTTP");
                (None, None)
            };

            let service_data = Arc::new(ApiServiceData {
                certificate_manager: certificate_manager.clone(),
                config: config.clone(),
            });
            let (handle, server) = api_service(address, service_data, tls_config)?;
            let server_task = tokio::spawn(server);

            let (shutdown_tx, mut shutdown_rx) = tokio::sync::watch::channel(false);
            let deadlocks_task = tokio::spawn(async move {
                info!("[BOOT] Starting thread for deadlocks...");
                let mut interval = tokio::time::interval(Duration::from_secs(30));
                loop {
                    tokio::select! {
                        _ = interval.tick() => {
                            let deadlocks = deadlock::check_deadlock();
                            if !deadlocks.is_empty() {
                                info!("[DEADLOCK] Found {} deadlocks", deadlocks.len());
                                for (i, threads) in deadlocks.iter().enumerate() {
                                    info!("[DEADLOCK] #{i}");
                                    for t in threads {
                                        info!("[DEADLOCK] Thread ID: {:#?}", t.thread_id());
                                        info!("[DEADLOCK] {:#?}", t.backtrace());
                                        sentry::capture_message(&format!("{:#?}", t.backtrace()), sentry::Level::Error);
                                    }
                                }
                            }
                        }
                        _ = shutdown_rx.changed() => {
                            info!("[BOOT] Shutting down thread for deadlocks...");
                            return;
                        }
                    }
                }
            });

            tokio::select! {
                _ = tokio::signal::ctrl_c() => {
                    info!("Shutdown request received, shutting down...");
                    handle.stop(true).await;
                }
                result = server_task => {
                    match result {
                        Ok(Ok(())) => info!("[API] Server stopped"),
                        Ok(Err(error)) => error!("[API] Server stopped with an error: {}", error),
                        Err(error) => error!("[API] Server task failed: {}", error),
                    }
                }
            }

            let _ = shutdown_tx.send(true);
            let _ = deadlocks_task.await;

            if let Some(manager) = certificate_manager {
                manager.close().await;
            }

            info!("Server shutting down completed");
            Ok::<(), std::io::Error>(())
        })
}
