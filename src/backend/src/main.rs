mod api;
mod config;

use crate::{api::Api, config::AppConfig};
use actix_web::{App, HttpServer};
use anyhow::{Context, Result};
use env_logger::{Builder, Env, Target};
use log::{debug, error, info, warn};
use std::io::Write;
use tokio::signal::unix::{SignalKind, signal};

#[actix_web::main]
async fn main() {
    if let Err(e) = run().await {
        error!("application error: {e:#}");
        std::process::exit(1);
    }
}

async fn run() -> Result<()> {
    initialize()?;

    let config = AppConfig::get();
    let api = Api::new(config.site.clone());

    match api.validate_catalog().await {
        Ok(0) => warn!("catalog has no events, pages will show the unavailable message"),
        Ok(count) => info!("catalog has {count} events"),
        Err(e) => warn!("catalog is not usable: {e:#}"),
    }

    let mut sigterm =
        signal(SignalKind::terminate()).context("failed to install SIGTERM handler")?;

    let address = format!("{}:{}", config.ui.bind_address, config.ui.port);
    info!("serving {} on {address}", config.site.site_dir.display());

    let server = HttpServer::new(move || {
        let api = api.clone();
        App::new().configure(move |cfg| api.configure(cfg))
    })
    .bind(&address)
    .with_context(|| format!("failed to bind server to {address}"))?
    .disable_signals()
    .run();

    let server_handle = server.handle();
    let server_task = tokio::spawn(server);

    tokio::select! {
        _ = tokio::signal::ctrl_c() => debug!("ctrl-c received"),
        _ = sigterm.recv() => debug!("SIGTERM received"),
        result = server_task => match result {
            Ok(Ok(())) => debug!("server stopped normally"),
            Ok(Err(e)) => error!("server stopped with error: {e}"),
            Err(e) => error!("server task panicked: {e}"),
        },
    }

    info!("shutting down");
    server_handle.stop(true).await;
    info!("shutdown complete");

    Ok(())
}

fn initialize() -> Result<()> {
    log_panics::init();

    let mut builder = if cfg!(debug_assertions) {
        Builder::from_env(Env::default().default_filter_or("debug"))
    } else {
        Builder::from_env(Env::default().default_filter_or("info"))
    };

    builder.format(|f, record| match record.level() {
        log::Level::Error => {
            eprintln!("{}", record.args());
            Ok(())
        }
        _ => {
            writeln!(f, "{}", record.args())
        }
    });

    builder.target(Target::Stdout).init();

    info!("module version: {}", env!("CARGO_PKG_VERSION"));

    Ok(())
}
