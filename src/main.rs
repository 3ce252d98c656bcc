use actix_web::{middleware, web, App, HttpServer};
use anyhow::Context;
use clap::Parser;

mod api;
mod cli;
mod config;
mod models;
mod services;
mod state;
mod tls;

use api::{cors_headers, service_status};
use cli::CommandArgs;
use config::AgentConfig;
use state::{new_state, AppState};

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = CommandArgs::parse();

    let mut config = AgentConfig::load(&args.config)?;
    if let Some(port) = args.port {
        config.agent_port = port;
    }
    if let Some(address) = args.address.clone() {
        config.bind_address = address;
    }

    let bind_address = format!("{}:{}", config.bind_address, config.agent_port);
    let state = new_state(&config);

    for service in state.registry().services() {
        log::info!(
            "Registered {} -> unit '{}'{}",
            service.primary_route(),
            service.supervisor_unit,
            service
                .stats_url
                .as_deref()
                .map(|url| format!(", stats from {}", url))
                .unwrap_or_default()
        );
    }

    print_banner(&config, &state);

    let server = HttpServer::new(move || {
        App::new()
            .wrap(middleware::Logger::default())
            .wrap(cors_headers())
            .app_data(web::Data::new(state.clone()))
            .default_service(web::to(service_status))
    });

    let server = match config.tls_paths() {
        Some((cert, key)) => {
            let tls_config = tls::load_server_config(cert, key)?;
            log::info!("TLS enabled with certificate {}", cert.display());
            server.bind_rustls_0_23(&bind_address, tls_config)
        }
        None => server.bind(&bind_address),
    }
    .with_context(|| format!("could not start the agent on {}", bind_address))?;

    server.run().await.context("agent server failed")
}

fn print_banner(config: &AgentConfig, state: &AppState) {
    println!("╔═══════════════════════════════════════════════════════════╗");
    println!("║      Jilo Agent v{:<41}║", env!("CARGO_PKG_VERSION"));
    println!("║      Jitsi Meet service status over HTTP                  ║");
    println!("╚═══════════════════════════════════════════════════════════╝");
    println!();
    let scheme = if config.tls_paths().is_some() { "https" } else { "http" };
    println!("🚀 Agent starting on {}://{}:{}", scheme, config.bind_address, config.agent_port);
    println!();
    println!("📋 Available endpoints (any method, also under /{}/):", config.script_name);
    for service in state.registry().services() {
        println!("  {:<12} - {} status", service.primary_route(), service.name);
    }
    println!("  /status      - Agent status");
    println!("═══════════════════════════════════════════════════════════");
}
