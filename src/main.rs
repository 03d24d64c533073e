use std::path::PathBuf;

use actix_files::Files;
use actix_web::{middleware, web, App, HttpServer};
use clap::Parser;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use repogate::handlers::{scope_for, RouteState};
use repogate::services::provider;
use repogate::Config;

/// Read-only web gateway for git-hosting providers
#[derive(Parser)]
#[command(name = "repogate", version)]
struct Args {
    /// Path to the YAML configuration file
    config: PathBuf,
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "repogate=debug,actix_web=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let args = Args::parse();
    let config = Config::load(&args.config).expect("failed to load configuration");

    // Route table and provider clients are built once, before the server
    // accepts connections, and never mutated afterwards.
    let mut states = Vec::new();
    for route in &config.routes {
        let client =
            provider::build(route, &config.client).expect("failed to build provider client");
        info!(prefix = %route.scope_path(), protocol = ?route.protocol, "registering route");
        states.push(web::Data::new(RouteState {
            site_name: config.site.name.clone(),
            route: route.clone(),
            provider: client,
        }));
    }

    info!("starting {} on {}", config.site.name, config.app.addr);

    let static_dir = config.site.static_dir.clone();
    HttpServer::new(move || {
        let mut app = App::new()
            .wrap(middleware::Logger::default())
            .wrap(middleware::Compress::default());
        for state in &states {
            app = app.service(scope_for(state.clone()));
        }
        // Mounted last: anything outside the configured prefixes is served
        // from the site's static assets.
        app.service(Files::new("/", &static_dir).index_file("index.html"))
    })
    .bind(&config.app.addr)?
    .run()
    .await
}
