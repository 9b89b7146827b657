use log::{info, warn};

use axum::{
    http::{header, Method},
    Router,
};
use std::env;
use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use tower::ServiceBuilder;
use tower_http::cors::{Any, CorsLayer};

use crate::graph::city::{city_network, DEPOT};
use crate::web::api::{create_router, AppState};

/// Configuration for the web server
#[derive(Debug, Clone, PartialEq)]
pub struct ServerConfig {
    pub host: IpAddr,
    pub port: u16,
    pub enable_cors: bool,
    pub max_stored_routes: usize,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: IpAddr::V4(Ipv4Addr::LOCALHOST),
            port: 3005,
            enable_cors: true,
            max_stored_routes: 1000,
        }
    }
}

impl ServerConfig {
    /// Defaults overlaid with `DELIVERY_HOST`, `DELIVERY_PORT`, `DELIVERY_CORS`
    /// and `DELIVERY_MAX_ROUTES`. Unparsable values keep the default.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Same as [`ServerConfig::from_env`] with a custom variable source
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(host) = parse_var(&lookup, "DELIVERY_HOST") {
            config.host = host;
        }
        if let Some(port) = parse_var(&lookup, "DELIVERY_PORT") {
            config.port = port;
        }
        if let Some(enable_cors) = parse_var(&lookup, "DELIVERY_CORS") {
            config.enable_cors = enable_cors;
        }
        if let Some(max_stored_routes) = parse_var(&lookup, "DELIVERY_MAX_ROUTES") {
            config.max_stored_routes = max_stored_routes;
        }

        config
    }

    pub fn addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

fn parse_var<F, T>(lookup: &F, key: &str) -> Option<T>
where
    F: Fn(&str) -> Option<String>,
    T: std::str::FromStr,
{
    let raw = lookup(key)?;
    match raw.trim().parse() {
        Ok(value) => Some(value),
        Err(_) => {
            warn!("ignoring invalid {}={:?}", key, raw);
            None
        }
    }
}

/// Build the application over the city network
pub fn build_app(config: &ServerConfig) -> Result<Router, Box<dyn std::error::Error>> {
    let network = city_network()?;
    let app_state = AppState::new(network, DEPOT, config.max_stored_routes)?;

    let mut app = Router::new().merge(create_router()).with_state(app_state);

    if config.enable_cors {
        // Create CORS layer
        let cors = CorsLayer::new()
            .allow_origin(Any)
            .allow_methods([Method::GET, Method::POST])
            .allow_headers([header::CONTENT_TYPE, header::AUTHORIZATION]);

        app = app.layer(ServiceBuilder::new().layer(cors).into_inner());
    }

    Ok(app)
}

/// Start the web server with custom configuration
pub async fn start_server(config: ServerConfig) -> Result<(), Box<dyn std::error::Error>> {
    let app = build_app(&config)?;

    let addr = config.addr();
    info!("delivery routing server listening on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
