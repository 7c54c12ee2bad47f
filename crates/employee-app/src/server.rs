//! Server wiring
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────┐
//! │  run() - Dependency Injection & Wiring                          │
//! │    │                                                            │
//! │    ├── Creates: repository chosen by StoreConfig (adapter)      │
//! │    ├── Creates: EmployeeService (use case)                      │
//! │    ├── Creates: employee_router + trace/CORS layers (adapter)   │
//! │    └── Serves:  until Ctrl-C                                    │
//! └─────────────────────────────────────────────────────────────────┘
//! ```

use std::future::Future;
use std::sync::Arc;

use axum::http::{header, HeaderValue, Method};
use axum::Router;
use employee_adapter::controller::http::{employee_router, EMPLOYEE_ROUTES};
use employee_adapter::repository::{InMemoryEmployeeRepository, JsonFileEmployeeRepository};
use employee_domain::EmployeeRepository;
use employee_usecase::EmployeeService;
use tokio::net::TcpListener;
use tower_http::cors::{AllowOrigin, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::{info, warn};

use crate::config::{ConfigError, ServerConfig, StoreConfig};

/// Build the full application router over `repository`.
pub fn build_app<R>(repository: R, config: &ServerConfig) -> Result<Router, ConfigError>
where
    R: EmployeeRepository + 'static,
{
    let service = Arc::new(EmployeeService::new(repository));
    let mut app = employee_router(service).layer(TraceLayer::new_for_http());

    if let Some(cors) = cors_layer(&config.cors_origins)? {
        app = app.layer(cors);
    }

    Ok(app)
}

fn cors_layer(origins: &[String]) -> Result<Option<CorsLayer>, ConfigError> {
    if origins.is_empty() {
        return Ok(None);
    }

    let allow_origin = if origins.iter().any(|o| o == "*") {
        AllowOrigin::any()
    } else {
        let values = origins
            .iter()
            .map(|o| {
                HeaderValue::from_str(o).map_err(|_| ConfigError::InvalidOrigin(o.clone()))
            })
            .collect::<Result<Vec<_>, _>>()?;
        AllowOrigin::list(values)
    };

    Ok(Some(
        CorsLayer::new()
            .allow_origin(allow_origin)
            .allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE])
            .allow_headers([header::CONTENT_TYPE]),
    ))
}

/// Start serving with the configured store until Ctrl-C.
pub async fn run(config: ServerConfig) -> anyhow::Result<()> {
    let app = match &config.store {
        StoreConfig::Memory => {
            info!("Using in-memory employee store");
            build_app(InMemoryEmployeeRepository::new(), &config)?
        }
        StoreConfig::File { path } => {
            let repository = JsonFileEmployeeRepository::open(path).await?;
            build_app(repository, &config)?
        }
    };

    for route in EMPLOYEE_ROUTES.iter() {
        info!(
            "   {:<6} {} -> {}",
            route.operation.method().as_str(),
            route.path,
            route.operation.name()
        );
    }

    let listener = TcpListener::bind(config.bind).await?;
    info!(addr = %listener.local_addr()?, "Employee API listening");

    serve(listener, app, shutdown_signal()).await?;
    Ok(())
}

/// Serve `app` on `listener` until `shutdown` resolves, then let in-flight
/// requests finish.
pub async fn serve<F>(listener: TcpListener, app: Router, shutdown: F) -> std::io::Result<()>
where
    F: Future<Output = ()> + Send + 'static,
{
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown)
        .await?;

    info!("Employee API stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!("Failed to listen for Ctrl-C: {e}");
        std::future::pending::<()>().await;
    }
    info!("Shutdown requested");
}
