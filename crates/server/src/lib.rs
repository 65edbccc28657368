//! LostFound Server - HTTP REST API for lost-and-found reports
//!
//! This crate exposes the item store, location catalog, search and match
//! ranking over HTTP. It supports:
//!
//! - **Reports**: File lost/found items, look them up, change their status
//! - **Search**: Filter a collection by text, category, location and date range
//! - **Matching**: Ranked candidates for a stored item or an ad-hoc description
//! - **Catalog**: Building → floor → location walk for the reporting form
//! - **Assistant**: Keyword intent routing for the chat panel
//! - **Health & Metrics**: Liveness/readiness probes and Prometheus metrics
//!
//! # Features
//!
//! - **Middleware**: Compression, CORS, request ID tracking, structured logging
//! - **Configuration**: `.env`, optional `server.{toml,yaml}` and
//!   `LOSTFOUND_SERVER__*` environment variables
//! - **Error Handling**: JSON error bodies with stable error codes
//! - **Graceful Shutdown**: Proper signal handling for production deployments
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use server::ServerConfig;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = ServerConfig::load()?;
//!     server::start_server(config).await?;
//!     Ok(())
//! }
//! ```
//!
//! # API Endpoints
//!
//! - `GET /` - API information
//! - `GET /health` - Liveness probe
//! - `GET /ready` - Readiness probe
//! - `GET /metrics` - Prometheus metrics
//! - `GET /api/v1/categories` - Categories and suggested attributes
//! - `GET /api/v1/locations/buildings` - Buildings
//! - `GET /api/v1/locations/floors?building=` - Floors of a building
//! - `GET /api/v1/locations?building=&floor=` - Locations on a floor
//! - `POST /api/v1/items/{kind}` - File a report (`kind` = `lost` | `found`)
//! - `GET /api/v1/items/{kind}` - List or search (`q`, `category`, `building`,
//!   `floor`, `date_from`, `date_to`)
//! - `GET /api/v1/items/{kind}/{id}` - Get one report
//! - `PUT /api/v1/items/{kind}/{id}/status` - Change status
//! - `GET /api/v1/items/{kind}/{id}/matches?limit=` - Ranked matches
//! - `POST /api/v1/match` - Probe search
//! - `POST /api/v1/chat` - Chat intent routing

pub mod chat;
pub mod config;
pub mod error;
pub mod middleware;
pub mod routes;
pub mod server;
pub mod state;

pub use chat::{ChatIntent, IntentClassifier, KeywordClassifier};
pub use config::{CatalogConfig, ServerConfig};
pub use error::{ServerError, ServerResult};
pub use server::{build_router, start_server};
pub use state::ServerState;
