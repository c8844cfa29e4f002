//! Mock REST API for the Worship Harvest church management front end.
//!
//! The crate is laid out hexagonally: [`domain`] holds the model and port
//! traits, [`outbound`] the in-memory adapters, [`inbound`] the Actix
//! handlers, and [`seed`] builds the dataset served at startup.

pub mod doc;
pub mod domain;
pub mod inbound;
pub mod middleware;
pub mod outbound;
pub mod seed;
pub mod settings;

/// Public OpenAPI surface used by Swagger UI and tooling.
pub use doc::ApiDoc;
pub use domain::TraceId;
pub use middleware::{Latency, Trace};
