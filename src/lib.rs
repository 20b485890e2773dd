//! Client for the fraud-monitoring REST API.
//!
//! Every call goes through one [`gateway::Gateway`], which caches decoded
//! responses for a short TTL and collapses concurrent identical requests into a
//! single network call.

pub mod config;
pub mod gateway;
pub mod models;
pub mod services;
pub mod utils;

pub use config::Config;
pub use gateway::{Gateway, RequestOptions};
pub use utils::error::{GatewayError, GatewayResult};
