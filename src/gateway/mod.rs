// Fetch gateway: cache + in-flight de-duplication over the REST API
pub mod cache;
pub mod client;
pub mod inflight;
pub mod options;
pub mod transport;

pub use cache::{CacheEntry, CacheStore};
pub use client::{Gateway, ABORTED_MESSAGE};
pub use inflight::{InFlightRegistry, SharedResponse};
pub use options::RequestOptions;
pub use transport::{OutboundRequest, RawResponse, ReqwestTransport, Transport};
