pub mod alerts_service;
pub mod analytics_service;
pub mod dashboard_service;
pub mod feedback_service;
pub mod health_service;
pub mod ingestion_service;
pub mod models_service;
pub mod scoring_service;
pub mod transactions_service;

pub use alerts_service::*;
pub use analytics_service::*;
pub use dashboard_service::*;
pub use feedback_service::*;
pub use health_service::*;
pub use ingestion_service::*;
pub use models_service::*;
pub use scoring_service::*;
pub use transactions_service::*;
