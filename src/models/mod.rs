pub mod alert;
pub mod analytics;
pub mod dashboard;
pub mod feedback;
pub mod health;
pub mod ingestion;
pub mod model_stats;
pub mod scoring;
pub mod transaction;

pub use alert::*;
pub use analytics::*;
pub use dashboard::*;
pub use feedback::*;
pub use health::*;
pub use ingestion::*;
pub use model_stats::*;
pub use scoring::*;
pub use transaction::*;
