//! Failure signals raised by the bronze, silver and gold pipeline stages.
//!
//! Every variant of [`PipelineError`] carries the values that identify the
//! failure and renders a ready-to-log message through `Display`. Callers
//! branch on the variant (or on [`PipelineError::category`]) to decide
//! whether to abort, retry or report.
//!
//! ```
//! use kafkabricks_errors::{ErrorCategory, PipelineError};
//!
//! let err = PipelineError::ingestion("bad format", "bronze", "customer_data");
//! assert_eq!(err.category(), ErrorCategory::Ingestion);
//! assert!(err.to_string().contains("bronze.customer_data"));
//! ```

pub mod category;
pub mod error;
pub mod silver;

pub use category::{ErrorCategory, Layer};
pub use error::{PipelineError, PipelineResult};
pub use silver::{EXPECTED_SILVER_SCHEMAS, validate_silver_schemas};
