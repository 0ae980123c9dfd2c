use crate::category::{ErrorCategory, Layer};
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PipelineError {
    #[error("Error occurred in configuration class: {error_msg}")]
    Config { error_msg: String },

    #[error(
        "Database '{db_name}' has not been created. Please ensure the database is created \
         before attempting to create tables in this layer."
    )]
    DatabaseCreation { db_name: String },

    #[error("Error while running bronze setup: {msg}")]
    BronzeSetup { msg: String },

    #[error("Error ingesting data to {db_name}.{table_name}: {msg}")]
    Ingestion {
        msg: String,
        db_name: String,
        table_name: String,
    },

    #[error(
        "The silver schema list should contain exactly five schemas in the following order: \
         books, customers, orders, customers_orders, books_sales. The provided list {} is incorrect.",
        render_list(.schema_list)
    )]
    SilverSchema { schema_list: Vec<String> },

    #[error("Error while running silver setup: {msg}")]
    SilverSetup { msg: String },

    #[error("Error in upsert function {func_name}: {msg}")]
    Upsert { msg: String, func_name: String },

    #[error("Error while running gold setup: {msg}")]
    GoldSetup { msg: String },
}

pub type PipelineResult<T> = std::result::Result<T, PipelineError>;

fn render_list(items: &[String]) -> String {
    format!("[{}]", items.join(", "))
}

impl PipelineError {
    pub fn config(error_msg: impl Into<String>) -> Self {
        Self::Config {
            error_msg: error_msg.into(),
        }
    }

    /// A table was about to be created in a database that does not exist yet.
    pub fn database_creation(db_name: impl Into<String>) -> Self {
        Self::DatabaseCreation {
            db_name: db_name.into(),
        }
    }

    pub fn bronze_setup(msg: impl Into<String>) -> Self {
        Self::BronzeSetup { msg: msg.into() }
    }

    /// Failure while writing records into `db_name.table_name`.
    pub fn ingestion(
        msg: impl Into<String>,
        db_name: impl Into<String>,
        table_name: impl Into<String>,
    ) -> Self {
        Self::Ingestion {
            msg: msg.into(),
            db_name: db_name.into(),
            table_name: table_name.into(),
        }
    }

    /// Builds the signal from whatever list was supplied. No checking happens
    /// here; see [`crate::validate_silver_schemas`] for that.
    pub fn silver_schema<I, S>(schema_list: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::SilverSchema {
            schema_list: schema_list.into_iter().map(Into::into).collect(),
        }
    }

    pub fn silver_setup(msg: impl Into<String>) -> Self {
        Self::SilverSetup { msg: msg.into() }
    }

    pub fn upsert(msg: impl Into<String>, func_name: impl Into<String>) -> Self {
        Self::Upsert {
            msg: msg.into(),
            func_name: func_name.into(),
        }
    }

    pub fn gold_setup(msg: impl Into<String>) -> Self {
        Self::GoldSetup { msg: msg.into() }
    }

    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::Config { .. } => ErrorCategory::Configuration,
            Self::DatabaseCreation { .. } => ErrorCategory::MissingPrerequisite,
            Self::BronzeSetup { .. } => ErrorCategory::LayerSetup(Layer::Bronze),
            Self::SilverSetup { .. } => ErrorCategory::LayerSetup(Layer::Silver),
            Self::GoldSetup { .. } => ErrorCategory::LayerSetup(Layer::Gold),
            Self::Ingestion { .. } => ErrorCategory::Ingestion,
            Self::Upsert { .. } => ErrorCategory::Upsert,
            Self::SilverSchema { .. } => ErrorCategory::SchemaShape,
        }
    }

    /// The layer whose setup failed, if this is a setup failure.
    pub fn layer(&self) -> Option<Layer> {
        match self.category() {
            ErrorCategory::LayerSetup(layer) => Some(layer),
            _ => None,
        }
    }
}
