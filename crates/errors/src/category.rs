use std::fmt;

/// Medallion layer of the pipeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Layer {
    Bronze,
    Silver,
    Gold,
}

impl Layer {
    pub fn as_str(&self) -> &'static str {
        match self {
            Layer::Bronze => "bronze",
            Layer::Silver => "silver",
            Layer::Gold => "gold",
        }
    }
}

impl fmt::Display for Layer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Coarse grouping of [`crate::PipelineError`] variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCategory {
    /// Invalid or incomplete configuration.
    Configuration,
    /// Something had to exist first, e.g. the database before its tables.
    MissingPrerequisite,
    LayerSetup(Layer),
    /// Scoped to a single database and table pair.
    Ingestion,
    Upsert,
    SchemaShape,
}
