use crate::error::{PipelineError, PipelineResult};

/// Silver schemas in the order setup creates them.
pub const EXPECTED_SILVER_SCHEMAS: [&str; 5] =
    ["books", "customers", "orders", "customers_orders", "books_sales"];

/// Checks that `schemas` names exactly the expected silver schemas, in order.
pub fn validate_silver_schemas<S: AsRef<str>>(schemas: &[S]) -> PipelineResult<()> {
    let matches = schemas.len() == EXPECTED_SILVER_SCHEMAS.len()
        && schemas
            .iter()
            .zip(EXPECTED_SILVER_SCHEMAS)
            .all(|(given, expected)| given.as_ref() == expected);

    if matches {
        Ok(())
    } else {
        Err(PipelineError::silver_schema(
            schemas.iter().map(|s| s.as_ref().to_string()),
        ))
    }
}
