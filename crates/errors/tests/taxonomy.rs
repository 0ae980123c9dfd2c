use kafkabricks_errors::{ErrorCategory, Layer, PipelineError, PipelineResult, validate_silver_schemas};

fn create_table(existing_dbs: &[&str], db_name: &str) -> PipelineResult<()> {
    if !existing_dbs.contains(&db_name) {
        return Err(PipelineError::database_creation(db_name));
    }
    Ok(())
}

fn silver_setup(existing_dbs: &[&str], schemas: &[&str]) -> PipelineResult<()> {
    create_table(existing_dbs, "silver")?;
    validate_silver_schemas(schemas)?;
    Ok(())
}

#[test]
fn test_errors_propagate_unchanged_through_callers() {
    let err = silver_setup(&["bronze"], &[]).unwrap_err();
    assert_eq!(err, PipelineError::database_creation("silver"));

    let err = silver_setup(&["bronze", "silver"], &["books"]).unwrap_err();
    assert!(matches!(err, PipelineError::SilverSchema { .. }));
    assert!(err.to_string().contains("[books]"));
}

#[test]
fn test_fields_appear_in_template_order() {
    let cases = [
        (
            PipelineError::ingestion("m1-msg", "d1-db", "t1-table"),
            vec!["d1-db", "t1-table", "m1-msg"],
        ),
        (
            PipelineError::upsert("m2-msg", "f2-func"),
            vec!["f2-func", "m2-msg"],
        ),
        (PipelineError::config("c3-msg"), vec!["c3-msg"]),
        (PipelineError::bronze_setup("b4-msg"), vec!["b4-msg"]),
        (PipelineError::database_creation("d5-db"), vec!["d5-db"]),
        (PipelineError::silver_setup("s6-msg"), vec!["s6-msg"]),
        (PipelineError::gold_setup("g7-msg"), vec!["g7-msg"]),
        (
            PipelineError::silver_schema(["l8-first", "l8-second"]),
            vec!["l8-first", "l8-second"],
        ),
    ];

    for (err, fields) in cases {
        let msg = err.to_string();
        let mut last = 0;
        for field in fields {
            assert_eq!(msg.matches(field).count(), 1, "{field} in {msg}");
            let pos = msg.find(field).unwrap();
            assert!(pos >= last, "{field} out of order in {msg}");
            last = pos;
        }
    }
}

#[test]
fn test_catch_by_kind() {
    let failures = vec![
        PipelineError::bronze_setup("landing zone missing"),
        PipelineError::ingestion("bad format", "bronze", "customer_data"),
        PipelineError::gold_setup("view failed"),
    ];

    let setup_layers: Vec<Layer> = failures.iter().filter_map(PipelineError::layer).collect();
    assert_eq!(setup_layers, vec![Layer::Bronze, Layer::Gold]);

    let ingestion = failures
        .iter()
        .find(|e| e.category() == ErrorCategory::Ingestion)
        .unwrap();
    let msg = ingestion.to_string();
    assert!(msg.contains("bronze.customer_data"));
    assert!(msg.contains("bad format"));
}

#[test]
fn test_layer_display() {
    assert_eq!(Layer::Bronze.to_string(), "bronze");
    assert_eq!(Layer::Silver.to_string(), "silver");
    assert_eq!(Layer::Gold.to_string(), "gold");
}
