//! Tests for error types

use alumno_db::Error;

#[test]
fn test_validation_error() {
    let error = Error::Validation("Age must be a positive integer.".to_string());
    let error_str = format!("{error}");
    assert!(error_str.contains("Validation error"));
    assert!(error_str.contains("Age must be a positive integer."));
}

#[test]
fn test_model_not_trained_error() {
    let error = Error::ModelNotTrained;
    let error_str = format!("{error}");
    assert!(error_str.contains("Model is not trained yet"));
    assert!(error_str.contains("Add more student records"));
}

#[test]
fn test_model_fit_error() {
    let error = Error::ModelFit("singular design matrix".to_string());
    let error_str = format!("{error}");
    assert!(error_str.contains("Model fit failed"));
    assert!(error_str.contains("singular design matrix"));
}

#[test]
fn test_chart_render_error() {
    let error = Error::ChartRender("exam_scores_bar.png: disk full".to_string());
    let error_str = format!("{error}");
    assert!(error_str.contains("Chart render failed"));
    assert!(error_str.contains("exam_scores_bar.png"));
}

#[test]
fn test_persistence_error_conversion() {
    let error: Error = rusqlite::Error::QueryReturnedNoRows.into();
    let error_str = format!("{error}");
    assert!(error_str.contains("Persistence error"));
}

#[test]
fn test_snapshot_error_conversion() {
    let parse_failure = serde_json::from_str::<serde_json::Value>("{ not json").unwrap_err();
    let error: Error = parse_failure.into();
    let error_str = format!("{error}");
    assert!(error_str.contains("Snapshot error"));
}

#[test]
fn test_io_error_conversion() {
    let io_error = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
    let error: Error = io_error.into();
    let error_str = format!("{error}");
    assert!(error_str.contains("IO error"));
}

#[test]
fn test_error_debug() {
    let error = Error::ModelNotTrained;
    let debug_str = format!("{error:?}");
    assert!(debug_str.contains("ModelNotTrained"));
}

#[test]
fn test_result_type_alias() {
    // Test that Result<T> can be used
    #[allow(clippy::unnecessary_wraps)]
    fn returns_result() -> alumno_db::Result<i32> {
        Ok(42)
    }

    let result = returns_result();
    assert!(result.is_ok());
    assert_eq!(result.unwrap(), 42);
}

#[test]
fn test_result_type_alias_error() {
    fn returns_error() -> alumno_db::Result<i32> {
        Err(Error::Validation("Name is required.".to_string()))
    }

    let result = returns_error();
    assert!(result.is_err());
}
