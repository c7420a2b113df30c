use anyhow::Result;

use crate::types::AuditReport;

/// Pretty JSON. Checks that were not requested serialize as `null`.
///
/// # Errors
/// Returns error if serialization fails.
pub fn render(report: &AuditReport) -> Result<String> {
    Ok(serde_json::to_string_pretty(report)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Violation;

    #[test]
    fn absent_is_null_and_empty_is_array() {
        let report = AuditReport {
            controller_violations: Some(Vec::new()),
            usecase_violations: Some(vec![Violation::UsecaseMissingSpec {
                file: "app/usecases/a_usecase.rb".into(),
                expected_spec: "spec/usecases/a_usecase_spec.rb".into(),
            }]),
            ..AuditReport::default()
        };
        let value: serde_json::Value = serde_json::from_str(&render(&report).unwrap()).unwrap();
        assert_eq!(value["controller_violations"], serde_json::json!([]));
        assert!(value["rake_violations"].is_null());
        assert_eq!(value["usecase_violations"][0]["kind"], "usecase_missing_spec");
        assert_eq!(value["usecase_violations"][0]["expected_spec"], "spec/usecases/a_usecase_spec.rb");
        assert_eq!(value["parse_failures"], serde_json::json!([]));
    }
}
