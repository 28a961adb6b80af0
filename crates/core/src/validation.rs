//! Field rules for project and task payloads.
//!
//! Handlers call these before touching storage, so a rejected payload never
//! reaches the database.

use crate::error::CoreError;
use crate::patch::Patch;

/// Upper bound on `project_name`, matching the historical `VARCHAR(255)` column.
pub const MAX_PROJECT_NAME_LEN: usize = 255;

/// Validate a project name.
///
/// Rules:
/// - Must not be blank.
/// - Must not exceed `MAX_PROJECT_NAME_LEN` characters.
pub fn validate_project_name(name: &str) -> Result<(), CoreError> {
    if name.trim().is_empty() {
        return Err(CoreError::Validation(
            "project_name must not be empty".to_string(),
        ));
    }
    if name.chars().count() > MAX_PROJECT_NAME_LEN {
        return Err(CoreError::Validation(format!(
            "project_name must not exceed {MAX_PROJECT_NAME_LEN} characters"
        )));
    }
    Ok(())
}

/// Validate a task description. Must not be blank.
pub fn validate_task_description(description: &str) -> Result<(), CoreError> {
    if description.trim().is_empty() {
        return Err(CoreError::Validation(
            "description must not be empty".to_string(),
        ));
    }
    Ok(())
}

/// Reject an explicit `null` for a column that cannot hold one.
pub fn reject_null<T>(field: &str, patch: &Patch<T>) -> Result<(), CoreError> {
    if patch.is_null() {
        return Err(CoreError::Validation(format!("{field} must not be null")));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    // -- validate_project_name ------------------------------------------------

    #[test]
    fn project_name_accepts_normal_value() {
        assert!(validate_project_name("Spring release").is_ok());
    }

    #[test]
    fn project_name_rejects_empty_and_whitespace() {
        assert!(validate_project_name("").is_err());
        assert!(validate_project_name("   ").is_err());
    }

    #[test]
    fn project_name_length_limit_counts_chars() {
        let at_limit = "é".repeat(MAX_PROJECT_NAME_LEN);
        assert!(validate_project_name(&at_limit).is_ok());

        let over = "a".repeat(MAX_PROJECT_NAME_LEN + 1);
        let err = validate_project_name(&over).unwrap_err();
        assert!(err.to_string().contains("255"));
    }

    // -- validate_task_description --------------------------------------------

    #[test]
    fn description_rejects_blank() {
        assert!(validate_task_description("").is_err());
        assert!(validate_task_description("\n\t").is_err());
        assert!(validate_task_description("write tests").is_ok());
    }

    // -- reject_null ----------------------------------------------------------

    #[test]
    fn reject_null_only_fires_on_null() {
        assert!(reject_null::<bool>("is_complete", &Patch::Absent).is_ok());
        assert!(reject_null("is_complete", &Patch::Value(true)).is_ok());

        let err = reject_null::<bool>("is_complete", &Patch::Null).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Validation failed: is_complete must not be null"
        );
    }
}
