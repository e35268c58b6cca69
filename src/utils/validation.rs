use crate::utils::error::{ApicError, Result};

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_path(field_name: &str, path: &str) -> Result<()> {
    if path.is_empty() {
        return Err(ApicError::InvalidConfigValue {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path cannot be empty".to_string(),
        });
    }

    if path.contains('\0') {
        return Err(ApicError::InvalidConfigValue {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path contains null bytes".to_string(),
        });
    }

    Ok(())
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(ApicError::InvalidConfigValue {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Value cannot be empty or whitespace-only".to_string(),
        });
    }
    Ok(())
}

/// Check that a record's task names line up with the group header.
pub fn validate_task_schema(api: &str, line: u64, header: &[String], tasks: &[String]) -> Result<()> {
    if header != tasks {
        return Err(ApicError::SchemaMismatch {
            api: api.to_string(),
            line,
            expected: header.to_vec(),
            found: tasks.to_vec(),
        });
    }
    Ok(())
}
