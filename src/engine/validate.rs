use crate::engine::error::ValidationError;

/// Every key issued by the completion service starts with this.
pub const CREDENTIAL_PREFIX: &str = "sk-";

pub fn validate_required(field: &'static str, input: &str) -> Result<(), ValidationError> {
    if input.trim().is_empty() {
        return Err(ValidationError::Required(field));
    }
    Ok(())
}

/// The version lands in the output file name, so it must stay one path segment.
pub fn validate_version(input: &str) -> Result<(), ValidationError> {
    validate_required("Version", input)?;
    if input.contains(['/', '\\']) {
        return Err(ValidationError::PathSeparator("Version"));
    }
    Ok(())
}

pub fn validate_credential(input: &str) -> Result<(), ValidationError> {
    validate_required("API key", input)?;
    if !input.starts_with(CREDENTIAL_PREFIX) {
        return Err(ValidationError::CredentialFormat(CREDENTIAL_PREFIX));
    }
    Ok(())
}
