/// Validates the provided API key against the key configured at startup.
///
/// Returns `Ok(())` if the key matches, or `unauthenticated` otherwise. An empty expected key
/// never matches, so a misconfigured server rejects every call instead of accepting all of them.
#[allow(clippy::result_large_err)]
pub fn validate_api_key(provided_key: &str, expected_key: &str) -> Result<(), tonic::Status> {
    if expected_key.is_empty() {
        return Err(tonic::Status::internal("API key not configured"));
    }

    if provided_key == expected_key {
        Ok(())
    } else {
        Err(tonic::Status::unauthenticated("Invalid API key"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_matching_key() {
        assert!(validate_api_key("secret", "secret").is_ok());
    }

    #[test]
    fn rejects_wrong_key() {
        let status = validate_api_key("guess", "secret").expect_err("should reject");
        assert_eq!(status.code(), tonic::Code::Unauthenticated);
    }

    #[test]
    fn rejects_everything_when_unconfigured() {
        let status = validate_api_key("", "").expect_err("should reject");
        assert_eq!(status.code(), tonic::Code::Internal);
    }
}
