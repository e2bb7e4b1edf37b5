use crate::utils::error::{Result, StatsError};
use regex::Regex;
use std::fmt::Display;
use url::Url;

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_url(field_name: &str, url_str: &str) -> Result<()> {
    if url_str.is_empty() {
        return Err(StatsError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: url_str.to_string(),
            reason: "URL cannot be empty".to_string(),
        });
    }

    match Url::parse(url_str) {
        Ok(url) => match url.scheme() {
            "http" | "https" => Ok(()),
            scheme => Err(StatsError::InvalidConfigValueError {
                field: field_name.to_string(),
                value: url_str.to_string(),
                reason: format!("Unsupported URL scheme: {}", scheme),
            }),
        },
        Err(e) => Err(StatsError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: url_str.to_string(),
            reason: format!("Invalid URL format: {}", e),
        }),
    }
}

pub fn validate_positive_number<T: PartialOrd + Display + Copy>(
    field_name: &str,
    value: T,
    min_value: T,
) -> Result<()> {
    if value < min_value {
        return Err(StatsError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: format!("Value must be at least {}", min_value),
        });
    }
    Ok(())
}

pub fn validate_required_field<'a, T>(field_name: &str, value: &'a Option<T>) -> Result<&'a T> {
    value.as_ref().ok_or_else(|| StatsError::MissingConfigError {
        field: field_name.to_string(),
    })
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(StatsError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Value cannot be empty or whitespace-only".to_string(),
        });
    }
    Ok(())
}

/// Rejects a value that still holds a `${VAR}` placeholder whose variable was not set.
pub fn validate_no_unresolved_placeholder(field_name: &str, value: &str) -> Result<()> {
    let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| StatsError::ConfigError {
        message: e.to_string(),
    })?;

    match re.captures(value) {
        Some(caps) => Err(StatsError::MissingConfigError {
            field: format!("{} (environment variable {} is not set)", field_name, &caps[1]),
        }),
        None => Ok(()),
    }
}

pub fn validate_range<T: PartialOrd + Display + Copy>(
    field_name: &str,
    value: T,
    min: T,
    max: T,
) -> Result<()> {
    if value < min || value > max {
        return Err(StatsError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: format!("Value must be between {} and {}", min, max),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_url() {
        assert!(validate_url("headhunter.base_url", "https://api.hh.ru/vacancies").is_ok());
        assert!(validate_url("headhunter.base_url", "http://127.0.0.1:8080/vacancies").is_ok());
        assert!(validate_url("headhunter.base_url", "").is_err());
        assert!(validate_url("headhunter.base_url", "invalid-url").is_err());
        assert!(validate_url("headhunter.base_url", "ftp://example.com").is_err());
    }

    #[test]
    fn test_validate_positive_number() {
        assert!(validate_positive_number("http.timeout_seconds", 5u64, 1).is_ok());
        assert!(validate_positive_number("http.timeout_seconds", 0u64, 1).is_err());
    }

    #[test]
    fn test_validate_range() {
        assert!(validate_range("superjob.count", 100u32, 1, 100).is_ok());
        assert!(validate_range("superjob.count", 0u32, 1, 100).is_err());
        assert!(validate_range("superjob.count", 101u32, 1, 100).is_err());
    }

    #[test]
    fn test_validate_no_unresolved_placeholder() {
        assert!(validate_no_unresolved_placeholder("superjob.secret_key", "v3.r.key").is_ok());
        match validate_no_unresolved_placeholder("superjob.secret_key", "${SJ_KEY}") {
            Err(StatsError::MissingConfigError { field }) => {
                assert!(field.starts_with("superjob.secret_key"));
                assert!(field.contains("SJ_KEY"));
            }
            other => panic!("expected MissingConfigError, got {:?}", other),
        }
    }

    #[test]
    fn test_validate_required_field() {
        let present = Some("key".to_string());
        let missing: Option<String> = None;

        assert_eq!(validate_required_field("superjob.secret_key", &present).unwrap(), "key");
        assert!(matches!(
            validate_required_field("superjob.secret_key", &missing),
            Err(StatsError::MissingConfigError { .. })
        ));
    }
}
