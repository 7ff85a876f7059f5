use std::borrow::Cow;

use serde::{de::DeserializeOwned, Deserialize, Serialize};
use url::Url;
use validator::{Validate, ValidationError};

use crate::api::json_error::JsonError;

/// A job as submitted by a client, before it is stored.
///
/// Missing fields decode as empty strings so that an absent `name` or `url`
/// is reported by validation rather than as a decoding failure.
///
/// `url` must be an absolute `http`, `https` or `ftp` URL. Bare paths such
/// as `/files/a.iso`, which a request-URI parser would accept, are refused
/// on purpose: a download needs a host.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, Validate)]
#[serde(default)]
pub struct JobSubmission {
    #[validate(custom(function = "validate_not_blank"))]
    pub name: String,
    #[serde(rename = "time", alias = "scheduled_time")]
    pub scheduled_time: String,
    #[validate(custom(function = "validate_download_url"))]
    pub url: String,
}

impl JobSubmission {
    pub fn new(
        name: impl Into<String>,
        scheduled_time: impl Into<String>,
        url: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            scheduled_time: scheduled_time.into(),
            url: url.into(),
        }
    }
}

/// Decodes and validates a job submission from a raw request body.
///
/// The body is read as JSON whatever the request's `Content-Type` says.
pub fn parse_job(body: &[u8]) -> Result<JobSubmission, JsonError> {
    parse_validated(body)
}

pub(crate) fn parse_validated<T>(body: &[u8]) -> Result<T, JsonError>
where
    T: DeserializeOwned + Validate,
{
    let value: T = serde_json::from_slice(body).map_err(JsonError::InvalidJson)?;
    value.validate().map_err(JsonError::ValidationError)?;
    Ok(value)
}

fn validate_not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        let mut error = ValidationError::new("blank");
        error.message = Some(Cow::Borrowed("must not be empty"));
        return Err(error);
    }
    Ok(())
}

/// URL schemes a job may download from.
pub const DOWNLOAD_SCHEMES: [&str; 3] = ["http", "https", "ftp"];

/// Whether `url` parses as an absolute URL with one of [`DOWNLOAD_SCHEMES`].
#[must_use]
pub fn has_download_scheme(url: &str) -> bool {
    Url::parse(url).is_ok_and(|parsed| DOWNLOAD_SCHEMES.contains(&parsed.scheme()))
}

fn validate_download_url(value: &str) -> Result<(), ValidationError> {
    if !has_download_scheme(value) {
        let mut error = ValidationError::new("url");
        error.message = Some(Cow::Borrowed(
            "must be a well-formed absolute http, https or ftp URL",
        ));
        return Err(error);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parses_valid_submission() {
        let body = br#"{"name": "Foobar Job", "time": "1970-01-01 13:37:00", "url": "https://blog.badgerops.net/content/images/2020/03/badger.png"}"#;

        let job = parse_job(body).expect("submission should parse");

        assert_eq!(job.name, "Foobar Job");
        assert_eq!(job.scheduled_time, "1970-01-01 13:37:00");
        assert_eq!(
            job.url,
            "https://blog.badgerops.net/content/images/2020/03/badger.png"
        );
    }

    #[test]
    fn test_accepts_scheduled_time_alias() {
        let body = br#"{"name": "nightly", "scheduled_time": "02:00", "url": "ftp://mirror.example.org/file.iso"}"#;

        let job = parse_job(body).expect("submission should parse");

        assert_eq!(job.scheduled_time, "02:00");
    }

    #[test]
    fn test_missing_time_is_empty() {
        let job = parse_job(br#"{"name": "later", "url": "http://example.com/a"}"#)
            .expect("submission should parse");

        assert_eq!(job.scheduled_time, "");
    }

    #[test]
    fn test_rejects_malformed_json() {
        let err = parse_job(b"{\"name\": ").unwrap_err();

        assert!(matches!(err, JsonError::InvalidJson(_)));
        assert!(err.to_string().starts_with("Error parsing JSON"));
    }

    #[test]
    fn test_rejects_wrong_field_types() {
        let err = parse_job(br#"{"name": 42, "url": "http://example.com"}"#).unwrap_err();

        assert!(matches!(err, JsonError::InvalidJson(_)));
    }

    #[test]
    fn test_rejects_invalid_utf8() {
        let err = parse_job(b"{\"name\": \"\xff\xfe\", \"url\": \"http://example.com\"}").unwrap_err();

        assert!(matches!(err, JsonError::InvalidJson(_)));
    }

    #[test]
    fn test_rejects_blank_name() {
        for name in ["", "   "] {
            let body = serde_json::json!({"name": name, "time": "now", "url": "http://example.com"});

            let err = parse_job(body.to_string().as_bytes()).unwrap_err();

            let JsonError::ValidationError(errors) = err else {
                panic!("expected a validation error for {name:?}");
            };
            assert!(errors.field_errors().contains_key("name"));
        }
    }

    #[test]
    fn test_rejects_invalid_url() {
        for url in ["", "not a url", "/relative/path", "http//missing-colon"] {
            let body = serde_json::json!({"name": "job", "time": "now", "url": url});

            let err = parse_job(body.to_string().as_bytes()).unwrap_err();

            let JsonError::ValidationError(errors) = err else {
                panic!("expected a validation error for {url:?}");
            };
            assert!(errors.field_errors().contains_key("url"));
        }
    }

    #[test]
    fn test_rejects_non_download_schemes() {
        for url in [
            "javascript:alert(document.cookie)",
            "data:text/html,<script>alert(1)</script>",
            "file:///etc/passwd",
            "mailto:root@example.com",
        ] {
            let body = serde_json::json!({"name": "job", "time": "now", "url": url});

            let err = parse_job(body.to_string().as_bytes()).unwrap_err();

            let JsonError::ValidationError(errors) = err else {
                panic!("expected a validation error for {url:?}");
            };
            assert!(errors.field_errors().contains_key("url"));
        }
    }

    #[test]
    fn test_has_download_scheme() {
        assert!(has_download_scheme("https://example.com/a.iso"));
        assert!(has_download_scheme("HTTP://EXAMPLE.COM/a.iso"));
        assert!(has_download_scheme("ftp://mirror.example.org/a.iso"));
        assert!(!has_download_scheme("javascript:alert(1)"));
        assert!(!has_download_scheme("/files/a.iso"));
    }

    #[test]
    fn test_reports_every_invalid_field() {
        let err = parse_job(br#"{"name": "", "url": "nope"}"#).unwrap_err();

        let JsonError::ValidationError(errors) = err else {
            panic!("expected a validation error");
        };
        let fields = errors.field_errors();
        assert!(fields.contains_key("name"));
        assert!(fields.contains_key("url"));
    }
}
