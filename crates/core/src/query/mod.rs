//! Typed request records and resolvers. Each endpoint parses its raw parameters into a request
//! record (rejecting unknown selectors up front) and then projects a payload from the catalog.

pub mod blaze;
pub mod character;
pub mod grizzlies;
pub mod live_scores;
pub mod nil;
pub mod perfect_game;

use crate::metrics::MetricError;

#[derive(Debug, thiserror::Error)]
pub enum QueryError {
    /// Unknown selector value; carries the accepted values under `available_key`.
    #[error("{message}")]
    BadSelector {
        error: &'static str,
        message: String,
        available_key: &'static str,
        available: Vec<&'static str>,
    },

    #[error("{0} is required")]
    MissingField(&'static str),

    #[error("Invalid request body: {0}")]
    InvalidBody(String),

    #[error("{field} {reason}")]
    InvalidValue { field: &'static str, reason: String },

    #[error(transparent)]
    Metric(#[from] MetricError),
}

impl QueryError {
    /// Short code for the envelope's `error` field.
    pub fn code(&self) -> String {
        match self {
            Self::BadSelector { error, .. } => (*error).to_string(),
            Self::MissingField(field) => format!("{field} is required"),
            Self::InvalidBody(_) => "Invalid request body".to_string(),
            Self::InvalidValue { field, .. } => format!("Invalid {field}"),
            Self::Metric(e) => e.to_string(),
        }
    }

    /// `true` when the failure is not the caller's fault.
    pub fn is_internal(&self) -> bool {
        matches!(self, Self::Metric(_))
    }

    pub(crate) fn bad_selector(
        error: &'static str,
        kind: &str,
        value: &str,
        available_key: &'static str,
        available: Vec<&'static str>,
    ) -> Self {
        Self::BadSelector {
            error,
            message: format!("Unknown {kind} '{value}'"),
            available_key,
            available,
        }
    }
}

/// Trims a raw parameter; empty values count as absent.
pub(crate) fn present(raw: Option<&str>) -> Option<&str> {
    raw.map(str::trim).filter(|s| !s.is_empty())
}

pub(crate) fn is_truthy(raw: Option<&str>) -> bool {
    present(raw).is_some_and(|v| v.eq_ignore_ascii_case("true") || v == "1")
}

pub(crate) fn parse_number<T: std::str::FromStr>(
    field: &'static str,
    raw: Option<&str>,
) -> Result<Option<T>, QueryError> {
    present(raw)
        .map(|v| {
            v.parse::<T>().map_err(|_| QueryError::InvalidValue {
                field,
                reason: format!("must be a number (got '{v}')"),
            })
        })
        .transpose()
}

/// Parses a JSON request body. An empty body deserialises as `T::default()`.
pub(crate) fn parse_body<T>(body: &[u8]) -> Result<T, QueryError>
where
    T: serde::de::DeserializeOwned + Default,
{
    if body.iter().all(u8::is_ascii_whitespace) {
        return Ok(T::default());
    }
    serde_json::from_slice(body).map_err(|e| QueryError::InvalidBody(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_codes() {
        assert_eq!(QueryError::MissingField("sport").code(), "sport is required");
        assert_eq!(
            QueryError::InvalidBody("eof".into()).code(),
            "Invalid request body"
        );
        let bad = QueryError::bad_selector("Team not found", "team", "wizards", "available_teams", vec![]);
        assert_eq!(bad.code(), "Team not found");
        assert_eq!(bad.to_string(), "Unknown team 'wizards'");
        assert!(QueryError::Metric(MetricError::UndefinedGrowth).is_internal());
    }

    #[test]
    fn truthy_values() {
        assert!(is_truthy(Some("true")));
        assert!(is_truthy(Some(" TRUE ")));
        assert!(is_truthy(Some("1")));
        assert!(!is_truthy(Some("false")));
        assert!(!is_truthy(None));
    }

    #[test]
    fn parse_number_reports_field() {
        assert_eq!(parse_number::<i32>("graduationYear", Some("2025")).unwrap(), Some(2025));
        assert_eq!(parse_number::<i32>("graduationYear", Some("")).unwrap(), None);
        let err = parse_number::<i32>("graduationYear", Some("soon")).unwrap_err();
        assert_eq!(err.code(), "Invalid graduationYear");
    }

    #[test]
    fn empty_body_is_default() {
        #[derive(Debug, Default, serde::Deserialize, PartialEq)]
        struct Body {
            a: Option<u32>,
        }
        assert_eq!(parse_body::<Body>(b"  ").unwrap(), Body::default());
        assert_eq!(parse_body::<Body>(br#"{"a":3}"#).unwrap(), Body { a: Some(3) });
        assert!(matches!(
            parse_body::<Body>(b"{not json"),
            Err(QueryError::InvalidBody(_))
        ));
    }
}
