//! Pure derived-metric functions. Nothing here touches the network or the clock.

pub mod character;
pub mod grade;
pub mod nil;
pub mod trajectory;

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum MetricError {
    #[error("growth is undefined when the athletic score is zero")]
    UndefinedGrowth,

    #[error("{field} must be a finite number (got {value})")]
    NonFinite { field: &'static str, value: f64 },
}

/// Rounds to `places` decimal digits for display.
pub(crate) fn round_to(value: f64, places: i32) -> f64 {
    let factor = 10f64.powi(places);
    (value * factor).round() / factor
}
