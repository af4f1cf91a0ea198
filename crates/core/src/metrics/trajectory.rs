use super::MetricError;

/// Percentage growth from the athletic milestone score to the business milestone score, each
/// expressed as `ratio × 100`.
pub fn trajectory_growth(athletic_ratio: f64, business_ratio: f64) -> Result<i64, MetricError> {
    if !athletic_ratio.is_finite() {
        return Err(MetricError::NonFinite {
            field: "athletic_ratio",
            value: athletic_ratio,
        });
    }
    if !business_ratio.is_finite() {
        return Err(MetricError::NonFinite {
            field: "business_ratio",
            value: business_ratio,
        });
    }

    let athletic = athletic_ratio * 100.0;
    let business = business_ratio * 100.0;
    if athletic == 0.0 {
        return Err(MetricError::UndefinedGrowth);
    }

    Ok((((business - athletic) / athletic) * 100.0).round() as i64)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn computes_rounded_percentage() {
        assert_eq!(trajectory_growth(0.5, 0.75), Ok(50));
        assert_eq!(trajectory_growth(0.62, 0.71), Ok(15));
        assert_eq!(trajectory_growth(0.45, 0.39), Ok(-13));
    }

    #[test]
    fn zero_athletic_score_is_an_error() {
        assert_eq!(trajectory_growth(0.0, 0.4), Err(MetricError::UndefinedGrowth));
    }

    #[test]
    fn rejects_non_finite_inputs() {
        assert!(matches!(
            trajectory_growth(f64::NAN, 0.4),
            Err(MetricError::NonFinite { field: "athletic_ratio", .. })
        ));
    }
}
