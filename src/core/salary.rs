use crate::domain::model::SalaryBounds;

const LOWER_BOUND_UPLIFT: f64 = 1.2;
const UPPER_BOUND_DISCOUNT: f64 = 0.8;

/// Estimates a single monthly salary from an optional lower/upper pair.
///
/// A lone lower bound is raised by 20%, a lone upper bound is cut by 20%,
/// and when both are present their mean is used. Returns `None` when the
/// vacancy publishes no bound at all.
pub fn predict_salary(lower: Option<f64>, upper: Option<f64>) -> Option<f64> {
    match (lower, upper) {
        (Some(lower), Some(upper)) => Some((lower + upper) / 2.0),
        (Some(lower), None) => Some(lower * LOWER_BOUND_UPLIFT),
        (None, Some(upper)) => Some(upper * UPPER_BOUND_DISCOUNT),
        (None, None) => None,
    }
}

pub fn predict_from_bounds(bounds: SalaryBounds) -> Option<f64> {
    predict_salary(bounds.lower, bounds.upper)
}
