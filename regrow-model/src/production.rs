use crate::{dual::Scalar, error::ModelError, params::Parameters};

/// Computes output from the four factor inputs.
///
/// The production function is a constant-returns nested Cobb–Douglas form:
/// a tangible composite `K^α · l^(1−α)` (physical capital with low-skill
/// labor) and a knowledge composite `H^α · h^(1−α)` (intangible capital
/// with high-skill labor), combined with weight η and scaled by total
/// factor productivity:
///
/// `Y = A · [(1−η) · K^α · l^(1−α) + η · H^α · h^(1−α)]`
///
/// Homogeneous of degree one, so factor payments at marginal-product
/// prices exhaust output exactly (Euler's theorem).
///
/// # Errors
///
/// Returns [`ModelError::NonPositiveInput`] if any input is zero, negative,
/// or non-finite; the form is undefined there and must not silently
/// produce NaN.
pub fn production(
    capital: f64,
    intangible: f64,
    low_skill_labor: f64,
    high_skill_labor: f64,
    params: &Parameters,
) -> Result<f64, ModelError> {
    require_positive("capital", capital)?;
    require_positive("intangible capital", intangible)?;
    require_positive("low-skill labor", low_skill_labor)?;
    require_positive("high-skill labor", high_skill_labor)?;

    Ok(output(
        capital,
        intangible,
        low_skill_labor,
        high_skill_labor,
        params,
    ))
}

/// The raw production form, generic over the scalar type so the same
/// expression serves plain evaluation and automatic differentiation.
///
/// Callers are responsible for the strict-positivity precondition.
pub(crate) fn output<T: Scalar>(
    capital: T,
    intangible: T,
    low_skill_labor: T,
    high_skill_labor: T,
    params: &Parameters,
) -> T {
    let alpha = params.capital_share;
    let eta = params.intangible_weight;

    let tangible = capital.powf(alpha) * low_skill_labor.powf(1.0 - alpha);
    let knowledge = intangible.powf(alpha) * high_skill_labor.powf(1.0 - alpha);

    (tangible * (1.0 - eta) + knowledge * eta) * params.productivity
}

pub(crate) fn require_positive(name: &'static str, value: f64) -> Result<(), ModelError> {
    if !value.is_finite() || value <= 0.0 {
        return Err(ModelError::NonPositiveInput { name, value });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    #[test]
    fn matches_hand_computed_value() {
        let params = Parameters::default();

        let y = production(0.7, 1.3, 10.0, 8.0, &params).expect("inputs are positive");

        assert_relative_eq!(y, 4.263330943388034, epsilon = 1e-12);
    }

    #[test]
    fn constant_returns_to_scale() {
        let params = Parameters::default();

        let y = production(0.7, 1.3, 10.0, 8.0, &params).unwrap();
        let doubled = production(1.4, 2.6, 20.0, 16.0, &params).unwrap();

        assert_relative_eq!(doubled, 2.0 * y, max_relative = 1e-12);
    }

    #[test]
    fn rejects_non_positive_inputs() {
        let params = Parameters::default();

        for bad in [0.0, -1.0, f64::NAN, f64::NEG_INFINITY] {
            let result = production(bad, 1.0, 10.0, 8.0, &params);
            assert!(matches!(
                result,
                Err(ModelError::NonPositiveInput { name: "capital", .. })
            ));
        }

        let result = production(1.0, 1.0, 0.0, 8.0, &params);
        assert!(matches!(result, Err(ModelError::NonPositiveInput { .. })));
    }
}
