//! Odds coercion and implied probability.

use super::types::OddsValue;

/// Coerce a raw feed value into a finite number.
///
/// Strings lose their first `+` before parsing (`"+120"` -> `120`). Anything
/// unparseable or non-finite comes back as `None`; feed noise is expected and
/// never an error.
pub fn normalize_odds(value: Option<&OddsValue>) -> Option<f64> {
    match value? {
        OddsValue::Number(n) => n.is_finite().then_some(*n),
        OddsValue::Text(s) => {
            let cleaned = s.replacen('+', "", 1);
            let cleaned = cleaned.trim();
            // Blank strings coerce to zero, like the feed's numeric casts
            if cleaned.is_empty() {
                return Some(0.0);
            }
            cleaned.parse::<f64>().ok().filter(|n| n.is_finite())
        }
        OddsValue::Null | OddsValue::Other(_) => None,
    }
}

/// Implied probability of an American moneyline, on a 0-100 scale.
///
/// Unknown odds score 0.
pub fn implied_probability_score(odds: Option<f64>) -> f64 {
    let Some(odds) = odds else {
        return 0.0;
    };
    let prob = if odds < 0.0 {
        -odds / (-odds + 100.0)
    } else {
        100.0 / (odds + 100.0)
    };
    prob * 100.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn text(s: &str) -> OddsValue {
        OddsValue::Text(s.to_string())
    }

    #[test]
    fn test_normalize_signed_strings() {
        assert_eq!(normalize_odds(Some(&text("+120"))), Some(120.0));
        assert_eq!(normalize_odds(Some(&text("-110"))), Some(-110.0));
        assert_eq!(normalize_odds(Some(&text("4.5"))), Some(4.5));
        assert_eq!(normalize_odds(Some(&text(" +150 "))), Some(150.0));
    }

    #[test]
    fn test_normalize_unknown_values() {
        assert_eq!(normalize_odds(None), None);
        assert_eq!(normalize_odds(Some(&text("abc"))), None);
        assert_eq!(normalize_odds(Some(&text("Infinity"))), None);
        assert_eq!(normalize_odds(Some(&text("NaN"))), None);
        assert_eq!(normalize_odds(Some(&OddsValue::Number(f64::NAN))), None);
        assert_eq!(normalize_odds(Some(&OddsValue::Null)), None);
        assert_eq!(normalize_odds(Some(&OddsValue::Other(json!(true)))), None);
        assert_eq!(normalize_odds(Some(&OddsValue::Other(json!({"a": 1})))), None);
    }

    #[test]
    fn test_normalize_numbers_pass_through() {
        assert_eq!(normalize_odds(Some(&OddsValue::Number(75.0))), Some(75.0));
        assert_eq!(normalize_odds(Some(&OddsValue::Number(-250.0))), Some(-250.0));
        assert_eq!(normalize_odds(Some(&text(""))), Some(0.0));
    }

    #[test]
    fn test_implied_probability_known_values() {
        assert!((implied_probability_score(Some(-110.0)) - 52.380_952_380_952_38).abs() < 1e-9);
        assert!((implied_probability_score(Some(150.0)) - 40.0).abs() < 1e-9);
        assert_eq!(implied_probability_score(Some(100.0)), 50.0);
        assert_eq!(implied_probability_score(Some(0.0)), 100.0);
        assert_eq!(implied_probability_score(None), 0.0);
    }

    #[test]
    fn test_implied_probability_matches_formula_exactly() {
        let odds = -137.0_f64;
        let expected = (137.0 / (137.0 + 100.0)) * 100.0;
        assert_eq!(implied_probability_score(Some(odds)), expected);
    }

    #[test]
    fn test_implied_probability_bounds() {
        for odds in (-100_000..=100_000).step_by(37) {
            let score = implied_probability_score(Some(odds as f64));
            assert!((0.0..=100.0).contains(&score), "{odds} -> {score}");
        }
        assert!((0.0..=100.0).contains(&implied_probability_score(Some(-1e12))));
        assert!((0.0..=100.0).contains(&implied_probability_score(Some(1e12))));
    }
}
