use crate::models::{ApplicationMode, Unit};

/// Round to 3 decimal places, the precision used for all derived totals.
pub fn round3(value: f64) -> f64 {
    (value * 1000.0).round() / 1000.0
}

/// Total liquid volume for a per-length application: dose in mL per meter of
/// row, scaled by row count and row length, converted mL -> L.
pub fn per_length_total_liters(dose_ml_per_m: f64, row_count: u32, row_length_m: f64) -> f64 {
    round3(dose_ml_per_m * row_count as f64 * row_length_m / 1000.0)
}

/// Total quantity for a per-area application: dose per hectare scaled by the
/// field area. The unit (kg or L) follows the dose unit.
pub fn per_area_total_quantity(dose_per_ha: f64, area_ha: f64) -> f64 {
    round3(dose_per_ha * area_ha)
}

const FERTILIZER_TOKENS: &[&str] = &["fertiliz", "fosfato", "phosphate", "npk", "urea", "potash"];

/// Whether a product name suggests a fertilizer, by case-insensitive
/// substring match.
pub fn is_fertilizer(product: &str) -> bool {
    let name = product.to_lowercase();
    FERTILIZER_TOKENS.iter().any(|token| name.contains(token))
}

/// Default application mode for a product: fertilizers are dosed per area,
/// everything else per row length.
pub fn suggest_mode(product: &str) -> ApplicationMode {
    if is_fertilizer(product) {
        ApplicationMode::PerArea
    } else {
        ApplicationMode::PerLength
    }
}

/// Default dose unit for a per-area application: solid kg/ha for
/// fertilizers, liquid L/ha otherwise.
pub fn suggest_unit(product: &str) -> Unit {
    if is_fertilizer(product) {
        Unit::KgPerHa
    } else {
        Unit::LPerHa
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::logic::geometry::rectangle_area_ha;

    #[test]
    fn round3_behavior() {
        assert_eq!(round3(1.23456), 1.235);
        assert_eq!(round3(1.2344), 1.234);
        assert_eq!(round3(2.0), 2.0);
        assert_eq!(round3(0.0005), 0.001);
    }

    #[test]
    fn per_length_total_formula() {
        // 2 mL/m * 10 rows * 150 m = 3000 mL = 3 L
        assert_eq!(per_length_total_liters(2.0, 10, 150.0), 3.0);
        // single row minimum
        assert_eq!(per_length_total_liters(1.0, 1, 1.0), 0.001);
        // rounding to 3 decimals
        assert_eq!(per_length_total_liters(1.2345, 1, 1.0), 0.001);
    }

    #[test]
    fn per_area_total_formula() {
        assert_eq!(per_area_total_quantity(40.0, 0.5), 20.0);
        assert_eq!(per_area_total_quantity(3.333, 3.0), 9.999);
        assert_eq!(per_area_total_quantity(1.0, 0.12345), 0.123);
    }

    #[test]
    fn fertilizer_detection() {
        assert!(is_fertilizer("fosfato"));
        assert!(is_fertilizer("Solid Fertilizer"));
        assert!(is_fertilizer("NPK 20-5-10"));
        assert!(is_fertilizer("urea granulada"));
        assert!(!is_fertilizer("herbicide x"));
        assert!(!is_fertilizer(""));
    }

    #[test]
    fn mode_and_unit_suggestions() {
        assert_eq!(suggest_mode("fosfato"), ApplicationMode::PerArea);
        assert_eq!(suggest_mode("herbicide x"), ApplicationMode::PerLength);
        assert_eq!(suggest_unit("fosfato"), Unit::KgPerHa);
        assert_eq!(suggest_unit("herbicide x"), Unit::LPerHa);
    }

    #[test]
    fn soy_phosphate_scenario() {
        // Soy field 100 m x 50 m, fosfato at 40 kg/ha.
        let area = rectangle_area_ha(100.0, 50.0);
        assert_eq!(area, 0.5);
        assert_eq!(suggest_mode("fosfato"), ApplicationMode::PerArea);
        assert_eq!(suggest_unit("fosfato"), Unit::KgPerHa);
        assert_eq!(per_area_total_quantity(40.0, area), 20.0);
    }
}
