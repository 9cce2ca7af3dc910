use std::collections::HashMap;

use once_cell::sync::Lazy;

/// Readings the meter cannot take come back as 1E+9-and-change.
pub const OVERLOAD_PREFIX: &str = "1E+9";
/// Display label for an overloaded input.
pub const OVERLOAD_LABEL: &str = "Surcharge";

static MODE_LABELS: Lazy<HashMap<&'static str, &'static str>> = Lazy::new(|| {
    HashMap::from([
        ("VOLT", "Tension continue"),
        ("VOLT AC", "Tension alternative"),
        ("CURR", "Courant continu"),
        ("CURR AC", "Courant alternatif"),
        ("RES", "Résistance"),
        ("CAP", "Capacité"),
        ("FREQ", "Fréquence"),
        ("DIOD", "Diode"),
        ("CONT", "Continuité"),
    ])
});

static MODE_UNITS: Lazy<HashMap<&'static str, &'static str>> = Lazy::new(|| {
    HashMap::from([
        ("VOLT", "V"),
        ("VOLT AC", "V~"),
        ("CURR", "A"),
        ("CURR AC", "A~"),
        ("RES", "Ω"),
        ("CAP", "F"),
        ("FREQ", "Hz"),
        ("DIOD", "V"),
        ("CONT", "Ω"),
    ])
});

/// Human-readable name for a mode code; unknown codes pass through unchanged.
pub fn mode_label(code: &str) -> String {
    MODE_LABELS
        .get(code.to_uppercase().as_str())
        .map(|label| (*label).to_string())
        .unwrap_or_else(|| code.to_string())
}

/// Unit symbol for a mode code; unknown codes map to no unit.
pub fn mode_unit(code: &str) -> &'static str {
    MODE_UNITS
        .get(code.to_uppercase().as_str())
        .copied()
        .unwrap_or("")
}

/// Renders a raw measurement for display: the overload label, a 3-decimal
/// float with its unit, or the raw text as a last resort.
pub fn format_measurement(raw: &str, unit: &str) -> String {
    if raw.starts_with(OVERLOAD_PREFIX) {
        return OVERLOAD_LABEL.to_string();
    }
    match raw.parse::<f64>() {
        Ok(value) => format!("{value:.3} {unit}"),
        Err(_) => raw.to_string(),
    }
}

/// Numeric value of a raw measurement, if it has one.
pub fn extract_numeric(raw: &str) -> Option<f64> {
    if raw.starts_with(OVERLOAD_PREFIX) {
        return None;
    }
    raw.parse::<f64>().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn overload_prefix_wins_regardless_of_unit() {
        assert_eq!(format_measurement("1E+9", "V"), "Surcharge");
        assert_eq!(format_measurement("1E+9", ""), "Surcharge");
        assert_eq!(format_measurement("1E+9.42", "A"), "Surcharge");
        assert_eq!(extract_numeric("1E+9"), None);
        assert_eq!(extract_numeric("1E+90"), None);
    }

    #[test]
    fn valid_floats_render_with_three_decimals() {
        assert_eq!(format_measurement("1.234", "V"), "1.234 V");
        assert_eq!(format_measurement("0.5", "A"), "0.500 A");
        assert_eq!(format_measurement("2.5e-3", "F"), "0.003 F");
        assert_eq!(extract_numeric("1.234"), Some(1.234));
        assert_eq!(extract_numeric("2.5e-3"), Some(0.0025));
    }

    #[test]
    fn non_numeric_text_passes_through() {
        assert_eq!(format_measurement("----", "V"), "----");
        assert_eq!(format_measurement("ERR 42", ""), "ERR 42");
        assert_eq!(extract_numeric("----"), None);
    }

    #[test]
    fn mode_tables_cover_known_codes_and_fall_through() {
        assert_eq!(mode_label("VOLT"), "Tension continue");
        assert_eq!(mode_label("curr ac"), "Courant alternatif");
        assert_eq!(mode_unit("RES"), "Ω");
        assert_eq!(mode_unit("volt"), "V");
        // Unknown codes: name passes through, unit stays empty.
        assert_eq!(mode_label("TEMP"), "TEMP");
        assert_eq!(mode_unit("TEMP"), "");
    }
}
