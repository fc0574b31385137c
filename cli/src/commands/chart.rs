use std::fmt::Write;

use kibble_core::models::RationReport;

use super::helpers::{format_grams, format_kcal};

const MAX_BAR: f64 = 30.0;

/// Render the grouped requirement-vs-intake chart: two series over three
/// nutrient categories. Bars are scaled within each category so the larger
/// of the two spans the full width; a zero value renders an empty bar.
pub(crate) fn render_chart(report: &RationReport) -> String {
    let categories: [(&str, f64, f64, fn(f64) -> String); 3] = [
        (
            "Calories",
            report.daily_energy_kcal,
            report.supplied_calories_kcal,
            format_kcal,
        ),
        (
            "Protein",
            report.required_protein_g,
            report.supplied_protein_g,
            format_grams,
        ),
        (
            "Fat",
            report.required_fat_g,
            report.supplied_fat_g,
            format_grams,
        ),
    ];

    let mut out = String::new();
    for (name, required, supplied, fmt) in categories {
        let _ = writeln!(out, "  {name}");
        let max = required.max(supplied);
        for (series, value) in [("daily requirement", required), ("daily intake", supplied)] {
            let bar = "█".repeat(bar_len(value, max));
            let display = fmt(value);
            let _ = writeln!(out, "    {series:<17}  {bar} {display}");
        }
        let _ = writeln!(out);
    }
    out
}

// Past the guard the ratio is positive, so the cast cannot lose a sign.
#[allow(clippy::cast_sign_loss)]
fn bar_len(value: f64, max: f64) -> usize {
    if value <= 0.0 || max <= 0.0 {
        return 0;
    }
    (value / max * MAX_BAR).round() as usize
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_report() -> RationReport {
        RationReport {
            body_weight_kg: 10.0,
            activity: None,
            food: None,
            feeding_weight_g: 150.0,
            daily_energy_kcal: 629.8,
            required_protein_g: 113.4,
            required_fat_g: 34.6,
            supplied_calories_kcal: 525.0,
            supplied_protein_g: 37.5,
            supplied_fat_g: 22.5,
            suggested_portion_g: 179.9,
        }
    }

    fn zero_report() -> RationReport {
        RationReport {
            body_weight_kg: 0.0,
            activity: None,
            food: None,
            feeding_weight_g: 0.0,
            daily_energy_kcal: 0.0,
            required_protein_g: 0.0,
            required_fat_g: 0.0,
            supplied_calories_kcal: 0.0,
            supplied_protein_g: 0.0,
            supplied_fat_g: 0.0,
            suggested_portion_g: 0.0,
        }
    }

    #[test]
    fn test_bar_len_scales_within_category() {
        assert_eq!(bar_len(629.8, 629.8), 30);
        assert_eq!(bar_len(525.0, 629.8), 25);
        assert_eq!(bar_len(37.5, 113.4), 10);
        assert_eq!(bar_len(0.0, 113.4), 0);
    }

    #[test]
    fn test_bar_len_degenerate() {
        assert_eq!(bar_len(5.0, 0.0), 0);
        assert_eq!(bar_len(-1.0, 10.0), 0);
    }

    #[test]
    fn test_chart_contains_categories_and_series() {
        let chart = render_chart(&sample_report());
        for label in ["Calories", "Protein", "Fat", "daily requirement", "daily intake"] {
            assert!(chart.contains(label), "missing {label}");
        }
    }

    #[test]
    fn test_chart_bars_labeled_with_formatted_values() {
        let chart = render_chart(&sample_report());
        assert!(chart.contains("629.8kcal"));
        assert!(chart.contains(&format!("{} 525.0kcal", "█".repeat(25))));
        assert!(chart.contains(&format!("{} 37.5g", "█".repeat(10))));
    }

    #[test]
    fn test_chart_full_width_bar_for_category_max() {
        let chart = render_chart(&sample_report());
        assert!(chart.contains(&"█".repeat(30)));
    }

    #[test]
    fn test_chart_zero_values_render_empty_bars() {
        let chart = render_chart(&zero_report());
        assert!(!chart.contains('█'));
        assert!(chart.contains("0.0kcal"));
        assert!(chart.contains("0.0g"));
    }

    #[test]
    fn test_chart_intake_can_dominate() {
        let mut report = sample_report();
        report.supplied_calories_kcal = 1259.6;
        let chart = render_chart(&report);
        // Intake is now the category max; requirement scales to half
        assert!(chart.contains(&format!("{} 629.8kcal", "█".repeat(15))));
        assert!(chart.contains(&format!("{} 1259.6kcal", "█".repeat(30))));
    }
}
