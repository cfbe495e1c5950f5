//! ASCII bar chart for dimension strength

const FILLED: char = '█';
const EMPTY: char = '░';

/// Render `|value| / max` as a fixed-width bar plus a percentage
///
/// The ratio is clamped to 1.0. `max` and `width` must be non-zero;
/// configuration validation enforces that upstream.
pub fn bar_chart(value: f64, max: u32, width: usize) -> String {
    let ratio = if max == 0 {
        1.0
    } else {
        (value.abs() / max as f64).min(1.0)
    };
    let filled = ((ratio * width as f64).round() as usize).min(width);
    let empty = width - filled;

    format!(
        "{}{} {}%",
        FILLED.to_string().repeat(filled),
        EMPTY.to_string().repeat(empty),
        (ratio * 100.0).round() as u32
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_value() {
        assert_eq!(bar_chart(0.0, 8, 10), "░░░░░░░░░░ 0%");
    }

    #[test]
    fn test_full_value() {
        assert_eq!(bar_chart(8.0, 8, 10), "██████████ 100%");
    }

    #[test]
    fn test_clamped_above_max() {
        assert_eq!(bar_chart(20.0, 8, 10), bar_chart(8.0, 8, 10));
    }

    #[test]
    fn test_negative_uses_magnitude() {
        assert_eq!(bar_chart(-4.0, 8, 10), bar_chart(4.0, 8, 10));
        assert_eq!(bar_chart(-4.0, 8, 10), "█████░░░░░ 50%");
    }

    #[test]
    fn test_rounding() {
        // 2/8 = 25% -> 2.5 cells rounds up to 3
        assert_eq!(bar_chart(2.0, 8, 10), "███░░░░░░░ 25%");
        // 6/8 = 75% -> 7.5 cells rounds up to 8
        assert_eq!(bar_chart(6.0, 8, 10), "████████░░ 75%");
    }

    #[test]
    fn test_custom_width() {
        assert_eq!(bar_chart(4.0, 8, 4), "██░░ 50%");
    }

    #[test]
    fn test_fractional_value() {
        // 3/8 = 37.5% -> 3.75 cells rounds to 4
        assert_eq!(bar_chart(3.0, 8, 10), "████░░░░░░ 38%");
        assert_eq!(bar_chart(0.5, 1, 2), "█░ 50%");
    }
}
