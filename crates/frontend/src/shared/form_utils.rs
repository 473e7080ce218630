/// Utilities for form input coercion

/// Parse the value of a numeric input into f64
///
/// Пустая строка и нечисловой ввод сводятся к нулю: поле формы никогда
/// не хранит NaN.
pub fn parse_cost_input(value: &str) -> f64 {
    value.trim().parse::<f64>().unwrap_or(0.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parses_integer() {
        assert_eq!(parse_cost_input("150"), 150.0);
    }

    #[test]
    fn test_parses_fractional() {
        // Дробное значение проходит в форму, его отклонит валидация
        assert_eq!(parse_cost_input("3.5"), 3.5);
    }

    #[test]
    fn test_non_numeric_coerced_to_zero() {
        assert_eq!(parse_cost_input("abc"), 0.0);
        assert_eq!(parse_cost_input("12abc"), 0.0);
    }

    #[test]
    fn test_empty_coerced_to_zero() {
        assert_eq!(parse_cost_input(""), 0.0);
        assert_eq!(parse_cost_input("   "), 0.0);
    }

    #[test]
    fn test_negative_value() {
        assert_eq!(parse_cost_input("-20"), -20.0);
    }
}
