/// Format an amount with thousands separators and two decimals: `1.234,50`
pub fn format_money(value: f64) -> String {
    let negative = value < 0.0;
    let cents = (value.abs() * 100.0).round() as u64;
    let int_part = (cents / 100).to_string();
    let frac = cents % 100;

    let mut grouped = String::new();
    for (i, ch) in int_part.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            grouped.push('.');
        }
        grouped.push(ch);
    }
    let int_grouped: String = grouped.chars().rev().collect();

    format!("{}{},{:02}", if negative { "-" } else { "" }, int_grouped, frac)
}

/// Parse user input like "1.234,5" or "1234.5" into an amount
pub fn parse_money(input: &str) -> Option<f64> {
    let trimmed = input.trim().replace(' ', "");
    if trimmed.is_empty() {
        return None;
    }
    let normalized = if trimmed.contains(',') {
        trimmed.replace('.', "").replace(',', ".")
    } else {
        trimmed
    };
    normalized.parse::<f64>().ok().filter(|v| v.is_finite())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_money() {
        assert_eq!(format_money(0.0), "0,00");
        assert_eq!(format_money(12.5), "12,50");
        assert_eq!(format_money(1234.5), "1.234,50");
        assert_eq!(format_money(1234567.891), "1.234.567,89");
        assert_eq!(format_money(-45.1), "-45,10");
    }

    #[test]
    fn test_parse_money() {
        assert_eq!(parse_money("1.234,5"), Some(1234.5));
        assert_eq!(parse_money("1234.5"), Some(1234.5));
        assert_eq!(parse_money(" 80 "), Some(80.0));
        assert_eq!(parse_money(""), None);
        assert_eq!(parse_money("abc"), None);
    }
}
