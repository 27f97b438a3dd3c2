//! Display formatting for dashboard figures.

/// Formats amounts and counts for display
#[derive(Debug, Clone)]
pub struct MoneyFormatter {
    currency_symbol: String,
}

impl MoneyFormatter {
    pub fn new(currency_symbol: impl Into<String>) -> Self {
        Self {
            currency_symbol: currency_symbol.into(),
        }
    }

    /// Currency amount with thousands separators and two decimals, e.g. `R$ 1,234.50`
    pub fn format_amount(&self, amount: f64) -> String {
        format!("{} {}", self.currency_symbol, group_thousands(amount, 2))
    }

    /// Plain number with thousands separators and a fixed number of decimals
    pub fn format_number(&self, value: f64, decimals: usize) -> String {
        group_thousands(value, decimals)
    }
}

impl Default for MoneyFormatter {
    fn default() -> Self {
        Self::new("R$")
    }
}

fn group_thousands(value: f64, decimals: usize) -> String {
    let formatted = format!("{:.*}", decimals, value.abs());
    let (integer_part, fraction) = match formatted.split_once('.') {
        Some((integer_part, fraction)) => (integer_part, Some(fraction)),
        None => (formatted.as_str(), None),
    };

    let digits: Vec<char> = integer_part.chars().collect();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (index, digit) in digits.iter().enumerate() {
        if index > 0 && (digits.len() - index) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(*digit);
    }

    // Rounding can turn a tiny negative into zero; never print "-0.00"
    let is_negative = value < 0.0 && formatted.chars().any(|c| c.is_ascii_digit() && c != '0');
    let sign = if is_negative { "-" } else { "" };

    match fraction {
        Some(fraction) => format!("{}{}.{}", sign, grouped, fraction),
        None => format!("{}{}", sign, grouped),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_amount() {
        let formatter = MoneyFormatter::default();
        assert_eq!(formatter.format_amount(0.0), "R$ 0.00");
        assert_eq!(formatter.format_amount(900.0), "R$ 900.00");
        assert_eq!(formatter.format_amount(1234.5), "R$ 1,234.50");
        assert_eq!(formatter.format_amount(1_234_567.891), "R$ 1,234,567.89");
    }

    #[test]
    fn test_format_number() {
        let formatter = MoneyFormatter::new("$");
        assert_eq!(formatter.format_number(128.571, 0), "129");
        assert_eq!(formatter.format_number(4.2857, 1), "4.3");
        assert_eq!(formatter.format_number(12_000.0, 0), "12,000");
        assert_eq!(formatter.format_number(-1500.25, 2), "-1,500.25");
        assert_eq!(formatter.format_number(-0.001, 2), "0.00");
    }

    #[test]
    fn test_custom_symbol() {
        let formatter = MoneyFormatter::new("€");
        assert_eq!(formatter.format_amount(30.0), "€ 30.00");
    }
}
