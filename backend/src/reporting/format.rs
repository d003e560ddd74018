//! Display formatting for report labels and value annotations
//!
//! Rounding here is presentation only; report matrices keep full precision.

/// Currency symbol used when none is configured
pub const DEFAULT_CURRENCY_SYMBOL: &str = "€";

/// Format an amount with two decimals and the symbol, e.g. `"3.07€"`.
///
/// `{:.2}` rounds the exact binary value half to even. Scaling by 100
/// first would round twice and move values like 2.675 the wrong way.
pub fn format_currency(value: f64, symbol: &str) -> String {
    format!("{:.2}{}", value, symbol)
}

/// Bar label for one item: `"{name} ({total}€)"`
pub fn item_label(name: &str, total_cost: f64, symbol: &str) -> String {
    format!("{} ({})", name, format_currency(total_cost, symbol))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_currency_rounds_the_stored_value() {
        // 0.005 is stored slightly above the tie, 0.015 and 2.675 below it
        assert_eq!(format_currency(0.005, "€"), "0.01€");
        assert_eq!(format_currency(0.015, "€"), "0.01€");
        assert_eq!(format_currency(0.025, "€"), "0.03€");
        assert_eq!(format_currency(1.115, "€"), "1.11€");
        assert_eq!(format_currency(2.675, "€"), "2.67€");
        assert_eq!(format_currency(3.0745185, "€"), "3.07€");
    }

    #[test]
    fn test_format_currency_exact_ties_go_to_even() {
        assert_eq!(format_currency(0.125, "€"), "0.12€");
        assert_eq!(format_currency(0.375, "€"), "0.38€");
    }

    #[test]
    fn test_format_currency_pads_to_two_decimals() {
        assert_eq!(format_currency(5.0, "€"), "5.00€");
        assert_eq!(format_currency(1.0745185, "$"), "1.07$");
        assert_eq!(format_currency(0.0, "€"), "0.00€");
    }

    #[test]
    fn test_item_label() {
        assert_eq!(item_label("Messeturm", 29.456, "€"), "Messeturm (29.46€)");
    }
}
