/// Amount with exactly two decimal places, followed by the currency name as
/// given in the source (ex. "1234.50 USD", "31957.58 руб.").
///
/// No thousands separators and '.' as decimal mark, regardless of currency.
pub(crate) fn format_amount(amount: f64, currency_name: &str) -> String {
    format!("{:.2} {}", amount, currency_name)
}
