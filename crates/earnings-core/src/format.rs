//! Display formatting: Brazilian Real, pt-BR conventions.

/// Format `amount` as `R$ 1.234,56` (non-breaking space after the symbol).
pub fn format_brl(amount: f64) -> String {
    if !amount.is_finite() {
        return "R$\u{a0}--".to_string();
    }
    let cents = (amount.abs() * 100.0).round() as u128;
    let sign = if amount < 0.0 && cents > 0 { "-" } else { "" };
    format!(
        "{sign}R$\u{a0}{},{:02}",
        group_thousands(cents / 100),
        cents % 100
    )
}

fn group_thousands(value: u128) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push('.');
        }
        out.push(ch);
    }
    out
}

/// Working window label, e.g. `8h às 17h`.
pub fn format_hour_range(start: u8, end: u8) -> String {
    format!("{start}h às {end}h")
}
