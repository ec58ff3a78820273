// Display helpers shared by the engine logs and the GUI.

/// Formats a price as US dollars with thousands separators, e.g. `$50,123.45`.
pub fn format_currency(value: f64) -> String {
    let sign = if value < 0.0 { "-" } else { "" };
    let fixed = format!("{:.2}", value.abs());
    let (int_part, frac_part) = fixed.split_once('.').unwrap_or((fixed.as_str(), "00"));
    format!("{}${}.{}", sign, group_thousands(int_part), frac_part)
}

/// Whole-number variant used for axis ticks, e.g. `$50,123`.
pub fn format_currency_whole(value: f64) -> String {
    let sign = if value < 0.0 { "-" } else { "" };
    let fixed = format!("{:.0}", value.abs());
    format!("{}${}", sign, group_thousands(&fixed))
}

fn group_thousands(digits: &str) -> String {
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}
