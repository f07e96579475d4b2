//! Money formatting for display.

use skyseat_core::Amount;

/// Plain amount: whole values without decimals, others with up to two.
///
/// `100.0` -> `"$100"`, `150.5` -> `"$150.5"`.
pub fn money(symbol: &str, amount: Amount) -> String {
    format!("{}{}", symbol, plain(amount))
}

/// Amount with thousands separators, e.g. `"$12,345.5"`.
pub fn money_grouped(symbol: &str, amount: Amount) -> String {
    let text = plain(amount.abs());
    let (int_part, frac_part) = match text.split_once('.') {
        Some((int_part, frac_part)) => (int_part, Some(frac_part)),
        None => (text.as_str(), None),
    };

    let mut grouped = String::with_capacity(int_part.len() + int_part.len() / 3);
    for (i, ch) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    if let Some(frac_part) = frac_part {
        grouped.push('.');
        grouped.push_str(frac_part);
    }

    let sign = if amount < 0.0 { "-" } else { "" };
    format!("{}{}{}", sign, symbol, grouped)
}

fn plain(amount: Amount) -> String {
    let rounded = (amount * 100.0).round() / 100.0;
    if rounded.fract() == 0.0 {
        format!("{:.0}", rounded)
    } else {
        let text = format!("{:.2}", rounded);
        text.trim_end_matches('0').to_string()
    }
}
