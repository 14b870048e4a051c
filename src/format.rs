//! Display formatting for rupee amounts and percentages

const RUPEE: char = '₹';

/// Format an amount as Indian Rupees with no decimal places
///
/// Uses Indian digit grouping: the last three digits, then groups of two
/// (`₹11,61,695`). Negative amounts put the sign before the symbol.
pub fn format_inr(amount: f64) -> String {
    if amount.is_nan() {
        return format!("{}NaN", RUPEE);
    }

    let sign = if amount < 0.0 { "-" } else { "" };
    if amount.is_infinite() {
        return format!("{}{}∞", sign, RUPEE);
    }

    // half away from zero, then drop the sign
    let whole = format!("{:.0}", amount.abs().round());
    if whole == "0" {
        return format!("{}0", RUPEE);
    }

    format!("{}{}{}", sign, RUPEE, group_indian(&whole))
}

/// Insert Indian-style separators into a string of ASCII digits
fn group_indian(digits: &str) -> String {
    if digits.len() <= 3 {
        return digits.to_string();
    }

    let (head, tail) = digits.split_at(digits.len() - 3);
    let mut groups: Vec<&str> = Vec::new();
    let mut end = head.len();
    while end > 0 {
        let start = end.saturating_sub(2);
        groups.push(&head[start..end]);
        end = start;
    }
    groups.reverse();

    format!("{},{}", groups.join(","), tail)
}

/// Format a percentage with a fixed number of decimals (`93.62%`)
pub fn format_percent(value: f64, decimals: usize) -> String {
    format!("{:.*}%", decimals, value)
}
