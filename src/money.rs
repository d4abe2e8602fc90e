//! Currency and quantity display formatting.
//!
//! Amounts render with two fixed decimals and en-IN digit grouping (last three
//! digits, then groups of two): `1,234.50`, `12,34,567.89`. Missing values
//! display as zero.

/// Format an amount with en-IN grouping and two decimals.
pub fn inr(amount: f64) -> String {
    let negative = amount < 0.0;
    let fixed = format!("{:.2}", amount.abs());
    let (int_part, frac_part) = match fixed.split_once('.') {
        Some((i, f)) => (i, f),
        None => (fixed.as_str(), "00"),
    };

    let grouped = group_indian(int_part);
    if negative {
        format!("-{grouped}.{frac_part}")
    } else {
        format!("{grouped}.{frac_part}")
    }
}

/// Absent amounts display as `0.00`.
pub fn inr_opt(amount: Option<f64>) -> String {
    inr(amount.unwrap_or(0.0))
}

/// Plain two-decimal quantity, no grouping.
pub fn qty(amount: Option<f64>) -> String {
    format!("{:.2}", amount.unwrap_or(0.0))
}

fn group_indian(digits: &str) -> String {
    if digits.len() <= 3 {
        return digits.to_string();
    }

    let (head, tail) = digits.split_at(digits.len() - 3);
    let mut groups: Vec<&str> = Vec::new();
    let bytes = head.as_bytes();
    let mut end = bytes.len();
    while end > 2 {
        groups.push(&head[end - 2..end]);
        end -= 2;
    }
    groups.push(&head[..end]);
    groups.reverse();
    format!("{},{}", groups.join(","), tail)
}
