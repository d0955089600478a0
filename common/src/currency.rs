use serde::{Deserialize, Serialize};
use std::fmt;

pub const RUPEE: char = '₹';

/// Digit grouping used when displaying prices. Amounts are always stored as
/// whole rupees.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Grouping {
    /// Groups of three: 1,250,000.
    #[default]
    International,
    /// Lakh/crore: 12,50,000.
    Indian,
}

impl fmt::Display for Grouping {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl Grouping {
    pub fn label(&self) -> &'static str {
        match self {
            Grouping::International => "International",
            Grouping::Indian => "Indian",
        }
    }
}

/// Insert thousands separators into `amount` per `grouping`.
///
/// The last three digits always form one group; the digits before them are
/// grouped in threes or twos.
pub fn group_digits(amount: u64, grouping: Grouping) -> String {
    let digits = amount.to_string();
    if digits.len() <= 3 {
        return digits;
    }
    let width = match grouping {
        Grouping::International => 3,
        Grouping::Indian => 2,
    };
    let (lead, last) = digits.split_at(digits.len() - 3);

    let mut out = String::with_capacity(digits.len() + digits.len() / 2);
    for (i, ch) in lead.chars().enumerate() {
        if i > 0 && (lead.len() - i) % width == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out.push(',');
    out.push_str(last);
    out
}

/// Format a whole-rupee amount for display, e.g. `₹12,500`.
pub fn format_rupees(amount: u64, grouping: Grouping) -> String {
    format!("{RUPEE}{}", group_digits(amount, grouping))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn international_grouping() {
        assert_eq!(group_digits(0, Grouping::International), "0");
        assert_eq!(group_digits(499, Grouping::International), "499");
        assert_eq!(group_digits(1850, Grouping::International), "1,850");
        assert_eq!(group_digits(125_000, Grouping::International), "125,000");
        assert_eq!(group_digits(1_250_000, Grouping::International), "1,250,000");
    }

    #[test]
    fn indian_grouping() {
        assert_eq!(group_digits(499, Grouping::Indian), "499");
        assert_eq!(group_digits(1850, Grouping::Indian), "1,850");
        assert_eq!(group_digits(12_500, Grouping::Indian), "12,500");
        assert_eq!(group_digits(125_000, Grouping::Indian), "1,25,000");
        assert_eq!(group_digits(12_500_000, Grouping::Indian), "1,25,00,000");
    }

    #[test]
    fn rupee_prefix() {
        assert_eq!(format_rupees(12_500, Grouping::International), "₹12,500");
        assert_eq!(format_rupees(120, Grouping::Indian), "₹120");
    }
}
