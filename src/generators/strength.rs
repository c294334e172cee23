// src/generators/strength.rs
use super::charset;
use crate::models::{PasswordPolicy, StrengthResult, StrengthTier};

/// Brute-force search space of `policy` in bits: `length * log2(charset size)`.
pub fn calculate_entropy(policy: &PasswordPolicy) -> f64 {
    let charset_size = charset::size(policy);
    if charset_size == 0 {
        return 0.0;
    }

    policy.length as f64 * (charset_size as f64).log2()
}

/// Map entropy bits onto a strength tier. Bounds are strict less-than.
pub fn strength_level(entropy: f64) -> StrengthResult {
    let tier = if entropy < 40.0 {
        StrengthTier::Weak
    } else if entropy < 60.0 {
        StrengthTier::Fair
    } else if entropy < 80.0 {
        StrengthTier::Good
    } else if entropy < 100.0 {
        StrengthTier::Strong
    } else {
        StrengthTier::Excellent
    };

    StrengthResult {
        entropy_bits: entropy,
        tier,
        display_percentage: tier.percentage(),
    }
}

pub fn analyze_policy(policy: &PasswordPolicy) -> StrengthResult {
    strength_level(calculate_entropy(policy))
}
