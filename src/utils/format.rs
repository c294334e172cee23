// src/utils/format.rs
use crate::generators::charset::CharacterClass;
use crate::models::PasswordPolicy;

// Entropy with one decimal place
pub fn format_entropy(bits: f64) -> String {
    format!("{:.1} bits", bits)
}

// Truncate a string if it's too long
pub fn truncate_string(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else {
        let kept: String = s.chars().take(max_len.saturating_sub(3)).collect();
        format!("{}...", kept)
    }
}

// One-line description of a policy, e.g. "Length: 16 | A-Z a-z 0-9 | Symbols: !@#"
pub fn policy_summary(policy: &PasswordPolicy) -> String {
    let mut parts = vec![format!("Length: {}", policy.length)];

    let classes: Vec<&str> = policy
        .enabled_classes()
        .into_iter()
        .filter_map(|class| match class {
            CharacterClass::Uppercase => Some("A-Z"),
            CharacterClass::Lowercase => Some("a-z"),
            CharacterClass::Numbers => Some("0-9"),
            CharacterClass::Symbols => None,
        })
        .collect();
    if !classes.is_empty() {
        parts.push(classes.join(" "));
    }

    if policy.include_symbols {
        parts.push(format!("Symbols: {}", truncate_string(policy.symbol_set(), 24)));
    } else {
        parts.push("No symbols".to_string());
    }

    parts.join(" | ")
}
