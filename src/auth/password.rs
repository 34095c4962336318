//! Password strength rating for the signup form.

/// Coarse strength buckets keyed off password length.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Strength {
    Weak,
    Medium,
    Strong,
}

impl Strength {
    /// Label shown next to the strength meter.
    pub fn label(&self) -> &'static str {
        match self {
            Strength::Weak => "Weak",
            Strength::Medium => "Medium",
            Strength::Strong => "Strong",
        }
    }

    /// Filled segments out of 3 for the meter bar.
    pub fn segments(&self) -> usize {
        match self {
            Strength::Weak => 1,
            Strength::Medium => 2,
            Strength::Strong => 3,
        }
    }
}

/// Rate a password. Empty input has no rating and the meter stays hidden.
pub fn evaluate(password: &str) -> Option<Strength> {
    let len = password.chars().count();
    if len > 10 {
        Some(Strength::Strong)
    } else if len > 6 {
        Some(Strength::Medium)
    } else if len > 0 {
        Some(Strength::Weak)
    } else {
        None
    }
}
