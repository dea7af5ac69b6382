//! Page sections

use serde::{Deserialize, Serialize};
use std::fmt;

/// Anchor id of a page region, without the leading `#`
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SectionId(String);

impl SectionId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// `#home`
    pub fn href(&self) -> String {
        format!("#{}", self.0)
    }

    /// Nav label: the id with its first character upper-cased.
    pub fn label(&self) -> String {
        let mut chars = self.0.chars();
        match chars.next() {
            Some(first) => first.to_uppercase().chain(chars).collect(),
            None => String::new(),
        }
    }
}

impl fmt::Display for SectionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for SectionId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

impl PartialEq<str> for SectionId {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for SectionId {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

/// A scroll-spy target
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Section {
    pub id: SectionId,
    /// Visible ratio at which the section becomes active
    #[serde(default = "default_threshold")]
    pub threshold: f64,
}

fn default_threshold() -> f64 {
    Section::DEFAULT_THRESHOLD
}

impl Section {
    pub const DEFAULT_THRESHOLD: f64 = 0.6;

    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: SectionId::new(id),
            threshold: Self::DEFAULT_THRESHOLD,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_label_capitalises_first_letter() {
        assert_eq!(SectionId::new("services").label(), "Services");
        assert_eq!(SectionId::new("home").label(), "Home");
        assert_eq!(SectionId::new("").label(), "");
    }

    #[test]
    fn test_href() {
        assert_eq!(SectionId::new("contact").href(), "#contact");
    }
}
