//! Contact form model
//!
//! The form collects details only; it is not sent anywhere.

use crate::{SiteError, SiteResult};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ServiceOption {
    BlockchainDevelopment,
    Web3Consulting,
    DefiSolutions,
    SecurityAudits,
    InnovationLabs,
    LearningAndTraining,
}

impl ServiceOption {
    pub const ALL: [ServiceOption; 6] = [
        ServiceOption::BlockchainDevelopment,
        ServiceOption::Web3Consulting,
        ServiceOption::DefiSolutions,
        ServiceOption::SecurityAudits,
        ServiceOption::InnovationLabs,
        ServiceOption::LearningAndTraining,
    ];

    pub fn title(self) -> &'static str {
        match self {
            ServiceOption::BlockchainDevelopment => "Blockchain Development",
            ServiceOption::Web3Consulting => "Web3 Consulting",
            ServiceOption::DefiSolutions => "DeFi Solutions",
            ServiceOption::SecurityAudits => "Security Audits",
            ServiceOption::InnovationLabs => "Innovation Labs",
            ServiceOption::LearningAndTraining => "Learning & Training",
        }
    }

    /// Value of the `<option>` element
    pub fn slug(self) -> &'static str {
        match self {
            ServiceOption::BlockchainDevelopment => "blockchain-development",
            ServiceOption::Web3Consulting => "web3-consulting",
            ServiceOption::DefiSolutions => "defi-solutions",
            ServiceOption::SecurityAudits => "security-audits",
            ServiceOption::InnovationLabs => "innovation-labs",
            ServiceOption::LearningAndTraining => "learning-and-training",
        }
    }
}

impl fmt::Display for ServiceOption {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.title())
    }
}

impl FromStr for ServiceOption {
    type Err = SiteError;

    /// Accepts either the slug or the display title.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        Self::ALL
            .into_iter()
            .find(|opt| opt.slug() == s || opt.title().eq_ignore_ascii_case(s))
            .ok_or_else(|| SiteError::UnknownService(s.to_string()))
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactForm {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    /// WhatsApp number
    pub phone: String,
    pub company: String,
    pub service: Option<ServiceOption>,
    pub project: String,
}

impl ContactForm {
    /// Set the service from a `<select>` value. The empty placeholder
    /// clears it.
    pub fn select_service(&mut self, value: &str) -> SiteResult<()> {
        self.service = if value.trim().is_empty() {
            None
        } else {
            Some(value.parse()?)
        };
        Ok(())
    }

    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name.trim(), self.last_name.trim())
            .trim()
            .to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::SERVICES;

    #[test]
    fn test_options_match_service_cards() {
        let titles: Vec<_> = ServiceOption::ALL.iter().map(|o| o.title()).collect();
        let cards: Vec<_> = SERVICES.iter().map(|s| s.title).collect();
        assert_eq!(titles, cards);
    }

    #[test]
    fn test_parse_slug_and_title() {
        for opt in ServiceOption::ALL {
            assert_eq!(opt.slug().parse::<ServiceOption>().unwrap(), opt);
            assert_eq!(opt.to_string().parse::<ServiceOption>().unwrap(), opt);
        }
        assert!("Mining".parse::<ServiceOption>().is_err());
    }

    #[test]
    fn test_select_service_placeholder_clears() {
        let mut form = ContactForm::default();
        form.select_service("defi-solutions").unwrap();
        assert_eq!(form.service, Some(ServiceOption::DefiSolutions));
        form.select_service("").unwrap();
        assert_eq!(form.service, None);
        assert!(form.select_service("nope").is_err());
    }

    #[test]
    fn test_full_name() {
        let form = ContactForm {
            first_name: " Ada ".into(),
            last_name: "Lovelace".into(),
            ..Default::default()
        };
        assert_eq!(form.full_name(), "Ada Lovelace");
        assert_eq!(ContactForm::default().full_name(), "");
    }
}
