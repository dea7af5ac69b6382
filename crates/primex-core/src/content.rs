//! Page copy and static data

use crate::slider::Slide;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Service {
    pub title: &'static str,
    pub description: &'static str,
    pub features: [&'static str; 4],
    pub icon: &'static str,
    /// Tailwind text colour for the icon
    pub accent: &'static str,
}

pub const SERVICES: [Service; 6] = [
    Service {
        title: "Blockchain Development",
        description: "Custom smart contracts, DApps, tokens, and seamless Web3 integration.",
        features: [
            "Smart Contract Development",
            "DApp Creation",
            "Token Development",
            "Web3 Integration",
        ],
        icon: "💻",
        accent: "text-cyan-400",
    },
    Service {
        title: "Web3 Consulting",
        description: "Strategy, technology assessment, implementation planning, and risk analysis.",
        features: [
            "Strategy Development",
            "Technology Assessment",
            "Implementation Planning",
            "Risk Analysis",
        ],
        icon: "🏛",
        accent: "text-blue-400",
    },
    Service {
        title: "DeFi Solutions",
        description: "Decentralized finance products: protocol design, liquidity, and governance.",
        features: [
            "DeFi Protocol Design",
            "Yield Farming",
            "Liquidity Solutions",
            "Governance Tokens",
        ],
        icon: "⟠",
        accent: "text-purple-400",
    },
    Service {
        title: "Security Audits",
        description: "Smart contract audits, pen testing, and compliance reviews for peace of mind.",
        features: [
            "Smart Contract Audits",
            "Penetration Testing",
            "Security Best Practices",
            "Compliance Review",
        ],
        icon: "🛡",
        accent: "text-red-400",
    },
    Service {
        title: "Innovation Labs",
        description: "Rapid prototyping, POCs and MVPs to validate new Web3 ideas.",
        features: [
            "Proof of Concept",
            "Rapid Prototyping",
            "MVP Development",
            "Technology Research",
        ],
        icon: "💡",
        accent: "text-yellow-400",
    },
    Service {
        title: "Learning & Training",
        description: "Workshops and bootcamps to upskill your team in blockchain tech.",
        features: [
            "Web3 Workshops",
            "Blockchain Training",
            "Developer Bootcamps",
            "Executive Education",
        ],
        icon: "🎓",
        accent: "text-green-400",
    },
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TechLogo {
    pub name: &'static str,
    pub icon: &'static str,
}

pub const TECH_LOGOS: [TechLogo; 8] = [
    TechLogo { name: "Solidity", icon: "◆" },
    TechLogo { name: "Ethereum", icon: "⟠" },
    TechLogo { name: "Polygon", icon: "⬡" },
    TechLogo { name: "Rust", icon: "⚙" },
    TechLogo { name: "React", icon: "⚛" },
    TechLogo { name: "Next.js", icon: "▲" },
    TechLogo { name: "Auditing", icon: "🛡" },
    TechLogo { name: "DApps", icon: "💻" },
];

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Metric {
    pub stat: &'static str,
    pub description: &'static str,
    /// Reveal delay in seconds
    pub delay: f32,
}

pub const METRICS: [Metric; 4] = [
    Metric { stat: "50+", description: "Successful Web3 Projects", delay: 0.1 },
    Metric { stat: "99.9%", description: "Security Score Average", delay: 0.2 },
    Metric { stat: "12+", description: "Years of Expert Experience", delay: 0.3 },
    Metric { stat: "24/7", description: "Dedicated Global Support", delay: 0.4 },
];

pub fn portfolio_slides() -> Vec<Slide> {
    vec![
        Slide::new(
            1,
            "/assets/TekCentra.png",
            "TekCentra",
            "Partnering to build secure enterprise blockchain infrastructure.",
        ),
        Slide::new(
            2,
            "/assets/BlockchainAfrica.jpg",
            "Blockchain Africa",
            "Driving financial inclusion through decentralized solutions across the continent.",
        ),
        Slide::new(
            3,
            "/assets/PowerHouse.jpg",
            "PowerHouse Energy",
            "Consulting on tokenization of real-world assets and energy credits.",
        ),
    ]
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Quote {
    pub text: &'static str,
    pub author: &'static str,
    pub role: &'static str,
}

pub const QUOTES: [Quote; 3] = [
    Quote {
        text: "Primex took our tokenization idea from a whiteboard sketch to an audited mainnet launch in one quarter.",
        author: "Amara Okafor",
        role: "COO, PowerHouse Energy",
    },
    Quote {
        text: "Their audit caught issues three other firms missed. We ship with confidence now.",
        author: "Daniel Mensah",
        role: "CTO, TekCentra",
    },
    Quote {
        text: "The training bootcamp turned our web developers into productive Solidity engineers.",
        author: "Lindiwe Dlamini",
        role: "Programme Lead, Blockchain Africa",
    },
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Value {
    pub title: &'static str,
    pub description: &'static str,
    pub icon: &'static str,
}

pub const VALUES: [Value; 4] = [
    Value {
        title: "Transparency",
        description: "Open processes, open code and clear communication at every milestone.",
        icon: "🔍",
    },
    Value {
        title: "Security First",
        description: "Every contract we ship is reviewed, tested and audited before it touches mainnet.",
        icon: "🛡",
    },
    Value {
        title: "Collaboration",
        description: "We embed with your team and leave it stronger than we found it.",
        icon: "🤝",
    },
    Value {
        title: "Innovation",
        description: "We prototype fast and keep what survives contact with real users.",
        icon: "💡",
    },
];

pub const MISSION_STATEMENT: &str = "To democratize access to Web3 technology by providing world-class consulting, development, and education. We are dedicated to building a transparent, collaborative, and innovative digital future for everyone.";

pub const MISSION_PILLARS: [&str; 3] = [
    "Fostering widespread adoption of blockchain technology.",
    "Creating an ecosystem built on trust and security.",
    "Empowering the next generation of Web3 builders.",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SocialLink {
    pub name: &'static str,
    pub href: &'static str,
    pub icon: &'static str,
}

pub const SOCIAL_LINKS: [SocialLink; 3] = [
    SocialLink {
        name: "Instagram",
        href: "https://www.instagram.com/primexbusiness.agency",
        icon: "📷",
    },
    SocialLink {
        name: "Facebook",
        href: "https://www.facebook.com/share/1BL1W4iMQY/",
        icon: "📘",
    },
    SocialLink {
        name: "X",
        href: "https://x.com/primexconsults",
        icon: "𝕏",
    },
];

pub const CONTACT_EMAIL: &str = "Primexconsults@gmail.com";

pub const TAGLINE: &str =
    "Architecting the decentralized future with comprehensive Web3 solutions and expert consulting.";

pub const COPYRIGHT: &str = "© 2025 Primex Business. All rights reserved.";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_service_titles_are_unique() {
        let mut titles: Vec<_> = SERVICES.iter().map(|s| s.title).collect();
        titles.sort_unstable();
        titles.dedup();
        assert_eq!(titles.len(), SERVICES.len());
    }

    #[test]
    fn test_metric_delays_are_staggered() {
        assert!(METRICS.windows(2).all(|w| w[0].delay < w[1].delay));
    }

    #[test]
    fn test_social_links_are_external() {
        assert!(SOCIAL_LINKS.iter().all(|l| l.href.starts_with("https://")));
    }
}
