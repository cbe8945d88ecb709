//! Legal regimes a scanned site can be tagged with

use serde::{Deserialize, Serialize};

/// Inferred data-protection jurisdiction of a website
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Jurisdiction {
    EuGdpr,
    UsCcpa,
    BrLgpd,
    CaPipeda,
    UkDpa,
    AuPrivacy,
    Global,
}

impl Jurisdiction {
    pub const ALL: [Jurisdiction; 7] = [
        Jurisdiction::EuGdpr,
        Jurisdiction::UsCcpa,
        Jurisdiction::BrLgpd,
        Jurisdiction::CaPipeda,
        Jurisdiction::UkDpa,
        Jurisdiction::AuPrivacy,
        Jurisdiction::Global,
    ];

    /// Stable code used in stored scans (e.g., "EU_GDPR")
    pub fn code(&self) -> &'static str {
        match self {
            Jurisdiction::EuGdpr => "EU_GDPR",
            Jurisdiction::UsCcpa => "US_CCPA",
            Jurisdiction::BrLgpd => "BR_LGPD",
            Jurisdiction::CaPipeda => "CA_PIPEDA",
            Jurisdiction::UkDpa => "UK_DPA",
            Jurisdiction::AuPrivacy => "AU_PRIVACY",
            Jurisdiction::Global => "GLOBAL",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Jurisdiction::EuGdpr => "European Union - GDPR",
            Jurisdiction::UsCcpa => "United States - CCPA",
            Jurisdiction::BrLgpd => "Brazil - LGPD",
            Jurisdiction::CaPipeda => "Canada - PIPEDA",
            Jurisdiction::UkDpa => "United Kingdom - UK DPA",
            Jurisdiction::AuPrivacy => "Australia - Privacy Act",
            Jurisdiction::Global => "Global / Multi-jurisdictional",
        }
    }

    /// Parse from code (case-insensitive)
    pub fn parse_code(s: &str) -> Option<Self> {
        let upper = s.trim().to_uppercase();
        Self::ALL.into_iter().find(|j| j.code() == upper)
    }
}

impl Default for Jurisdiction {
    fn default() -> Self {
        Jurisdiction::Global
    }
}

impl std::fmt::Display for Jurisdiction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.code())
    }
}
