// Use 3rd party
use serde::{Deserialize, Serialize};

// Use local
use crate::quality::QualityTier;

/// Token introspection response. Only the subscription level matters to a
/// download client; the raw response carries a lot more.
#[derive(Default, Debug, Clone, Serialize, Deserialize)]
pub struct Account {
    pub username: Option<String>,
    pub subscription: Option<Subscription>,
}

/// Beatsource subscription plans as reported by `auth/o/introspect`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Subscription {
    #[serde(rename = "bp_basic")]
    Essentials,
    #[serde(rename = "bp_link_pro")]
    LinkProfessional,
}

impl Subscription {
    /// Whether this plan entitles the account to download the given tier.
    /// The API enforces this server-side; this only lets a caller fail early.
    pub fn permits(self, tier: QualityTier) -> bool {
        match self {
            Subscription::LinkProfessional => true,
            Subscription::Essentials => !tier.requires_link_professional(),
        }
    }
}

impl Account {
    pub fn has_subscription(&self) -> bool {
        self.subscription.is_some()
    }
}
