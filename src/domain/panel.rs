//! Panel identities.

use std::fmt;
use std::time::Duration;

use serde::{Deserialize, Serialize};

/// One of the three independently activatable micro-frontend panels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PanelId {
    /// Product catalog, owned by the catalog team.
    Catalog,
    /// Shopping cart, owned by the cart team.
    Cart,
    /// User profile, owned by the profile team.
    Profile,
}

impl PanelId {
    /// Every panel in display order.
    pub const ALL: [Self; 3] = [Self::Catalog, Self::Cart, Self::Profile];

    /// Stable lowercase identifier.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Catalog => "catalog",
            Self::Cart => "cart",
            Self::Profile => "profile",
        }
    }

    /// Human readable name.
    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::Catalog => "Product Catalog",
            Self::Cart => "Shopping Cart",
            Self::Profile => "User Profile",
        }
    }

    /// Fixed latency before the panel's content becomes available.
    #[must_use]
    pub const fn reveal_delay(self) -> Duration {
        match self {
            Self::Catalog => Duration::from_millis(1000),
            Self::Cart => Duration::from_millis(1500),
            Self::Profile => Duration::from_millis(800),
        }
    }

    pub(crate) const fn index(self) -> usize {
        match self {
            Self::Catalog => 0,
            Self::Cart => 1,
            Self::Profile => 2,
        }
    }
}

impl fmt::Display for PanelId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test_case(PanelId::Catalog, 1000)]
    #[test_case(PanelId::Cart, 1500)]
    #[test_case(PanelId::Profile, 800)]
    fn test_reveal_delay(panel: PanelId, millis: u64) {
        assert_eq!(panel.reveal_delay(), Duration::from_millis(millis));
    }

    #[test]
    fn test_delays_are_distinct() {
        let mut delays: Vec<_> = PanelId::ALL.iter().map(|p| p.reveal_delay()).collect();
        delays.sort();
        delays.dedup();
        assert_eq!(delays.len(), 3);
    }

    #[test]
    fn test_indices_cover_all_panels() {
        for (i, panel) in PanelId::ALL.iter().enumerate() {
            assert_eq!(panel.index(), i);
        }
    }

    #[test]
    fn test_serde_names() {
        #[derive(Deserialize)]
        struct Wrapper {
            panel: PanelId,
        }

        let parsed: Wrapper = toml::from_str("panel = \"cart\"").unwrap();
        assert_eq!(parsed.panel, PanelId::Cart);
        assert_eq!(PanelId::Profile.to_string(), "profile");
    }
}
