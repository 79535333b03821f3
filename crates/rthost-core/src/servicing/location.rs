//! Location mode of a servicing root.

use serde::Serialize;

/// Whether the servicing root is the implicit well-known location or was
/// supplied by the caller.
///
/// A missing default root simply means "nothing serviced"; a missing
/// explicit root is a misconfiguration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ServicingLocation {
    Default,
    Explicit,
}

impl ServicingLocation {
    /// Map the boolean `is_default_location` flag used at the call boundary.
    pub const fn from_default_flag(is_default_location: bool) -> Self {
        if is_default_location {
            Self::Default
        } else {
            Self::Explicit
        }
    }

    pub const fn is_default(self) -> bool {
        matches!(self, Self::Default)
    }
}

impl std::fmt::Display for ServicingLocation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Default => f.write_str("default"),
            Self::Explicit => f.write_str("explicit"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flag_mapping() {
        assert_eq!(ServicingLocation::from_default_flag(true), ServicingLocation::Default);
        assert_eq!(ServicingLocation::from_default_flag(false), ServicingLocation::Explicit);
        assert!(ServicingLocation::Default.is_default());
        assert!(!ServicingLocation::Explicit.is_default());
    }
}
