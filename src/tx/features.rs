use bitflags::bitflags;
use serde::{Deserialize, Serialize};

bitflags! {
    /// Optional protocol features a transaction makes use of.
    ///
    /// Bits unknown to this build are retained, so a transaction declaring
    /// them can still be compared against what a block header permits.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
    #[serde(from = "u32", into = "u32")]
    pub struct Features: u32 {
        /// Gas is paid by a sponsor instead of the origin (VIP-191).
        const DELEGATION = 1;
    }
}

impl Features {
    pub fn is_delegated(&self) -> bool {
        self.contains(Features::DELEGATION)
    }
}

impl Default for Features {
    fn default() -> Self {
        Features::empty()
    }
}

impl From<u32> for Features {
    fn from(bits: u32) -> Self {
        Features::from_bits_retain(bits)
    }
}

impl From<Features> for u32 {
    fn from(features: Features) -> Self {
        features.bits()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_bits_are_retained() {
        let features = Features::from(4);
        assert_eq!(features.bits(), 4);
        assert!(!features.is_delegated());
        assert!(!Features::DELEGATION.contains(features));
    }

    #[test]
    fn test_empty_set_is_subset_of_anything() {
        assert!(Features::empty().contains(Features::empty()));
        assert!(Features::DELEGATION.contains(Features::default()));
    }

    #[test]
    fn test_serializes_as_plain_integer() {
        let json = serde_json::to_string(&Features::DELEGATION).unwrap();
        assert_eq!(json, "1");

        let parsed: Features = serde_json::from_str("5").unwrap();
        assert!(parsed.is_delegated());
        assert_eq!(parsed.bits(), 5);
    }
}
