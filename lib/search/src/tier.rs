use serde::{Deserialize, Serialize};
use std::fmt;

/// Ordinal result bucket, 1 best to 4 weakest
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Tier(u8);

impl Tier {
    pub const BEST: Tier = Tier(1);
    pub const WEAKEST: Tier = Tier(4);

    /// Bucket a rounded score: >=0.90 -> 1, >=0.70 -> 2, >=0.50 -> 3, else 4
    pub fn from_score(score: f32) -> Self {
        if score >= 0.9 {
            Tier(1)
        } else if score >= 0.7 {
            Tier(2)
        } else if score >= 0.5 {
            Tier(3)
        } else {
            Tier(4)
        }
    }

    pub fn number(self) -> u8 {
        self.0
    }
}

impl fmt::Display for Tier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_boundaries() {
        assert_eq!(Tier::from_score(1.0).number(), 1);
        assert_eq!(Tier::from_score(0.9).number(), 1);
        assert_eq!(Tier::from_score(0.89).number(), 2);
        assert_eq!(Tier::from_score(0.7).number(), 2);
        assert_eq!(Tier::from_score(0.5).number(), 3);
        assert_eq!(Tier::from_score(0.49).number(), 4);
        assert_eq!(Tier::from_score(0.0), Tier::WEAKEST);
    }

    #[test]
    fn test_monotonic() {
        let mut previous = Tier::WEAKEST;
        for step in 0..=100 {
            let tier = Tier::from_score(step as f32 / 100.0);
            assert!(tier <= previous, "tier rose at score {}", step);
            previous = tier;
        }
        assert_eq!(previous, Tier::BEST);
    }
}
