//! User profile data models

use serde::{Deserialize, Serialize};

/// Number of avatars in the customization cycle
pub const AVATAR_COUNT: usize = 5;

/// The saved avatar choice, the only state kept across sessions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AvatarPreference {
    pub selected: usize,
}

impl Default for AvatarPreference {
    fn default() -> Self {
        Self { selected: 0 }
    }
}

impl AvatarPreference {
    /// Cycle to the next avatar, wrapping after the last one
    pub fn next(self) -> Self {
        Self {
            selected: (self.selected + 1) % AVATAR_COUNT,
        }
    }

    /// Pick a specific avatar; `None` for an index outside the cycle
    pub fn set(index: usize) -> Option<Self> {
        (index < AVATAR_COUNT).then_some(Self { selected: index })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_next_wraps_around() {
        let mut pref = AvatarPreference::default();
        for expected in [1, 2, 3, 4, 0, 1] {
            pref = pref.next();
            assert_eq!(pref.selected, expected);
        }
    }

    #[test]
    fn test_set_rejects_out_of_range() {
        assert_eq!(AvatarPreference::set(4), Some(AvatarPreference { selected: 4 }));
        assert_eq!(AvatarPreference::set(5), None);
    }
}
