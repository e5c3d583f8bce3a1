//! Combat participants: the shared capability contract plus the concrete
//! hero and enemy implementations.

mod enemy;
mod hero;
mod weapon;

pub use enemy::{Enemy, EnemyKind};
pub use hero::Hero;
pub use weapon::Weapon;

use crate::error::ConfigError;
use crate::event::BattleEvent;

/// Display label of a combatant.
///
/// Set once at construction and never mutated afterwards. Construction
/// rejects empty labels, so every actor that exists has a printable name.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DisplayName(String);

impl DisplayName {
    /// Validates and wraps a label. Fails on the empty string.
    pub fn new(label: impl Into<String>) -> Result<Self, ConfigError> {
        let label = label.into();
        if label.is_empty() {
            return Err(ConfigError::EmptyDisplayName);
        }
        Ok(Self(label))
    }

    /// Wraps a label known at compile time to be non-empty.
    ///
    /// Used for the fixed variant labels ("Hero", "Zombie", ...), which
    /// cannot fail validation.
    pub(crate) fn from_static(label: &'static str) -> Self {
        debug_assert!(!label.is_empty());
        Self(label.to_owned())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl core::fmt::Display for DisplayName {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for DisplayName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Capability contract shared by every combat participant.
///
/// Narration operations return [`BattleEvent`]s rather than printing; the
/// battle loop owns both the log and every health debit, so `attack` here is
/// narration only and never mutates state.
pub trait Combatant {
    /// Display label fixed at construction.
    fn name(&self) -> &DisplayName;

    /// Current health. May go negative transiently; a combatant counts as
    /// defeated once it is zero or below.
    fn health(&self) -> i32;

    /// Current attack power. Never decreased by the engine.
    fn attack_power(&self) -> u32;

    fn is_defeated(&self) -> bool {
        self.health() <= 0
    }

    /// Introduction line. Variants override this with their own voice.
    fn talk(&self) -> BattleEvent {
        BattleEvent::narration(
            self.name(),
            format!("I am a {}. Be prepared to fight.", self.name()),
        )
    }

    /// Movement flavor line; no state change.
    fn walk_forward(&self) -> BattleEvent {
        BattleEvent::narration(self.name(), format!("{} moves closer to you.", self.name()))
    }

    /// Attack declaration for the current attack power. Damage application
    /// is the battle loop's responsibility.
    fn attack(&self) -> BattleEvent {
        BattleEvent::attack(self.name(), self.attack_power())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Dummy {
        name: DisplayName,
    }

    impl Combatant for Dummy {
        fn name(&self) -> &DisplayName {
            &self.name
        }

        fn health(&self) -> i32 {
            4
        }

        fn attack_power(&self) -> u32 {
            2
        }
    }

    #[test]
    fn empty_display_name_is_rejected() {
        let err = DisplayName::new("").unwrap_err();
        assert_eq!(err, ConfigError::EmptyDisplayName);
        assert_eq!(err.to_string(), "invalid actor: empty display name");
    }

    #[test]
    fn non_empty_display_name_round_trips() {
        let name = DisplayName::new("Ogre").unwrap();
        assert_eq!(name.as_str(), "Ogre");
        assert_eq!(name.to_string(), "Ogre");
    }

    #[test]
    fn default_narration_uses_the_display_name() {
        let dummy = Dummy {
            name: DisplayName::new("unknown").unwrap(),
        };
        assert_eq!(
            dummy.talk().to_string(),
            "I am a unknown. Be prepared to fight."
        );
        assert_eq!(
            dummy.walk_forward().to_string(),
            "unknown moves closer to you."
        );
        assert_eq!(dummy.attack().to_string(), "unknown attacks for 2 damage.");
        assert!(!dummy.is_defeated());
    }
}
