//! Adversaries: the generic enemy plus its two specialized kinds.
//!
//! Per-kind behavior is a tagged variant with exhaustive pattern matching
//! rather than virtual dispatch, so adding a kind forces every narration and
//! ability site to handle it.

use super::{Combatant, DisplayName};
use crate::error::ConfigError;
use crate::event::BattleEvent;
use crate::rng::BattleRng;

/// Specialized enemy kinds with their own narration and special ability.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum EnemyKind {
    /// Shambling undead; regenerates on a coin flip.
    Zombie,
    /// Brute; occasionally surges with extra vitality.
    Ogre,
}

impl EnemyKind {
    /// Display label used in narration.
    pub const fn label(self) -> &'static str {
        match self {
            EnemyKind::Zombie => "Zombie",
            EnemyKind::Ogre => "Ogre",
        }
    }
}

/// Success chance of the zombie's regeneration, in percent.
pub const ZOMBIE_REGEN_CHANCE: u32 = 50;
/// Health restored when the zombie's regeneration triggers.
pub const ZOMBIE_REGEN_HP: u32 = 2;
/// Success chance of the ogre's surge, in percent.
pub const OGRE_SURGE_CHANCE: u32 = 20;
/// Health gained when the ogre's surge triggers.
pub const OGRE_SURGE_HP: u32 = 4;

/// An adversary in an encounter.
///
/// A generic enemy has no kind and no special ability; specialized enemies
/// carry an [`EnemyKind`] that drives their voice and ability.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Enemy {
    name: DisplayName,
    kind: Option<EnemyKind>,
    health: i32,
    attack_power: u32,
}

impl Enemy {
    /// Label of a base enemy constructed without an explicit one.
    pub const DEFAULT_LABEL: &'static str = "unknown";

    /// Constructs a generic enemy with a caller-supplied label.
    ///
    /// Fails with [`ConfigError::EmptyDisplayName`] if the label is empty.
    pub fn generic(
        label: impl Into<String>,
        health: i32,
        attack_power: u32,
    ) -> Result<Self, ConfigError> {
        Ok(Self {
            name: DisplayName::new(label)?,
            kind: None,
            health,
            attack_power,
        })
    }

    /// Constructs a generic enemy under the default "unknown" label.
    pub fn base(health: i32, attack_power: u32) -> Self {
        Self {
            name: DisplayName::from_static(Self::DEFAULT_LABEL),
            kind: None,
            health,
            attack_power,
        }
    }

    pub fn zombie(health: i32, attack_power: u32) -> Self {
        Self::specialized(EnemyKind::Zombie, health, attack_power)
    }

    pub fn ogre(health: i32, attack_power: u32) -> Self {
        Self::specialized(EnemyKind::Ogre, health, attack_power)
    }

    fn specialized(kind: EnemyKind, health: i32, attack_power: u32) -> Self {
        Self {
            name: DisplayName::from_static(kind.label()),
            kind: Some(kind),
            health,
            attack_power,
        }
    }

    pub fn kind(&self) -> Option<EnemyKind> {
        self.kind
    }

    /// Zombie-only narrative action: threatens infection, changes nothing.
    /// Returns `None` for every other enemy. Not invoked by the battle loop.
    pub fn spread_disease(&self) -> Option<BattleEvent> {
        match self.kind {
            Some(EnemyKind::Zombie) => Some(BattleEvent::narration(
                &self.name,
                format!("The {} is trying to spread an infection.", self.name),
            )),
            Some(EnemyKind::Ogre) | None => None,
        }
    }

    /// Rolls this enemy's special ability.
    ///
    /// Each invocation is an independent Bernoulli trial against the kind's
    /// trigger chance; on success the enemy heals itself and the heal event
    /// is returned. A failed trial returns `None` and changes nothing. A
    /// generic enemy narrates that it has no ability instead of rolling.
    pub fn special_ability(&mut self, rng: &mut dyn BattleRng) -> Option<BattleEvent> {
        match self.kind {
            None => Some(BattleEvent::narration(
                &self.name,
                format!("{} has no special ability.", self.name),
            )),
            Some(EnemyKind::Zombie) => {
                if !rng.chance(ZOMBIE_REGEN_CHANCE) {
                    return None;
                }
                self.health = self.health.saturating_add_unsigned(ZOMBIE_REGEN_HP);
                Some(BattleEvent::heal(
                    &self.name,
                    ZOMBIE_REGEN_HP,
                    format!("{} regenerates {} HP.", self.name, ZOMBIE_REGEN_HP),
                ))
            }
            Some(EnemyKind::Ogre) => {
                if !rng.chance(OGRE_SURGE_CHANCE) {
                    return None;
                }
                self.health = self.health.saturating_add_unsigned(OGRE_SURGE_HP);
                // The surge narrates an attack increase; the mechanical
                // effect is health. Keep the line as-is.
                Some(BattleEvent::heal(
                    &self.name,
                    OGRE_SURGE_HP,
                    format!("{} attack has increased by {}.", self.name, OGRE_SURGE_HP),
                ))
            }
        }
    }

    /// Debits health by the given damage. Battle-loop use only; health may
    /// go negative.
    pub(crate) fn apply_damage(&mut self, amount: u32) {
        self.health = self.health.saturating_sub_unsigned(amount);
    }
}

impl Combatant for Enemy {
    fn name(&self) -> &DisplayName {
        &self.name
    }

    fn health(&self) -> i32 {
        self.health
    }

    fn attack_power(&self) -> u32 {
        self.attack_power
    }

    fn talk(&self) -> BattleEvent {
        match self.kind {
            None => BattleEvent::narration(
                &self.name,
                format!("I am a {}. Be prepared to fight.", self.name),
            ),
            Some(EnemyKind::Zombie) => {
                BattleEvent::narration(&self.name, "*Grumbling...*".to_owned())
            }
            Some(EnemyKind::Ogre) => BattleEvent::narration(
                &self.name,
                format!("The {} is slamming hands all around.", self.name),
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::event::EventKind;

    /// Scripted roll source: replays a fixed list of d100 values.
    struct ScriptRng {
        rolls: Vec<u32>,
        next: usize,
    }

    impl ScriptRng {
        fn new(rolls: Vec<u32>) -> Self {
            Self { rolls, next: 0 }
        }
    }

    impl BattleRng for ScriptRng {
        fn next_u32(&mut self) -> u32 {
            let roll = self.rolls[self.next];
            self.next += 1;
            // Invert the provided-method mapping so roll_d100 yields `roll`.
            roll - 1
        }
    }

    #[test]
    fn base_enemy_uses_the_unknown_label() {
        let enemy = Enemy::base(10, 1);
        assert_eq!(enemy.name().as_str(), "unknown");
        assert_eq!(
            enemy.talk().to_string(),
            "I am a unknown. Be prepared to fight."
        );
    }

    #[test]
    fn generic_enemy_rejects_empty_labels() {
        let err = Enemy::generic("", 10, 1).unwrap_err();
        assert_eq!(err, ConfigError::EmptyDisplayName);
    }

    #[test]
    fn base_enemy_narrates_having_no_ability() {
        let mut enemy = Enemy::base(10, 1);
        let mut rng = ScriptRng::new(vec![]);
        let event = enemy.special_ability(&mut rng).unwrap();
        assert_eq!(event.kind(), EventKind::Narration);
        assert_eq!(event.to_string(), "unknown has no special ability.");
        assert_eq!(enemy.health(), 10);
    }

    #[test]
    fn zombie_regenerates_exactly_on_sub_fifty_rolls() {
        let mut zombie = Enemy::zombie(10, 1);
        // 50 succeeds (<= 50), 51 fails, 1 succeeds, 100 fails.
        let mut rng = ScriptRng::new(vec![50, 51, 1, 100]);

        let event = zombie.special_ability(&mut rng).unwrap();
        assert_eq!(event.kind(), EventKind::Heal { amount: 2 });
        assert_eq!(event.to_string(), "Zombie regenerates 2 HP.");
        assert_eq!(zombie.health(), 12);

        assert!(zombie.special_ability(&mut rng).is_none());
        assert_eq!(zombie.health(), 12);

        assert!(zombie.special_ability(&mut rng).is_some());
        assert_eq!(zombie.health(), 14);

        assert!(zombie.special_ability(&mut rng).is_none());
        assert_eq!(zombie.health(), 14);
    }

    #[test]
    fn ogre_surges_exactly_on_sub_twenty_rolls() {
        let mut ogre = Enemy::ogre(12, 2);
        let mut rng = ScriptRng::new(vec![20, 21, 19]);

        let event = ogre.special_ability(&mut rng).unwrap();
        assert_eq!(event.kind(), EventKind::Heal { amount: 4 });
        assert_eq!(event.to_string(), "Ogre attack has increased by 4.");
        assert_eq!(ogre.health(), 16);
        // The surge narration names attack, but only health moves.
        assert_eq!(ogre.attack_power(), 2);

        assert!(ogre.special_ability(&mut rng).is_none());
        assert_eq!(ogre.health(), 16);

        assert!(ogre.special_ability(&mut rng).is_some());
        assert_eq!(ogre.health(), 20);
    }

    #[test]
    fn specialized_voices_override_the_generic_line() {
        let zombie = Enemy::zombie(10, 1);
        assert_eq!(zombie.talk().to_string(), "*Grumbling...*");

        let ogre = Enemy::ogre(10, 1);
        assert_eq!(
            ogre.talk().to_string(),
            "The Ogre is slamming hands all around."
        );
    }

    #[test]
    fn only_the_zombie_spreads_disease() {
        let zombie = Enemy::zombie(10, 1);
        assert_eq!(
            zombie.spread_disease().unwrap().to_string(),
            "The Zombie is trying to spread an infection."
        );

        assert!(Enemy::ogre(10, 1).spread_disease().is_none());
        assert!(Enemy::base(10, 1).spread_disease().is_none());
    }

    #[test]
    fn kind_parses_case_insensitively() {
        use core::str::FromStr;
        assert_eq!(EnemyKind::from_str("Zombie").unwrap(), EnemyKind::Zombie);
        assert_eq!(EnemyKind::from_str("OGRE").unwrap(), EnemyKind::Ogre);
        assert!(EnemyKind::from_str("lich").is_err());
    }
}
