//! The encounter state machine.
//!
//! A [`Battle`] owns one hero and one enemy for the duration of a single
//! encounter and is the only component that applies damage. Each call to
//! [`Battle::step`] runs exactly one full exchange: the enemy strikes first,
//! the hero always strikes back within the same turn, and only then is the
//! termination condition re-evaluated. Narration is appended to the event
//! log; nothing is printed.

use crate::actor::{Combatant, Enemy, Hero};
use crate::error::{ConfigError, StateError};
use crate::event::BattleEvent;
use crate::rng::BattleRng;

/// Terminal state of an encounter. No further turns are processed once one
/// is reached.
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
pub enum Outcome {
    /// The hero is still standing after the enemy fell.
    HeroWins,
    /// The enemy is still standing after the hero fell.
    EnemyWins,
    /// Both sides fell in the same exchange.
    Draw,
}

/// When, within an enemy turn, the battle loop invokes the enemy's special
/// ability.
///
/// The base scenario never invokes it; the hook is opt-in for difficulty
/// tuning rather than a hidden automatic effect.
#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum AbilityTiming {
    /// The loop never rolls the ability (the caller still can, directly).
    #[default]
    Never,
    /// Roll once per turn, before the enemy's attack lands.
    BeforeAttack,
    /// Roll once per turn, after the enemy's attack but before the hero's
    /// counter.
    AfterAttack,
}

/// Tunable parameters for an encounter.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BattleConfig {
    pub ability_timing: AbilityTiming,
}

impl BattleConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_ability_timing(ability_timing: AbilityTiming) -> Self {
        Self { ability_timing }
    }
}

/// A single hero-versus-enemy encounter.
#[derive(Debug)]
pub struct Battle {
    hero: Hero,
    enemy: Enemy,
    config: BattleConfig,
    events: Vec<BattleEvent>,
    outcome: Option<Outcome>,
    turn: u32,
}

impl Battle {
    /// Validates the participants and opens the encounter.
    ///
    /// Both sides must enter with positive health, and at least one side
    /// must be able to deal damage; otherwise the loop could never make
    /// progress toward termination.
    pub fn new(hero: Hero, enemy: Enemy, config: BattleConfig) -> Result<Self, ConfigError> {
        for (name, health) in [
            (hero.name().as_str(), hero.health()),
            (enemy.name().as_str(), enemy.health()),
        ] {
            if health <= 0 {
                return Err(ConfigError::NonPositiveHealth {
                    name: name.to_owned(),
                    health,
                });
            }
        }

        if hero.attack_power() == 0 && enemy.attack_power() == 0 {
            return Err(ConfigError::Stalemate);
        }

        Ok(Self {
            hero,
            enemy,
            config,
            events: Vec::new(),
            outcome: None,
            turn: 0,
        })
    }

    pub fn hero(&self) -> &Hero {
        &self.hero
    }

    pub fn enemy(&self) -> &Enemy {
        &self.enemy
    }

    /// Narration log accumulated so far, in emission order.
    pub fn events(&self) -> &[BattleEvent] {
        &self.events
    }

    /// Number of completed turns.
    pub fn turn(&self) -> u32 {
        self.turn
    }

    /// Terminal outcome, once reached.
    pub fn outcome(&self) -> Option<Outcome> {
        self.outcome
    }

    /// Runs one full turn.
    ///
    /// Returns `Ok(None)` while the encounter is still ongoing and
    /// `Ok(Some(outcome))` on the turn that resolves it. Stepping a resolved
    /// battle is an error, not a crash.
    pub fn step(&mut self, rng: &mut dyn BattleRng) -> Result<Option<Outcome>, StateError> {
        if let Some(outcome) = self.outcome {
            return Err(StateError::AlreadyResolved { outcome });
        }

        self.turn += 1;
        self.events.push(BattleEvent::banner());
        self.events
            .push(BattleEvent::status(self.hero.name(), self.hero.health()));
        self.events
            .push(BattleEvent::status(self.enemy.name(), self.enemy.health()));

        if self.config.ability_timing == AbilityTiming::BeforeAttack {
            self.roll_enemy_ability(rng);
        }

        // Enemy strikes first; the debit is unconditional.
        self.events.push(self.enemy.attack());
        self.hero.apply_damage(self.enemy.attack_power());

        if self.config.ability_timing == AbilityTiming::AfterAttack {
            self.roll_enemy_ability(rng);
        }

        // The hero always strikes back within the same turn, even if the
        // enemy's hit already dropped the hero to zero or below.
        self.events.push(self.hero.attack());
        self.enemy.apply_damage(self.hero.attack_power());

        self.events.push(BattleEvent::banner());

        if self.hero.health() > 0 && self.enemy.health() > 0 {
            return Ok(None);
        }

        let outcome = if self.hero.health() > 0 {
            Outcome::HeroWins
        } else if self.enemy.health() > 0 {
            Outcome::EnemyWins
        } else {
            Outcome::Draw
        };
        self.events.push(self.resolution_event(outcome));
        self.outcome = Some(outcome);
        Ok(Some(outcome))
    }

    /// Runs turns until the encounter resolves.
    pub fn run(&mut self, rng: &mut dyn BattleRng) -> Result<Outcome, StateError> {
        loop {
            if let Some(outcome) = self.step(rng)? {
                return Ok(outcome);
            }
        }
    }

    fn roll_enemy_ability(&mut self, rng: &mut dyn BattleRng) {
        if let Some(event) = self.enemy.special_ability(rng) {
            self.events.push(event);
        }
    }

    fn resolution_event(&self, outcome: Outcome) -> BattleEvent {
        match outcome {
            Outcome::HeroWins => BattleEvent::narration(
                self.hero.name(),
                format!("{} wins", self.hero.name()),
            ),
            Outcome::EnemyWins => BattleEvent::narration(
                self.enemy.name(),
                format!("{} wins", self.enemy.name()),
            ),
            Outcome::Draw => {
                BattleEvent::unattributed("Both sides fall. The battle ends in a draw.")
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rng::PcgRng;

    #[test]
    fn construction_rejects_non_positive_health() {
        let err = Battle::new(
            Hero::new(0, 1),
            Enemy::zombie(10, 1),
            BattleConfig::default(),
        )
        .unwrap_err();
        assert_eq!(
            err,
            ConfigError::NonPositiveHealth {
                name: "Hero".to_owned(),
                health: 0,
            }
        );

        let err = Battle::new(
            Hero::new(10, 1),
            Enemy::ogre(-3, 1),
            BattleConfig::default(),
        )
        .unwrap_err();
        assert_eq!(
            err,
            ConfigError::NonPositiveHealth {
                name: "Ogre".to_owned(),
                health: -3,
            }
        );
    }

    #[test]
    fn construction_rejects_a_mutual_stalemate() {
        let err = Battle::new(
            Hero::new(10, 0),
            Enemy::zombie(10, 0),
            BattleConfig::default(),
        )
        .unwrap_err();
        assert_eq!(err, ConfigError::Stalemate);

        // One armed side is enough for progress.
        assert!(
            Battle::new(
                Hero::new(10, 0),
                Enemy::zombie(10, 1),
                BattleConfig::default(),
            )
            .is_ok()
        );
    }

    #[test]
    fn stepping_a_resolved_battle_is_signaled() {
        let mut battle = Battle::new(
            Hero::new(1, 5),
            Enemy::zombie(1, 0),
            BattleConfig::default(),
        )
        .unwrap();
        let mut rng = PcgRng::seed_from(0);

        assert_eq!(battle.run(&mut rng).unwrap(), Outcome::HeroWins);
        let err = battle.step(&mut rng).unwrap_err();
        assert_eq!(
            err,
            StateError::AlreadyResolved {
                outcome: Outcome::HeroWins,
            }
        );
    }
}
