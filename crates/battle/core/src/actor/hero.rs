//! The player-controlled combatant.

use super::{Combatant, DisplayName, Weapon};

/// The player side of an encounter.
///
/// A hero can hold at most one weapon. Equipping folds the weapon's bonus
/// into attack power exactly once over the hero's lifetime; further equip
/// calls are no-ops even if the held weapon is replaced.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Hero {
    name: DisplayName,
    health: i32,
    attack_power: u32,
    weapon: Option<Weapon>,
    weapon_equipped: bool,
}

impl Hero {
    /// Fixed display label for the player side.
    pub const LABEL: &'static str = "Hero";

    pub fn new(health: i32, attack_power: u32) -> Self {
        Self {
            name: DisplayName::from_static(Self::LABEL),
            health,
            attack_power,
            weapon: None,
            weapon_equipped: false,
        }
    }

    /// Hands the hero a weapon to hold. Holding alone grants nothing; the
    /// bonus applies only on equip.
    pub fn give_weapon(&mut self, weapon: Weapon) {
        self.weapon = Some(weapon);
    }

    pub fn weapon(&self) -> Option<&Weapon> {
        self.weapon.as_ref()
    }

    pub fn is_weapon_equipped(&self) -> bool {
        self.weapon_equipped
    }

    /// Equips the held weapon, adding its bonus to attack power.
    ///
    /// Effective at most once: a second call is a no-op, as is calling with
    /// no weapon held. Safe to invoke repeatedly.
    pub fn equip_weapon(&mut self) {
        if self.weapon_equipped {
            return;
        }
        if let Some(weapon) = &self.weapon {
            self.attack_power += weapon.attack_bonus();
            self.weapon_equipped = true;
        }
    }

    /// Debits health by the given damage. Battle-loop use only; health may
    /// go negative.
    pub(crate) fn apply_damage(&mut self, amount: u32) {
        self.health = self.health.saturating_sub_unsigned(amount);
    }
}

impl Combatant for Hero {
    fn name(&self) -> &DisplayName {
        &self.name
    }

    fn health(&self) -> i32 {
        self.health
    }

    fn attack_power(&self) -> u32 {
        self.attack_power
    }
}
