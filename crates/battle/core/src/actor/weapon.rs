//! Weapons held and equipped by the hero.

/// An attack modifier a hero can hold.
///
/// Immutable once constructed; owned by at most one hero at a time.
/// Construction is total: any name and bonus make a valid weapon.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Weapon {
    name: String,
    attack_bonus: u32,
}

impl Weapon {
    pub fn new(name: impl Into<String>, attack_bonus: u32) -> Self {
        Self {
            name: name.into(),
            attack_bonus,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Amount folded into the hero's attack power on equip. May be zero.
    pub fn attack_bonus(&self) -> u32 {
        self.attack_bonus
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn weapon_exposes_its_fields() {
        let sword = Weapon::new("Sword", 5);
        assert_eq!(sword.name(), "Sword");
        assert_eq!(sword.attack_bonus(), 5);
    }
}
