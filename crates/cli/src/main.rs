//! Skirmish client binary.
//!
//! Composition root for the duel simulator: parses options, assembles the
//! combatants, runs one encounter through `battle-core`, and renders the
//! event log to stdout. All simulation rules live in the library; this
//! binary only wires configuration and I/O.
//!
//! # Examples
//!
//! ```bash
//! # The classic demo: sword-armed hero against a zombie
//! cargo run -p battle-client
//!
//! # An ogre duel with its surge rolled before each of its attacks
//! cargo run -p battle-client -- --enemy ogre --ability-timing before_attack --seed 7
//! ```

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use battle_core::{
    AbilityTiming, Battle, BattleConfig, Combatant, Enemy, Hero, PcgRng, Weapon,
};

/// Enemy selector.
///
/// Covers the two specialized kinds plus the kindless base enemy, which has
/// no special ability and fights under the "unknown" label.
#[derive(Clone, Copy, Debug, PartialEq, Eq, clap::ValueEnum)]
enum EnemyChoice {
    Zombie,
    Ogre,
    Generic,
}

impl EnemyChoice {
    fn as_str(self) -> &'static str {
        match self {
            EnemyChoice::Zombie => "zombie",
            EnemyChoice::Ogre => "ogre",
            EnemyChoice::Generic => "generic",
        }
    }
}

/// Turn-based duel simulator.
#[derive(Debug, Parser)]
#[command(name = "skirmish", version, about)]
struct Cli {
    /// Seed for the special-ability rolls; a fixed seed replays exactly.
    #[arg(long, default_value_t = 42)]
    seed: u64,

    /// Which enemy to face.
    #[arg(long, value_enum, default_value = "zombie")]
    enemy: EnemyChoice,

    /// Enemy starting health.
    #[arg(long, default_value_t = 10)]
    enemy_health: i32,

    /// Enemy attack power.
    #[arg(long, default_value_t = 1)]
    enemy_attack: u32,

    /// Hero starting health.
    #[arg(long, default_value_t = 10)]
    hero_health: i32,

    /// Hero attack power before any weapon.
    #[arg(long, default_value_t = 1)]
    hero_attack: u32,

    /// Name of the weapon the hero equips before the fight.
    #[arg(long, default_value = "Sword")]
    weapon: String,

    /// Attack bonus of the equipped weapon.
    #[arg(long, default_value_t = 5)]
    weapon_bonus: u32,

    /// Fight without any weapon.
    #[arg(long)]
    bare_hands: bool,

    /// When the loop rolls the enemy's special ability.
    #[arg(long, default_value = "never")]
    ability_timing: AbilityTiming,

    /// Narrate the enemy's approach before the first exchange.
    #[arg(long)]
    intro: bool,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let mut hero = Hero::new(cli.hero_health, cli.hero_attack);
    if !cli.bare_hands {
        hero.give_weapon(Weapon::new(cli.weapon.clone(), cli.weapon_bonus));
        hero.equip_weapon();
    }

    let enemy = build_enemy(cli.enemy, cli.enemy_health, cli.enemy_attack);

    tracing::info!(
        seed = cli.seed,
        enemy = cli.enemy.as_str(),
        hero_attack = hero.attack_power(),
        timing = %cli.ability_timing,
        "starting encounter"
    );

    if cli.intro {
        println!("{}", enemy.talk());
        println!("{}", enemy.walk_forward());
    }

    let config = BattleConfig::with_ability_timing(cli.ability_timing);
    let mut battle =
        Battle::new(hero, enemy, config).context("encounter setup rejected")?;

    let mut rng = PcgRng::seed_from(cli.seed);
    let outcome = battle
        .run(&mut rng)
        .context("encounter did not run to completion")?;

    for event in battle.events() {
        println!("{event}");
    }

    tracing::info!(outcome = %outcome, turns = battle.turn(), "encounter resolved");
    Ok(())
}

fn build_enemy(choice: EnemyChoice, health: i32, attack: u32) -> Enemy {
    match choice {
        EnemyChoice::Zombie => Enemy::zombie(health, attack),
        EnemyChoice::Ogre => Enemy::ogre(health, attack),
        // Kindless: generic voice, narrates having no special ability.
        EnemyChoice::Generic => Enemy::base(health, attack),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use battle_core::EnemyKind;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn generic_enemy_is_selectable() {
        let cli = Cli::try_parse_from(["skirmish", "--enemy", "generic"]).unwrap();
        assert_eq!(cli.enemy, EnemyChoice::Generic);

        let enemy = build_enemy(cli.enemy, cli.enemy_health, cli.enemy_attack);
        assert_eq!(enemy.kind(), None);
        assert_eq!(enemy.name().as_str(), Enemy::DEFAULT_LABEL);
    }

    #[test]
    fn every_choice_maps_to_its_kind() {
        let zombie = build_enemy(EnemyChoice::Zombie, 10, 1);
        assert_eq!(zombie.kind(), Some(EnemyKind::Zombie));

        let ogre = build_enemy(EnemyChoice::Ogre, 10, 1);
        assert_eq!(ogre.kind(), Some(EnemyKind::Ogre));
    }
}
