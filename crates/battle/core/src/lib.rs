//! Deterministic turn-based duel simulation.
//!
//! `battle-core` defines the canonical encounter rules (actors, events, the
//! battle loop) and exposes pure APIs for frontends and tools. All health
//! mutation flows through [`battle::Battle`]; narration is recorded as
//! structured events rather than printed, and the only nondeterminism is the
//! injectable [`rng::BattleRng`] used by enemy special abilities.
pub mod actor;
pub mod battle;
pub mod error;
pub mod event;
pub mod rng;
pub use actor::{Combatant, DisplayName, Enemy, EnemyKind, Hero, Weapon};
pub use battle::{AbilityTiming, Battle, BattleConfig, Outcome};
pub use error::{CombatError, ConfigError, ErrorSeverity, StateError};
pub use event::{BattleEvent, EventKind};
pub use rng::{BattleRng, PcgRng};
