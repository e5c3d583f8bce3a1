//! Structured narration events.
//!
//! The engine never prints. Every observable effect of an encounter is
//! recorded as a [`BattleEvent`] in the battle log, and a frontend renders
//! the log to text. Each event carries both its structured fields (speaker,
//! kind, amount) and the canonical narration line, so tests can assert on
//! mechanics while the rendered output stays byte-for-byte stable.

use crate::actor::DisplayName;

/// Mechanical classification of a narration event.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum EventKind {
    /// An attack declaration. The amount is narrated only; the battle loop
    /// applies the health debit separately.
    Attack { amount: u32 },

    /// A self-heal from a special ability.
    Heal { amount: u32 },

    /// A per-turn health readout for one combatant.
    Status { health: i32 },

    /// Flavor text with no mechanical payload.
    Narration,
}

/// One entry in the battle log.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BattleEvent {
    speaker: String,
    kind: EventKind,
    text: String,
}

impl BattleEvent {
    /// Separator printed between turn sections.
    pub const TURN_BANNER: &'static str = "-------------";

    /// Attack declaration: "{speaker} attacks for {amount} damage."
    pub fn attack(speaker: &DisplayName, amount: u32) -> Self {
        Self {
            speaker: speaker.as_str().to_owned(),
            kind: EventKind::Attack { amount },
            text: format!("{speaker} attacks for {amount} damage."),
        }
    }

    /// Self-heal with ability-specific flavor text.
    pub fn heal(speaker: &DisplayName, amount: u32, text: String) -> Self {
        Self {
            speaker: speaker.as_str().to_owned(),
            kind: EventKind::Heal { amount },
            text,
        }
    }

    /// Health readout: "{speaker}: {health}".
    pub fn status(speaker: &DisplayName, health: i32) -> Self {
        Self {
            speaker: speaker.as_str().to_owned(),
            kind: EventKind::Status { health },
            text: format!("{speaker}: {health}"),
        }
    }

    /// Flavor text attributed to a combatant.
    pub fn narration(speaker: &DisplayName, text: String) -> Self {
        Self {
            speaker: speaker.as_str().to_owned(),
            kind: EventKind::Narration,
            text,
        }
    }

    /// Loop-level narration not attributed to any combatant.
    pub fn unattributed(text: impl Into<String>) -> Self {
        Self {
            speaker: String::new(),
            kind: EventKind::Narration,
            text: text.into(),
        }
    }

    /// Turn separator emitted by the loop itself; has no speaker.
    pub fn banner() -> Self {
        Self::unattributed(Self::TURN_BANNER)
    }

    /// Name of the combatant the event is attributed to; empty for
    /// loop-level narration such as turn banners.
    pub fn speaker(&self) -> &str {
        &self.speaker
    }

    pub fn kind(&self) -> EventKind {
        self.kind
    }

    /// The rendered narration line.
    pub fn text(&self) -> &str {
        &self.text
    }
}

impl core::fmt::Display for BattleEvent {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(&self.text)
    }
}
