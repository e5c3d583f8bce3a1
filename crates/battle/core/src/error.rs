//! Common error infrastructure for battle-core.
//!
//! Two error families cover everything the engine can reject:
//! construction-time input problems ([`ConfigError`]) and operations invoked
//! on an encounter that has already reached a terminal state ([`StateError`]).
//! Every other operation in the crate is total.

use crate::battle::Outcome;

/// Severity level of an error, used for categorization and recovery strategies.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ErrorSeverity {
    /// Recoverable error - the caller can report it and continue.
    ///
    /// Example: stepping a battle that has already been resolved.
    Recoverable,

    /// Validation error - invalid input, should not retry without changes.
    ///
    /// Example: a zero attack power on both sides.
    Validation,

    /// Fatal error - the encounter cannot be constructed at all.
    ///
    /// Example: an actor with an empty display name.
    Fatal,
}

impl ErrorSeverity {
    /// Returns a human-readable description of this severity level.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Recoverable => "recoverable",
            Self::Validation => "validation",
            Self::Fatal => "fatal",
        }
    }

    /// Returns true if this error is potentially recoverable.
    pub const fn is_recoverable(&self) -> bool {
        matches!(self, Self::Recoverable)
    }
}

/// Common trait for all battle-core errors.
///
/// Provides a uniform interface for error classification across the crate.
/// All error enums derive `thiserror::Error` for Display and implement this
/// trait for severity and categorization.
pub trait CombatError: core::fmt::Display + core::fmt::Debug {
    /// Returns the severity level of this error.
    fn severity(&self) -> ErrorSeverity;

    /// Returns a static string identifier for this error variant.
    ///
    /// Useful for error categorization, metrics, and testing.
    fn error_code(&self) -> &'static str;
}

/// Invalid construction input.
///
/// Raised before any battle state exists; never recovered. The message
/// identifies the missing or invalid field.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ConfigError {
    /// An actor was constructed with an empty display name.
    #[error("invalid actor: empty display name")]
    EmptyDisplayName,

    /// A combatant entered the encounter without positive health.
    #[error("{name} must enter battle with positive health, got {health}")]
    NonPositiveHealth { name: String, health: i32 },

    /// Neither side can deal damage, so the encounter would never terminate.
    #[error("both sides have zero attack power; the battle cannot make progress")]
    Stalemate,
}

impl CombatError for ConfigError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            ConfigError::EmptyDisplayName => ErrorSeverity::Fatal,
            ConfigError::NonPositiveHealth { .. } | ConfigError::Stalemate => {
                ErrorSeverity::Validation
            }
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            ConfigError::EmptyDisplayName => "CONFIG_EMPTY_DISPLAY_NAME",
            ConfigError::NonPositiveHealth { .. } => "CONFIG_NON_POSITIVE_HEALTH",
            ConfigError::Stalemate => "CONFIG_STALEMATE",
        }
    }
}

/// Operation invoked after the encounter reached a terminal state.
///
/// Signaled rather than silently producing nonsensical narration; callers
/// are expected to report it and stop issuing turns.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum StateError {
    /// The battle already resolved to an outcome; no further turns exist.
    #[error("battle already resolved ({outcome}); no further turns can be taken")]
    AlreadyResolved { outcome: Outcome },
}

impl CombatError for StateError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            StateError::AlreadyResolved { .. } => ErrorSeverity::Recoverable,
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            StateError::AlreadyResolved { .. } => "STATE_ALREADY_RESOLVED",
        }
    }
}
