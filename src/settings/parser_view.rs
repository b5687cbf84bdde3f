use std::collections::{HashMap, HashSet};

use crate::{
    ast::{BinaryOperation, UnaryOperation},
    error::SettingsError,
    settings::{Associativity, SettingsResult},
};

/// The precedence table as seen by the parser.
///
/// Precedence levels are numbered from `0` (loosest) to
/// `number_of_priorities() - 1` (tightest). Unary priorities use the same
/// numbering: the operand of a unary operation with priority `p` is parsed
/// at level `p + 1`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParserSettings {
    pub(crate) binary_by_priority:        Vec<HashSet<BinaryOperation>>,
    pub(crate) associativity_by_priority: Vec<Associativity>,
    pub(crate) binary_by_repr:            HashMap<String, BinaryOperation>,
    pub(crate) binary_mnemonics:          HashMap<BinaryOperation, String>,
    pub(crate) unary_by_repr:             HashMap<String, UnaryOperation>,
    pub(crate) unary_mnemonics:           HashMap<UnaryOperation, String>,
    pub(crate) unary_priorities:          HashMap<UnaryOperation, usize>,
}

impl ParserSettings {
    /// The number of binary precedence levels.
    #[must_use]
    pub fn number_of_priorities(&self) -> usize {
        self.binary_by_priority.len()
    }

    /// Whether `repr` is the symbol of a binary operation registered at
    /// `priority`.
    #[must_use]
    pub fn is_binary_priority(&self, repr: &str, priority: usize) -> bool {
        match (self.binary_by_repr.get(repr), self.binary_by_priority.get(priority)) {
            (Some(op), Some(level)) => level.contains(op),
            _ => false,
        }
    }

    #[must_use]
    pub fn associativity(&self, priority: usize) -> Option<Associativity> {
        self.associativity_by_priority.get(priority).copied()
    }

    /// Whether the level at `priority` groups right to left. Levels that do
    /// not exist are reported as left-associative.
    #[must_use]
    pub fn is_right_associative(&self, priority: usize) -> bool {
        self.associativity(priority) == Some(Associativity::Right)
    }

    /// Resolves a symbol to its binary operation.
    ///
    /// # Errors
    /// [`SettingsError::NoBinaryOperation`] if no binary operation uses the
    /// symbol.
    pub fn binary_operation_of(&self, repr: &str) -> SettingsResult<BinaryOperation> {
        self.binary_by_repr
            .get(repr)
            .copied()
            .ok_or_else(|| SettingsError::NoBinaryOperation { repr: repr.to_string() })
    }

    /// Resolves a symbol to its unary operation.
    ///
    /// # Errors
    /// [`SettingsError::NoUnaryOperation`] if no unary operation uses the
    /// symbol.
    pub fn unary_operation_of(&self, repr: &str) -> SettingsResult<UnaryOperation> {
        self.unary_by_repr
            .get(repr)
            .copied()
            .ok_or_else(|| SettingsError::NoUnaryOperation { repr: repr.to_string() })
    }

    /// The priority of the unary operation written as `repr`.
    ///
    /// Returns `Ok(None)` when `repr` is not a unary symbol at all.
    ///
    /// # Errors
    /// [`SettingsError::NoUnaryPriority`] if `repr` names a unary operation
    /// that was given a symbol but never put in a unary group.
    ///
    /// # Example
    /// ```
    /// use intcalc::settings::Settings;
    ///
    /// let settings = Settings::default();
    /// let view = settings.parser_settings();
    /// assert_eq!(view.unary_priority("-").unwrap(), Some(0));
    /// assert_eq!(view.unary_priority("*").unwrap(), None);
    /// ```
    pub fn unary_priority(&self, repr: &str) -> SettingsResult<Option<usize>> {
        let Some(op) = self.unary_by_repr.get(repr) else {
            return Ok(None);
        };

        self.unary_priorities
            .get(op)
            .copied()
            .map(Some)
            .ok_or_else(|| SettingsError::NoUnaryPriority { repr: repr.to_string() })
    }

    #[must_use]
    pub fn binary_mnemonic(&self, op: BinaryOperation) -> Option<&str> {
        self.binary_mnemonics.get(&op).map(String::as_str)
    }

    #[must_use]
    pub fn unary_mnemonic(&self, op: UnaryOperation) -> Option<&str> {
        self.unary_mnemonics.get(&op).map(String::as_str)
    }
}
