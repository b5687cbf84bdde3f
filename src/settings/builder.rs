use std::{
    collections::{HashMap, HashSet},
    fmt::Display,
    hash::Hash,
    sync::Arc,
};

use log::warn;

use crate::{
    ast::{BinaryOperation, UnaryOperation},
    error::SettingsError,
    settings::{
        Associativity, LexerSettings, ParserSettings, Settings, SettingsResult,
        lexer_view::is_lexable_symbol,
    },
};

/// Accumulates an operator table.
///
/// Registration order matters:
/// - every call to [`left_assoc`](Self::left_assoc) or
///   [`right_assoc`](Self::right_assoc) adds a precedence level binding
///   tighter than all levels added before it;
/// - every call to [`unary`](Self::unary) adds a unary group binding tighter
///   than all groups added before it.
///
/// Symbols can be registered in any order. All consistency checks run in
/// [`build`](Self::build).
///
/// # Example
/// ```
/// use intcalc::{
///     ast::{BinaryOperation, UnaryOperation},
///     settings::SettingsBuilder,
/// };
///
/// let settings = SettingsBuilder::new().left_assoc([BinaryOperation::Plus])
///                                      .right_assoc([BinaryOperation::Power])
///                                      .unary([UnaryOperation::Minus])
///                                      .binary_repr(BinaryOperation::Plus, "+")
///                                      .binary_repr(BinaryOperation::Power, "^")
///                                      .unary_repr(UnaryOperation::Minus, "~")
///                                      .build()
///                                      .unwrap();
///
/// assert_eq!(settings.parser_settings().number_of_priorities(), 2);
/// assert!(settings.parser_settings().is_right_associative(1));
/// ```
#[derive(Debug, Clone, Default)]
pub struct SettingsBuilder {
    binary_by_priority:        Vec<Vec<BinaryOperation>>,
    associativity_by_priority: Vec<Associativity>,
    unary_groups:              Vec<Vec<UnaryOperation>>,
    binary_reprs:              Vec<(BinaryOperation, String)>,
    unary_reprs:               Vec<(UnaryOperation, String)>,
}

impl SettingsBuilder {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a left-associative precedence level above all existing ones.
    #[must_use]
    pub fn left_assoc(self, operations: impl IntoIterator<Item = BinaryOperation>) -> Self {
        self.level(operations, Associativity::Left)
    }

    /// Adds a right-associative precedence level above all existing ones.
    #[must_use]
    pub fn right_assoc(self, operations: impl IntoIterator<Item = BinaryOperation>) -> Self {
        self.level(operations, Associativity::Right)
    }

    /// Adds a precedence level with the given associativity.
    #[must_use]
    pub fn level(mut self,
                 operations: impl IntoIterator<Item = BinaryOperation>,
                 associativity: Associativity)
                 -> Self {
        self.binary_by_priority.push(operations.into_iter().collect());
        self.associativity_by_priority.push(associativity);
        self
    }

    /// Adds a unary group. All operations of the group share one priority,
    /// one higher than the previous group's.
    #[must_use]
    pub fn unary(mut self, operations: impl IntoIterator<Item = UnaryOperation>) -> Self {
        self.unary_groups.push(operations.into_iter().collect());
        self
    }

    /// Sets the symbol of a binary operation.
    #[must_use]
    pub fn binary_repr(mut self, operation: BinaryOperation, repr: impl Into<String>) -> Self {
        self.binary_reprs.push((operation, repr.into()));
        self
    }

    /// Sets the symbol of a unary operation.
    #[must_use]
    pub fn unary_repr(mut self, operation: UnaryOperation, repr: impl Into<String>) -> Self {
        self.unary_reprs.push((operation, repr.into()));
        self
    }

    /// Validates the table and freezes it.
    ///
    /// # Errors
    /// A [`SettingsError`] if
    /// - an operation is registered in two levels or two unary groups,
    /// - an operation is given two different symbols,
    /// - two operations of the same kind share a symbol,
    /// - a symbol could never be produced by the tokenizer,
    /// - an operation in a level or group has no symbol.
    pub fn build(self) -> SettingsResult<Settings> {
        let binary_priorities = priorities("binary", &self.binary_by_priority)?;
        let unary_priorities = priorities("unary", &self.unary_groups)?;

        let (binary_mnemonics, binary_by_repr) = mnemonics("binary", &self.binary_reprs)?;
        let (unary_mnemonics, unary_by_repr) = mnemonics("unary", &self.unary_reprs)?;

        let binary_symbols = symbols_in_order("binary",
                                              self.binary_by_priority.iter().flatten(),
                                              &binary_mnemonics)?;
        let unary_symbols =
            symbols_in_order("unary", self.unary_groups.iter().flatten(), &unary_mnemonics)?;

        warn_unused("binary", &binary_mnemonics, &binary_priorities);
        warn_unused("unary", &unary_mnemonics, &unary_priorities);

        let parser = ParserSettings { binary_by_priority: self.binary_by_priority
                                                              .into_iter()
                                                              .map(|level| {
                                                                  level.into_iter().collect()
                                                              })
                                                              .collect(),
                                      associativity_by_priority: self.associativity_by_priority,
                                      binary_by_repr,
                                      binary_mnemonics,
                                      unary_by_repr,
                                      unary_mnemonics,
                                      unary_priorities };
        let lexer = LexerSettings::new(binary_symbols, unary_symbols);

        Ok(Settings::new(Arc::new(parser), Arc::new(lexer)))
    }
}

/// Maps every operation to the index of the group it belongs to.
fn priorities<Op>(kind: &'static str, groups: &[Vec<Op>]) -> SettingsResult<HashMap<Op, usize>>
    where Op: Copy + Eq + Hash + Display
{
    let mut result = HashMap::new();
    for (priority, group) in groups.iter().enumerate() {
        for &op in group {
            if let Some(&previous) = result.get(&op)
               && previous != priority
            {
                return Err(SettingsError::DuplicateRegistration { kind,
                                                                  operation: op.to_string() });
            }
            result.insert(op, priority);
        }
    }
    Ok(result)
}

type Mnemonics<Op> = (HashMap<Op, String>, HashMap<String, Op>);

/// Builds both directions of the symbol mapping, rejecting anything that
/// would keep them from being mutual inverses.
fn mnemonics<Op>(kind: &'static str, reprs: &[(Op, String)]) -> SettingsResult<Mnemonics<Op>>
    where Op: Copy + Eq + Hash + Display
{
    let mut by_op: HashMap<Op, String> = HashMap::new();
    let mut by_repr: HashMap<String, Op> = HashMap::new();

    for (op, repr) in reprs {
        if !is_lexable_symbol(repr) {
            return Err(SettingsError::UnlexableMnemonic { repr: repr.clone() });
        }
        if let Some(first) = by_op.get(op) {
            if first == repr {
                continue;
            }
            return Err(SettingsError::ConflictingMnemonics { kind,
                                                             operation: op.to_string(),
                                                             first: first.clone(),
                                                             second: repr.clone() });
        }
        if by_repr.contains_key(repr) {
            return Err(SettingsError::DuplicateMnemonic { kind,
                                                          repr: repr.clone() });
        }
        by_op.insert(*op, repr.clone());
        by_repr.insert(repr.clone(), *op);
    }

    Ok((by_op, by_repr))
}

/// Lists the symbols of `operations` in registration order, without
/// repetitions.
fn symbols_in_order<'a, Op>(kind: &'static str,
                            operations: impl Iterator<Item = &'a Op>,
                            mnemonics: &HashMap<Op, String>)
                            -> SettingsResult<Vec<String>>
    where Op: 'a + Copy + Eq + Hash + Display
{
    let mut seen = HashSet::new();
    let mut symbols = Vec::new();
    for op in operations {
        let repr = mnemonics.get(op)
                            .ok_or_else(|| SettingsError::MissingMnemonic { kind,
                                                                            operation:
                                                                                op.to_string() })?;
        if seen.insert(repr) {
            symbols.push(repr.clone());
        }
    }
    Ok(symbols)
}

fn warn_unused<Op>(kind: &str, mnemonics: &HashMap<Op, String>, registered: &HashMap<Op, usize>)
    where Op: Eq + Hash + Display
{
    for (op, repr) in mnemonics {
        if !registered.contains_key(op) {
            warn!("{kind} operation {op} has symbol '{repr}' but no priority; the symbol will not be lexed");
        }
    }
}
