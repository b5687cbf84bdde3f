use std::collections::HashSet;

/// Characters with a fixed meaning for the tokenizer; they can never be part
/// of an operation symbol.
pub const RESERVED_CHARS: [char; 3] = ['(', ')', '='];

/// The operator symbols known to the tokenizer.
///
/// Besides the symbol lists themselves, this view precomputes the operator
/// alphabet: every character that occurs in some symbol. A run of alphabet
/// characters is always lexed as one operation token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LexerSettings {
    binary_operations: Vec<String>,
    unary_operations:  Vec<String>,
    symbols:           HashSet<String>,
    alphabet:          HashSet<char>,
}

impl LexerSettings {
    /// Creates the view from the binary and unary symbols.
    ///
    /// # Example
    /// ```
    /// use intcalc::settings::LexerSettings;
    ///
    /// let view = LexerSettings::new(vec!["+".into(), "**".into()], vec!["-".into()]);
    /// assert!(view.is_operation("**"));
    /// assert!(view.is_operation_char('*'));
    /// assert!(!view.is_operation("*"));
    /// ```
    #[must_use]
    pub fn new(binary_operations: Vec<String>, unary_operations: Vec<String>) -> Self {
        let symbols: HashSet<String> = binary_operations.iter()
                                                        .chain(&unary_operations)
                                                        .cloned()
                                                        .collect();
        let alphabet = symbols.iter().flat_map(|s| s.chars()).collect();

        Self { binary_operations,
               unary_operations,
               symbols,
               alphabet }
    }

    #[must_use]
    pub fn binary_operations(&self) -> &[String] {
        &self.binary_operations
    }

    #[must_use]
    pub fn unary_operations(&self) -> &[String] {
        &self.unary_operations
    }

    /// Whether `c` occurs in any binary or unary symbol.
    #[must_use]
    pub fn is_operation_char(&self, c: char) -> bool {
        self.alphabet.contains(&c)
    }

    /// Whether `repr` is exactly one of the binary or unary symbols.
    #[must_use]
    pub fn is_operation(&self, repr: &str) -> bool {
        self.symbols.contains(repr)
    }
}

/// Whether the tokenizer could ever produce `repr` as an operation token.
///
/// Letters and digits would be swallowed by numbers and identifiers, spaces
/// are skipped, and the reserved punctuators have meanings of their own.
#[must_use]
pub fn is_lexable_symbol(repr: &str) -> bool {
    !repr.is_empty()
    && repr.chars().all(|c| {
                       !c.is_ascii_alphanumeric()
                       && !c.is_whitespace()
                       && !c.is_control()
                       && !RESERVED_CHARS.contains(&c)
                   })
}
