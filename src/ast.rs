use std::fmt;

use crate::error::{ChildPosition, TreeError};

/// Represents a binary operation.
///
/// Binary operations are semantic identifiers only; the symbol used to write
/// them in source text comes from the operator settings.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum BinaryOperation {
    /// Addition.
    Plus,
    /// Subtraction.
    Minus,
    /// Multiplication.
    Mult,
    /// Truncating integer division.
    Div,
    /// Exponentiation.
    Power,
}

/// Represents a unary (prefix) operation.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum UnaryOperation {
    /// Arithmetic negation (e.g. `-x`).
    Minus,
    /// Identity (e.g. `+x`).
    Plus,
}

/// The kind of a leaf node.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Operand {
    /// A decimal literal; the node's representation holds its digits.
    Number,
    /// A variable reference; the node's representation holds its name.
    Variable,
}

/// Tag carried by every [`Node`].
///
/// The tag determines the number of children a node has:
/// - `Operand(_)`: none,
/// - `Unary(_)`: one (the operand),
/// - `Binary(_)`: two (left, right),
/// - `Assign`: two (the target variable leaf and the value).
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum NodeTag {
    /// A leaf.
    Operand(Operand),
    /// A prefix operation.
    Unary(UnaryOperation),
    /// An infix operation.
    Binary(BinaryOperation),
    /// A `let` binding.
    Assign,
}

/// A node of the abstract syntax tree.
///
/// Nodes are only created through the arity-checked constructors
/// ([`Node::leaf`], [`Node::unary`], [`Node::binary`], [`Node::assign`]) and
/// are immutable afterwards. Children are owned by their parent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Node {
    tag:      NodeTag,
    repr:     String,
    children: Vec<Self>,
}

impl Node {
    /// Creates a leaf node.
    ///
    /// # Example
    /// ```
    /// use intcalc::ast::{Node, NodeTag, Operand};
    ///
    /// let leaf = Node::leaf(Operand::Variable, "x");
    /// assert_eq!(leaf.tag(), NodeTag::Operand(Operand::Variable));
    /// assert_eq!(leaf.repr(), "x");
    /// assert!(leaf.children().is_empty());
    /// ```
    #[must_use]
    pub fn leaf(operand: Operand, repr: impl Into<String>) -> Self {
        Self { tag:      NodeTag::Operand(operand),
               repr:     repr.into(),
               children: Vec::new(), }
    }

    /// Creates a number leaf from its decimal digits.
    #[must_use]
    pub fn number(digits: impl Into<String>) -> Self {
        Self::leaf(Operand::Number, digits)
    }

    /// Creates a variable leaf.
    #[must_use]
    pub fn variable(name: impl Into<String>) -> Self {
        Self::leaf(Operand::Variable, name)
    }

    /// Creates a unary operation node with a single operand.
    #[must_use]
    pub fn unary(operation: UnaryOperation, operand: Self) -> Self {
        Self { tag:      NodeTag::Unary(operation),
               repr:     String::new(),
               children: vec![operand], }
    }

    /// Creates a binary operation node.
    #[must_use]
    pub fn binary(operation: BinaryOperation, left: Self, right: Self) -> Self {
        Self { tag:      NodeTag::Binary(operation),
               repr:     String::new(),
               children: vec![left, right], }
    }

    /// Creates an assignment binding `name` to `value`.
    ///
    /// The first child is always a variable leaf.
    #[must_use]
    pub fn assign(name: impl Into<String>, value: Self) -> Self {
        Self { tag:      NodeTag::Assign,
               repr:     String::new(),
               children: vec![Self::variable(name), value], }
    }

    #[must_use]
    pub const fn tag(&self) -> NodeTag {
        self.tag
    }

    /// The literal digits of a number leaf or the name of a variable leaf.
    /// Empty for every other node.
    #[must_use]
    pub fn repr(&self) -> &str {
        &self.repr
    }

    #[must_use]
    pub fn children(&self) -> &[Self] {
        &self.children
    }

    /// Returns the first child.
    ///
    /// # Errors
    /// [`TreeError::MissingChild`] if the node is a leaf.
    pub fn first(&self) -> Result<&Self, TreeError> {
        self.child(ChildPosition::First, 0)
    }

    /// Returns the second child.
    ///
    /// # Errors
    /// [`TreeError::MissingChild`] if the node has fewer than two children.
    ///
    /// # Example
    /// ```
    /// use intcalc::{ast::Node, error::TreeError};
    ///
    /// let leaf = Node::number("7");
    /// assert!(matches!(leaf.second(), Err(TreeError::MissingChild { .. })));
    /// ```
    pub fn second(&self) -> Result<&Self, TreeError> {
        self.child(ChildPosition::Second, 1)
    }

    fn child(&self, position: ChildPosition, index: usize) -> Result<&Self, TreeError> {
        self.children
            .get(index)
            .ok_or_else(|| TreeError::MissingChild { position,
                                                     tag: self.tag,
                                                     repr: self.repr.clone() })
    }
}

impl fmt::Display for BinaryOperation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Plus => "PLUS",
            Self::Minus => "MINUS",
            Self::Mult => "MULT",
            Self::Div => "DIV",
            Self::Power => "POWER",
        };
        write!(f, "{name}")
    }
}

impl fmt::Display for UnaryOperation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Minus => write!(f, "MINUS"),
            Self::Plus => write!(f, "PLUS"),
        }
    }
}

impl fmt::Display for NodeTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Operand(Operand::Number) => write!(f, "NUMBER"),
            Self::Operand(Operand::Variable) => write!(f, "VARIABLE"),
            Self::Unary(op) => write!(f, "unary {op}"),
            Self::Binary(op) => write!(f, "binary {op}"),
            Self::Assign => write!(f, "ASSIGN"),
        }
    }
}

/// Renders the tree as a fully parenthesized prefix expression, e.g.
/// `(PLUS 5 (MULT 2 x))`.
impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self.tag {
            NodeTag::Operand(_) => return write!(f, "{}", self.repr),
            NodeTag::Unary(op) => op.to_string(),
            NodeTag::Binary(op) => op.to_string(),
            NodeTag::Assign => "LET".to_string(),
        };
        write!(f, "({name}")?;
        for child in &self.children {
            write!(f, " {child}")?;
        }
        write!(f, ")")
    }
}
