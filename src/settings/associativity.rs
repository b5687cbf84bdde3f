/// How repeated operators of one precedence level group.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Associativity {
    /// `a - b - c` groups as `(a - b) - c`.
    Left,
    /// `a ** b ** c` groups as `a ** (b ** c)`.
    Right,
}
