/// Numeric conversion helpers.
///
/// Converts arbitrary-precision integers to the machine-sized values some
/// operations need, reporting values that do not fit instead of truncating
/// them.
pub mod num;
