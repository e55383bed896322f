//! The greeting template and its formatter.

/// Text placed before the count.
pub const GREETING_PREFIX: &str = "Hello, there are ";

/// Text placed directly after the count.
///
/// There is no space between the count and this suffix; existing callers
/// depend on the exact output.
pub const GREETING_SUFFIX: &str = "worlds";

/// Formats `world_count` into the greeting sentence.
///
/// The count is rendered in canonical base 10: negative values get a single
/// leading minus, zero is `0`, and there are no leading zeros or group
/// separators.
///
/// ## Examples
///
/// ```rust
/// use hello_worlds::hello;
///
/// assert_eq!(hello(0), "Hello, there are 0worlds");
/// assert_eq!(hello(-5), "Hello, there are -5worlds");
/// ```
#[inline]
pub fn hello(world_count: i32) -> String {
    format!("{GREETING_PREFIX}{world_count}{GREETING_SUFFIX}")
}
