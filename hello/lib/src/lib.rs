//! Greeting formatter for world counts.
//!
//! ## Core Items
//!
//! - [`hello`] - Render a world count into the fixed greeting sentence
//! - [`WorldCount`] - Typed world count, parseable from text
//! - [`ParseWorldCountError`] - Why a piece of text is not a world count
//!
//! ## Examples
//!
//! ```rust
//! use hello_worlds::{hello, WorldCount};
//!
//! assert_eq!(hello(42), "Hello, there are 42worlds");
//!
//! let count: WorldCount = " -5 ".parse().unwrap();
//! assert_eq!(count.greeting(), "Hello, there are -5worlds");
//! ```

mod count;
mod error;
mod greeting;

pub use count::WorldCount;
pub use error::ParseWorldCountError;
pub use greeting::{GREETING_PREFIX, GREETING_SUFFIX, hello};
