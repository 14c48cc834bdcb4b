//! Platform abstraction layer
//!
//! Platform adapters feed abstract events in; the simulation only ever sees
//! the resulting per-tick `TickInput`.

pub mod input;

pub use input::{InputEvent, InputTranslator, Key};
