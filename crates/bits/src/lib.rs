//! Bit-level building blocks for fixed-width hardware interface messages.
//!
//! A message is a [Bits] value: an unsigned integer paired with its declared width. Message
//! kinds describe their fields as a [BitLayout], an MSB-first table of named slots, and
//! use it both to pack field values (shift-and-OR, in declared order) and to extract them
//! again (shift-and-mask).
//!
//! Values that do not fit their declared width are handled by an [OverflowPolicy].

mod bits;
mod error;
pub mod layout;
mod policy;
pub mod utils;

pub use bits::*;
pub use error::*;
pub use layout::{BitLayout, FieldSlot};
pub use policy::*;
