//! Tag handlers for resume elements.

mod card;
mod contact;
mod container;
mod leaf;

pub use card::*;
pub use contact::*;
pub use container::*;
pub use leaf::*;
