//! Pure data structures: the menu item (which implements
//! [`ActorEntity`](crate::framework::ActorEntity)) and the derived order
//! summary types.

pub mod item;
pub mod summary;

pub use item::*;
pub use summary::*;
