//! Card system: card snapshots, color identity, and the card pool.
//!
//! ## Key Types
//!
//! - `Card`: Read-only card record (faces, cost, identity, keywords)
//! - `CardType`: Structural type used to group results
//! - `ColorIdentity`: WUBRG bit set
//! - `CardPool`: Ordered lookup by name and alternate face name

pub mod color;
pub mod definition;
pub mod pool;

pub use color::ColorIdentity;
pub use definition::{Card, CardType, FACE_SEPARATOR};
pub use pool::CardPool;
