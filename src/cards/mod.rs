//! Card faces, icon pools and board cards.

pub mod card;
pub mod face;

pub use card::{CardView, MemoryCard};
pub use face::{CardFace, IconPool, ImageRef, StockIcon};
