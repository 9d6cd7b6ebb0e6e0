//! Option trees and the resolution engine.
//!
//! This module provides the pieces user configuration flows through:
//!
//! - [`Node`] / [`Value`]: the nested configuration tree type
//! - [`merge`]: deep merge with the crate's conflict policy
//! - [`expand`]: comma-shorthand key expansion
//! - [`resolve`] / [`ResolvedOptions`]: defaults ⊕ user variants
//!
//! The flow is `raw user node → expand → resolve → per-family subtree`,
//! after which the component registrars take over.

mod expand;
mod merge;
mod resolve;
mod value;

pub use expand::expand;
pub use merge::merge;
pub use resolve::{resolve, ResolvedOptions};
pub use value::{IconGenerator, Node, Value};
