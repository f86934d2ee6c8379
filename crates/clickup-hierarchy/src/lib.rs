//! ClickUp Hierarchy - Per-call workspace tree and name → id resolution
//!
//! Every lookup builds its own tree from fresh listings and discards it
//! afterwards. Nothing is cached across calls, so an entity created by one
//! call is visible to the next resolution.

pub mod resolve;
pub mod tree;

pub use resolve::{find_by_name, locate, resolve, Resolver};
pub use tree::build_tree;
