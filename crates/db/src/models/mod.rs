//! Database row structs.
//!
//! Each submodule holds a `FromRow` + `Serialize` struct matching a table.
//! Insert payloads come from `inventory_core` so they are validated before
//! they reach this crate.

pub mod product;
