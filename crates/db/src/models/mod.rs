//! Row structs.
//!
//! Each submodule holds `FromRow` structs mirroring a table, plus the
//! conversion into the matching `assetline-core` type. Enumerated columns are
//! stored as TEXT and parsed on the way out.

pub mod asset;
pub mod ledger;
pub mod reference;
