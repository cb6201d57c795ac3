//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async SQL methods. Reads
//! take `&PgPool`; writes that belong to a lifecycle step take the open
//! transaction so they commit or roll back together.

pub mod asset_repo;
pub mod disposal_repo;
pub mod reference_repo;
pub mod transfer_repo;

pub use asset_repo::AssetRepo;
pub use disposal_repo::DisposalRepo;
pub use reference_repo::ReferenceRepo;
pub use transfer_repo::TransferRepo;
