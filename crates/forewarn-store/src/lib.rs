//! forewarn-store
//!
//! Append-only persistence for diagnosis records. The [`DiagnosisStore`]
//! trait is the seam: [`S3Store`] is the production backend, [`MemoryStore`]
//! serves local development and tests.

pub mod error;
pub mod memory;
pub mod objects;
pub mod s3;
pub mod store;

pub use error::StoreError;
pub use memory::MemoryStore;
pub use s3::S3Store;
pub use store::DiagnosisStore;
