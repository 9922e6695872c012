//! Reading and writing molecular coordinate files.
//!
//! Formats implement the [`traits::MolecularFile`] trait, which provides
//! path-based convenience methods on top of the reader/writer primitives.

pub mod traits;
pub mod xyz;
