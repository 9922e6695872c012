//! # molmeasure
//!
//! Geometric helpers for molecular analysis: interatomic distances, bond angles,
//! and distance-based bond lists.
//!
//! ## Layout
//!
//! - **[`core`]: The Foundation.** Stateless measurement functions (`geometry`),
//!   the bond-list routine (`bonds`), the `Molecule` model, and file I/O.
//!
//! - **[`workflows`]: The Public API.** Ties the `core` pieces together into a
//!   complete structural analysis of a molecule, driven by an `AnalysisConfig`.

pub mod core;
pub mod workflows;
