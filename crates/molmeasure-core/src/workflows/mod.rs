//! # Workflows Module
//!
//! High-level entry points that combine the `core` measurements into a complete
//! structural analysis.
//!
//! - **Configuration** ([`config`]) - Validated analysis settings and their builder
//! - **Structure Analysis** ([`analyze`]) - Bonds, bond angles and summary statistics
//!   for a molecule or an XYZ file

pub mod analyze;
pub mod config;
