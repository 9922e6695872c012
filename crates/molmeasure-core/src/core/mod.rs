//! # Core Module
//!
//! The building blocks of molmeasure.
//!
//! - **Measurements** ([`geometry`]) - Distances and angles between points
//! - **Connectivity** ([`bonds`]) - Distance-threshold bond lists
//! - **Molecular Representation** ([`models`]) - Element symbols paired with coordinates
//! - **File I/O** ([`io`]) - Reading and writing coordinate files

pub mod bonds;
pub mod geometry;
pub mod io;
pub mod models;
