#![allow(non_snake_case)] // Allow non-snake_case identifiers (like matrix variable names)

//! # Ring Module
//!
//! Provides the [`Ring`] struct for the finite ring Z_q, the fixed-shape [`Matrix`]
//! and the modular vector/matrix operations the cryptosystem is built from.

pub mod math;
pub mod matrix;
pub mod matrix_ops;

/// Represents a mathematical vector using a `Vec<i64>`.
pub type Vector = Vec<i64>;

pub use math::Ring;
pub use matrix::Matrix;
