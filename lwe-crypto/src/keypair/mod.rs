#![allow(non_snake_case)] // Allow non-snake_case identifiers (like matrix_A)

//! Key generation, encryption and decryption of single bits.

pub mod ciphertext;
pub mod keys;
pub mod params;
