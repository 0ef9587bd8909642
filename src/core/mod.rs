//! Core domain logic for the early-access signup workflow

mod signup;

pub use signup::*;
