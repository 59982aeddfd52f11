#![cfg_attr(not(feature = "std"), no_std)]

#[cfg_attr(test, macro_use)]
extern crate alloc;

pub mod balanced;
pub mod common;
pub mod hashed_list;
