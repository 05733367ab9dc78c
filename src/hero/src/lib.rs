// src/hero/src/lib.rs
//! The player's character: vitals, potion bag and achievements.

mod bag;
mod core;

pub use self::{
    bag::{Bag, BagError, Item},
    core::Hero,
};
