//! Potion Quest: a linear, turn-based text adventure.
//!
//! The hero fights a fixed roster of enemies with an ally at their side and a
//! bag of potions. Game logic lives in the workspace crates (`combat`,
//! `hero`, `achievements`, `error`); this crate wires them to the console.

pub mod battle;
pub mod config;
pub mod game_loop;
pub mod input;
pub mod narrator;
