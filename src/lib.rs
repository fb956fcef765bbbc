//! Headless Space Invaders simulation.
//!
//! The crate root exposes the pure game core: entity types, the enemy
//! formation, the world configuration, the adapter-facing input contract and
//! the per-tick compute functions.  Nothing in here touches a terminal — the
//! `invaders` binary owns all crossterm I/O.

pub mod compute;
pub mod config;
pub mod entities;
pub mod formation;
pub mod input;
