//! Core types and definitions for the ORRERY breathing pacer.
//!
//! This crate defines the vocabulary shared across all other crates:
//! configuration, state records, commands, snapshots, events, and the
//! angle and color math. It has no dependency on any runtime framework.

pub mod angles;
pub mod commands;
pub mod components;
pub mod config;
pub mod constants;
pub mod enums;
pub mod events;
pub mod state;
pub mod types;

#[cfg(test)]
mod tests;
