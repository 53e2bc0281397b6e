//! Command-line interface utilities and display functions
//!
//! This module provides CLI-related functionality including:
//! - Board rendering
//! - A console observer that narrates a match turn by turn

#![cfg(feature = "std")]

pub mod interface;

// Re-export interface functions
pub use interface::*;
