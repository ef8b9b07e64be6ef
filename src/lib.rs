// src/lib.rs
//! repo-scaffold library.

#![deny(missing_docs)]

pub mod cli;
pub mod config;
pub mod error;
pub mod logging;
pub mod naming;
pub mod normalize;
pub mod prompt;
pub mod registry;
pub mod shell;
pub mod target;
pub mod workflow;
