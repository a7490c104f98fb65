//! SentientVision CLI library.

pub mod analyzer;
pub mod cli;
pub mod config;
pub mod error;
pub mod intake;
pub mod report;
