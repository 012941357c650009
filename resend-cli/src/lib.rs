//! Command-line client for the Resend received-email and domain APIs.
//!
//! The binary (`resend`) parses arguments with [`cli`], reads credentials
//! with [`config`], runs one handler from [`commands`] and prints what
//! [`render`] produced. Failures are reported through a single boundary,
//! [`commands::run_action`].

pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod render;
