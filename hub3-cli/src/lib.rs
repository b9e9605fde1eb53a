//! Command-line front end for the HUB-3 payment payload codec.
//!
//! The `hub3` binary reads payment records and invoices as JSON and prints
//! payloads, validation reports and identifier checks. Every command has an
//! `execute` function returning its response, used by `handle` and by tests.

pub mod commands;
pub mod config;
pub mod error;
pub mod input;
pub mod output;
