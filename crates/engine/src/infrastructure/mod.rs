//! Infrastructure implementations.
//!
//! Contains the Judge.me port implementation plus configuration and
//! request-correlation helpers.

pub mod config;
pub mod correlation;
pub mod judgeme;
pub mod ports;
