//! httpc - Interactive HTTP/1.0 Client
//!
//! Core library for command parsing and the HTTP/1.0 wire engine.

pub mod cli;
pub mod config;
pub mod http;
pub mod net;
