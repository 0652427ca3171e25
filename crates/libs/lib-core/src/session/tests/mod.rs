//! # Session Tests
//!
//! Scenario tests for the connection session, driven through scripted
//! connectors and a recording EIP-1193 provider.

mod connect;
mod chain;
