//! Adapters - Implementations of the ports.

pub mod storage;
