//! HCROI Engine - Human-capital return on investment scoring.
//!
//! Derives criterion weights from AHP pairwise judgments, scores employees
//! against those weights and their monthly sales, classifies them into risk
//! tiers and builds the workforce dashboard.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
