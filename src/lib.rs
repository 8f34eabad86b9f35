//! Decision Readiness - decision analysis model and readiness classifier
//!
//! This crate validates analyses produced upstream and classifies their
//! readiness verdict, risks, metrics and provenance into presentation facts
//! that rendering code consumes.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
