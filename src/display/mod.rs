// src/display/mod.rs
//! Console reporting for pipeline runs

pub mod terminal;
