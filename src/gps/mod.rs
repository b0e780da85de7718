// src/gps/mod.rs
//! GPS fix data and NMEA sentence handling

pub mod data;
pub mod nmea;

pub use data::FixRecord;
