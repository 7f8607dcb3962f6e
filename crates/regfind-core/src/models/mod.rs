//! Data models for extracted address components and configuration.

pub mod address;
pub mod config;
