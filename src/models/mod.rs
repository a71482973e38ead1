//! Data models for projanitor
pub mod analysis;
pub mod catalog;
pub mod config;
