//! Health Risk - Chronic-disease risk scoring service
//!
//! This crate blends a trained classifier with a rule-based point table to
//! turn a loosely typed health record into a risk tier and verdict.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
