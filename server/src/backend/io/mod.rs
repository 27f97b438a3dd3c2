//! # IO Module
//!
//! The interface layer between clients and the domain logic. MotoFlow exposes
//! a JSON REST API built on axum; any UI can render its tables and charts.

pub mod rest;

pub use rest::*;
