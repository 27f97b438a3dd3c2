//! MotoFlow server: planning metrics, record storage and the REST API for a
//! courier's finance dashboard.

pub mod backend;
pub mod config;
