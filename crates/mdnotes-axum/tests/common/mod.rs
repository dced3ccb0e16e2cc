//! Shared fixtures for mdnotes-axum integration tests.

pub mod roots;
