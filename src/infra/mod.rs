//! Infrastructure layer (adapters/implementations).
//!
//! Configuration on disk, the identity provider and the HTTP backend.

pub mod api;
pub mod app_config;
pub mod auth;
