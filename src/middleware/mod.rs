//! Middleware del sistema
//!
//! Autenticación por bearer token, gating por rol y CORS.

pub mod auth;
pub mod cors;
