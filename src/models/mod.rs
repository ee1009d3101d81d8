//! Modelos del sistema
//!
//! Este módulo contiene todos los modelos de datos que mapean exactamente
//! al schema PostgreSQL con las convenciones estándar. Los enums de texto
//! se validan una sola vez en el boundary (serde / FromRow).

pub mod auth;
pub mod user;
pub mod property;
pub mod guest;
pub mod booking;
pub mod operations;
pub mod inquiry;
pub mod ledger;
