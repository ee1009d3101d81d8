//! Controllers de la API
//!
//! Cada controller recibe el storage inyectado, aplica las reglas de
//! negocio (scoping por rol, invariantes, cascadas) y deja el shaping
//! HTTP a las rutas.

pub mod auth_controller;
pub mod user_controller;
pub mod property_controller;
pub mod booking_controller;
pub mod operations_controller;
pub mod inquiry_controller;
pub mod ledger_controller;
