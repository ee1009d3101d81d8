//! Services module
//!
//! Este módulo contiene la lógica de negocio pura de la aplicación:
//! emisión de tokens, scoping por rol, agregación de stats y door codes.
//! Los services no tocan storage; operan sobre datos ya cargados.

pub mod jwt_service;
pub mod scope_service;
pub mod stats_service;
pub mod door_code_service;
