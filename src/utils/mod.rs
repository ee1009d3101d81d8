//! Utilidades del sistema
//!
//! Manejo de errores y tipos de resultado compartidos.

pub mod errors;
