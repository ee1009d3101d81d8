//! Backend de operaciones de rooming houses
//!
//! API REST para la gestión diaria de propiedades de renta por
//! habitación: bookings, pagos, limpieza, inventario, mantenimiento,
//! inquiries públicas y los ledgers de efectivo del negocio.

pub mod config;
pub mod controllers;
pub mod database;
pub mod dto;
pub mod middleware;
pub mod models;
pub mod routes;
pub mod services;
pub mod state;
pub mod storage;
pub mod utils;
