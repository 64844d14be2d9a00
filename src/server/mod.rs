//! Server application core modules.
//!
//! This module contains all server-side functionality: HTTP routing and controllers,
//! the service layer holding the favorites rules, sea-orm repositories, error types,
//! configuration and process startup.

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod config;
pub mod controller;
pub mod data;
pub mod error;
pub mod model;
pub mod router;
pub mod service;
pub mod startup;
