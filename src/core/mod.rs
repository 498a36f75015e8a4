//! Core library components.
//!
//! This module contains the service registry, the field cipher, and the
//! configuration document model.

pub mod cipher;
pub mod config;
pub mod constants;
pub mod loader;
pub mod registry;
pub mod service;
pub mod views;
