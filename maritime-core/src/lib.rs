//! Core types and map-layer logic for the maritime measurement map.
//!
//! This crate is shared by the WASM map app and the native CLI:
//! - `site`, `marker`: wire types returned by the measurements API
//! - `domain`, `scale`, `color`: color domain selection and marker color resolution
//! - `query`, `csrf`, `config`, `generation`: request building and fetch bookkeeping
//! - `trace`, `click`, `surface`, `site_layer`: marker rendering, interaction and traces

pub mod click;
pub mod color;
pub mod config;
pub mod csrf;
pub mod domain;
pub mod error;
pub mod generation;
pub mod marker;
pub mod query;
pub mod scale;
pub mod site;
pub mod site_layer;
pub mod surface;
pub mod trace;

pub use error::{Error, Result};
