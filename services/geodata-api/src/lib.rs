//! SGU Geodata Service Library
//!
//! The [`facade::GeodataFacade`] answers geodata questions for named layers
//! (bedrock, soil types, groundwater, radon, wells, aggregates) by picking
//! the right upstream protocol client per layer. The `handlers` module
//! exposes the facade over HTTP for the tool-calling layer.

pub mod config;
pub mod facade;
pub mod handlers;
pub mod layers;
pub mod shaping;
pub mod state;
