//! Core 2-D waterfall particle simulation library.
//!
//! Main components:
//! - [`waterfall`] — particle set, spawn band and waypoint.
//! - [`particle`] — a single falling particle and its state.
//! - [`trail`] — fixed-length position history behind each particle.
//! - [`phases`] — high-level simulation phases / pipeline.
//! - [`surface`] — drawing contract the simulation renders onto.
//! - [`config`] — global configuration for the motion law.
//! - [`types`] — shared type aliases and IDs.

pub mod config;
pub mod particle;
pub mod phases;
pub mod surface;
pub mod trail;
pub mod types;
pub mod waterfall;
