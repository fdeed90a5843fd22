//! Terminal front end for the vector map editor: the editing session, view
//! projections, configuration, and text rendering.

pub mod commands;
pub mod config;
pub mod dto;
pub mod render;
pub mod session;
