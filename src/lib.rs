//! Derm Sherpa - Interview-Driven Skin Lesion Disambiguation
//!
//! This crate turns a classifier's top-2 condition ranking into a short
//! yes/no interview and resolves it into a single suggestion, or into the
//! no-lesion outcome. The host application owns the camera, the model
//! runtime and the screen; this library owns everything in between.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
