//! Camera Module
//!
//! The pose handed to the rendering collaborator after each tick.
//! This module is window-system agnostic - it only deals with camera state and math.

pub mod pose;

pub use pose::CameraPose;
