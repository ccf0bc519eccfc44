// src/core.rs
pub mod counter;
pub mod generator;
pub mod inputs;
pub mod render;
