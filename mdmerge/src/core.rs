// src/core.rs
pub mod discovery;
pub mod merger;
pub mod paths;
