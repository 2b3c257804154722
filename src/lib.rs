//! Strategy board assets - extraction of board object metadata
//!
//! This library provides functionality to:
//! - Load the sprite parameter table and the object name table (JSON5)
//! - Join them into one ordered list of sprite descriptors
//! - Reduce descriptors to the runtime manifest
//! - Render either list as compact JSON

pub mod cli;
pub mod config;
pub mod enumeration;
pub mod identifier;
pub mod manifest;
pub mod models;
pub mod output;
pub mod project;
pub mod tables;
