// src/lib.rs

//! moodring Library

pub mod config;
pub mod error;
pub mod models;
pub mod pipeline;
pub mod sentiment;
pub mod services;
pub mod storage;
pub mod utils;
