pub mod ai;
pub mod app;
pub mod config;
pub mod controllers;
pub mod domain;
