//! Shared library module for the Tessera app crate.
#![allow(missing_docs, clippy::missing_errors_doc, clippy::missing_panics_doc)]

pub use self::{app::TesseraApp, config::Args};

pub mod action;
pub mod action_handler;
pub mod app;
pub mod config;
pub mod state;
pub mod ui;
pub mod view_model_builder;
