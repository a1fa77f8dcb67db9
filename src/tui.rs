//! Terminal card picker: assemble two hands and ask for a verdict.

pub mod app;
pub mod controller;
pub mod ui;
