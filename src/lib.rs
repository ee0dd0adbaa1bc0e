pub mod catalog;
pub mod core;
pub mod gui;
pub mod quiz;
