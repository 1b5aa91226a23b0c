pub mod color_scheme;
pub mod command;
pub mod controller;
pub mod debouncer;
pub mod finder;
pub mod form;
pub mod keymap;
pub mod message;
pub mod render;
pub mod terminal;
