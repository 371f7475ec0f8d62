#![deny(rust_2018_idioms)]

pub mod commands;
pub mod config;
pub mod console;
pub mod env;
pub mod locale;
pub mod permissions;
pub mod player;
