pub mod assets;
pub mod config_file;
pub mod dirty;
pub mod input;
pub mod ui;

