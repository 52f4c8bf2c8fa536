pub mod args;
pub mod commands;
pub mod error;
pub mod logging;
pub mod preprocess;
pub mod simulate;
pub mod toolkit;
pub mod visualize;
pub mod visuals;
