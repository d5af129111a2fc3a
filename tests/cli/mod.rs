mod all_pairs;
mod config;
mod logging;
mod shortest_paths;
mod structure;
pub mod support;
mod verify;
