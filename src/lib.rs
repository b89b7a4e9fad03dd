// Library exports for the pathfinder Battlesnake
// The server binary, the replay tool and the integration tests all share this core

pub mod bot;
pub mod config;
pub mod debug_logger;
pub mod engine;
pub mod error;
pub mod escape;
pub mod grid;
pub mod handler;
pub mod heuristic;
pub mod replay;
pub mod search;
pub mod targeting;
pub mod types;
