pub mod algorithms;
pub mod config;
pub mod containers;
pub mod error;
pub mod grid;
pub mod maze;
pub mod simulation;
pub mod statistics;
pub mod trace;
