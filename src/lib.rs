pub mod advance;
pub mod body;
pub mod bounds;
pub mod collision;
pub mod logging;
pub mod render;
pub mod simulation;
pub mod world_gen;
