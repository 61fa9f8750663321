pub mod colliders;
pub mod collision;
pub mod contact;
pub mod solvers;
pub use collision::collision_system;
pub use collision::{reset_colors, resolve_collisions};
