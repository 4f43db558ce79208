pub mod contraction;
pub mod pathfinding;
pub mod unpacking;
pub mod witness;
