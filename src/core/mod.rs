pub mod graph;
pub mod ids;
pub mod random;
pub mod universe;
