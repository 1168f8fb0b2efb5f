pub mod brent;
pub mod direction;
pub mod objective;
pub mod solver;
