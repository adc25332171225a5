pub mod cv;
pub mod theme;
