pub mod exact;
pub mod fixture;
pub mod hail;
pub mod paths;
pub mod stone;

pub use hail::{Axis, Hailstone, ParseHailstoneError, Vec3};
pub use stone::{solve, Branch, Equation, EquationSet, Solution, SolveError, Unknown};
