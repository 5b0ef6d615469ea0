//! Render geometry
//!
//! Builds CPU-side triangle lists from simulation state. Uploading and
//! compositing them is left to whatever renderer embeds the game.

pub mod shapes;
pub mod vertex;

pub use vertex::{Vertex, colors};
