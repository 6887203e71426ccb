//! WebGPU rendering module
//!
//! The world is flattened into a list of colored triangles in canvas pixels each
//! frame, then mapped to clip space and drawn in a single pass.

pub mod pipeline;
pub mod scene;
pub mod shapes;
pub mod vertex;

pub use pipeline::RenderState;
pub use vertex::Vertex;
