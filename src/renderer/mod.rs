//! wgpu rendering module
//!
//! Everything is drawn as flat-colored triangles in logical pixel space.

pub mod pipeline;
pub mod shapes;
pub mod text;
pub mod vertex;

pub use pipeline::RenderState;
pub use text::TextFont;
pub use vertex::Vertex;
