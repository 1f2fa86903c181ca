//! Vertex buffers for an external renderer
//!
//! Nothing here touches a GPU: the host uploads these `Pod` vertices
//! however it likes.

pub mod shapes;
pub mod vertex;

pub use vertex::Vertex;
