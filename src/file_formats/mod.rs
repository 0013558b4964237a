pub mod vertices;

pub use vertices::{load_vertices, take_vertices};
