mod fixtures;
pub use fixtures::*;

// Re-export the pipeline surface so test files pull one path
pub use colorcube::{Dimensions, GridPipeline, UniformPipeline, write_image};
