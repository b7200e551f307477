pub mod models;
pub mod sampling;
pub mod sink;

pub use models::Dimensions;
pub use sampling::{GridPipeline, UniformPipeline};
pub use sink::write_image;
