mod noop;
mod traits;
mod transform;

#[cfg(feature = "avian2d")]
pub mod avian;

pub use noop::NoOpBackendPlugin;
pub use traits::RunnerBackend;
pub use transform::TransformBackend;

#[cfg(feature = "avian2d")]
pub use avian::Avian2dBackend;
