pub mod gpu_context;

pub use gpu_context::GpuContext;
