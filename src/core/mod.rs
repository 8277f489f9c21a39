pub mod gpu_context;
pub mod gpu_sink;
pub mod input_adapter;
pub mod recording_sink;
pub mod scripted;

pub use gpu_context::GpuContext;
pub use gpu_sink::GpuTransformSink;
pub use input_adapter::WinitController;
pub use recording_sink::RecordingSink;
pub use scripted::ScriptedController;
