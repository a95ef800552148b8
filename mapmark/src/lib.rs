// Include handlers module directly from handlers.rs
#[path = "handlers.rs"]
pub mod handlers;

// Re-export commonly used handler functions for convenience
pub use handlers::{CheckReport, RenderOptions, expand_path, run_check, run_normalize, run_render};
