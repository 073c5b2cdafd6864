//! Binary serialization of scene objects.

mod instance_manager;
mod stream;

// Re-export
pub use instance_manager::*;
pub use stream::*;
