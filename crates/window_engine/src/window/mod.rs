//! Windows: mirrored state, the borrowed [`Window`] view and the registry

mod callbacks;
mod handle;
mod registry;
mod state;

pub use handle::Window;
pub use registry::WindowRegistry;
pub use state::WindowState;
