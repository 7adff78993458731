// glresolve/src/platform/mod.rs
//
//! Platform-specific backends.

pub mod generic;

#[cfg(egl_backend)]
pub use generic::egl as default;

#[cfg(windows)]
pub mod windows;
#[cfg(wgl_backend)]
pub use windows::wgl as default;
