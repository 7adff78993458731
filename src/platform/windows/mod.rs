// glresolve/src/platform/windows/mod.rs
//
//! Windows backends.

#[cfg(wgl_backend)]
pub mod wgl;
