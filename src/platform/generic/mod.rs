// glresolve/src/platform/generic/mod.rs
//
//! Backends that aren't tied to one operating system.

#[cfg(egl_backend)]
pub mod egl;

#[cfg(any(egl_backend, wgl_backend))]
pub(crate) mod library;
