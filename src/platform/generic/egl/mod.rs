// glresolve/src/platform/generic/egl/mod.rs
//
//! The EGL backend, used on Linux, on Android, and with ANGLE on Windows.

pub mod core_library;
pub mod device;
pub(crate) mod error;
