// glresolve/src/platform/windows/wgl/mod.rs
//
//! A backend using the native Windows OpenGL WGL API.

pub mod core_library;
pub mod device;
