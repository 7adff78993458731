// glresolve/src/lib.rs
//
//! Resolution of OpenGL entry points into explicitly-owned function tables.
//!
//! Every OpenGL namespace (desktop GL, OpenGL ES 2, WGL) is exposed as a generated table type
//! holding one function slot per entry point. A `Resolver` fills a table by asking the platform
//! for the address of each entry point, falling back to the statically-exported core functions of
//! the system GL library when the driver reports none. If no context is current when resolution
//! starts, a hidden drawable and a transient context are created for the duration of the pass.
//!
//! ```ignore
//! use glresolve::{Gl, SlotTable};
//!
//! let gl: Gl = glresolve::load()?;
//! unsafe { gl.ClearColor(0.0, 0.0, 0.0, 1.0) };
//! ```
//!
//! Tables are thread-agnostic values, but the functions they point to are not: only call through
//! a table on a thread where a context compatible with the one it was resolved against is current.

#[macro_use]
extern crate log;

pub mod platform;
#[cfg(any(egl_backend, wgl_backend))]
pub use platform::default::core_library::SystemCoreLibrary;
#[cfg(any(egl_backend, wgl_backend))]
pub use platform::default::device::Device;

pub mod error;
pub use crate::error::{Error, WindowingApiError};

mod address;
pub use crate::address::ProcAddress;

mod attributes;
pub use crate::attributes::{DrawableAttributeFlags, DrawableAttributes, ResolverOptions};

mod core_library;
pub use crate::core_library::{CoreLibrary, NoCoreLibrary, StaticCoreLibrary};

mod device;
pub use crate::device::Device as DeviceInterface;

mod info;
pub use crate::info::{GLApi, GLVersion};

pub mod interop;

mod resolver;
pub use crate::resolver::{ResolveReport, Resolver};

mod slot;
pub use crate::slot::{FnSlot, SlotBinding};

pub mod tables;
pub use crate::tables::{Gl, Gles1, Gles2, Namespace, SlotTable};
#[cfg(windows)]
pub use crate::tables::Wgl;

#[cfg(egl_backend)]
#[allow(non_camel_case_types)]
mod egl {
    use std::os::raw::{c_long, c_void};
    pub type khronos_utime_nanoseconds_t = khronos_uint64_t;
    pub type khronos_uint64_t = u64;
    pub type khronos_ssize_t = c_long;
    pub type EGLint = i32;
    pub type EGLNativeDisplayType = *const c_void;
    pub type EGLNativePixmapType = *const c_void;
    pub type EGLNativeWindowType = *const c_void;
    pub type NativeDisplayType = EGLNativeDisplayType;
    pub type NativePixmapType = EGLNativePixmapType;
    pub type NativeWindowType = EGLNativeWindowType;
    include!(concat!(env!("OUT_DIR"), "/egl_bindings.rs"));
}

/// Resolves a table against the platform default device and the system GL library.
///
/// This must be called on the thread that will use the table. If a context is current on that
/// thread, the table is resolved against it; otherwise a transient context is created and torn
/// down again before this returns.
#[cfg(any(egl_backend, wgl_backend))]
pub fn load<T>() -> Result<T, Error>
where
    T: SlotTable,
{
    let api = T::NAMESPACE.gl_api();
    let device = Device::new(api)?;
    let core_library = SystemCoreLibrary::open(T::NAMESPACE)?;
    let options = ResolverOptions::for_namespace(T::NAMESPACE);
    let mut resolver = Resolver::with_options(device, core_library, options);
    resolver.resolve()
}

#[cfg(test)]
mod tests;
