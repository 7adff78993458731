// glresolve/src/platform/generic/egl/core_library.rs
//
//! The statically-exported functions of the system OpenGL libraries.

use crate::platform::generic::library::DynamicLibrary;
use crate::{CoreLibrary, Error, Namespace, ProcAddress};

use std::ffi::CStr;
use std::sync::LazyLock;

#[cfg(all(not(target_os = "windows"), not(target_os = "android")))]
static GL_LIBRARY_NAMES: &[&CStr] = &[c"libGL.so.1", c"libGL.so"];
#[cfg(any(target_os = "windows", target_os = "android"))]
static GL_LIBRARY_NAMES: &[&CStr] = &[];

#[cfg(not(target_os = "windows"))]
static GLES1_LIBRARY_NAMES: &[&CStr] = &[c"libGLESv1_CM.so.1", c"libGLESv1_CM.so"];
#[cfg(target_os = "windows")]
static GLES1_LIBRARY_NAMES: &[&CStr] = &[];

#[cfg(not(target_os = "windows"))]
static GLES2_LIBRARY_NAMES: &[&CStr] = &[c"libGLESv2.so.2", c"libGLESv2.so"];
#[cfg(target_os = "windows")]
static GLES2_LIBRARY_NAMES: &[&CStr] = &[c"libGLESv2.dll"];

static GL_LIBRARY: LazyLock<Option<DynamicLibrary>> =
    LazyLock::new(|| DynamicLibrary::open(GL_LIBRARY_NAMES));
static GLES1_LIBRARY: LazyLock<Option<DynamicLibrary>> =
    LazyLock::new(|| DynamicLibrary::open(GLES1_LIBRARY_NAMES));
static GLES2_LIBRARY: LazyLock<Option<DynamicLibrary>> =
    LazyLock::new(|| DynamicLibrary::open(GLES2_LIBRARY_NAMES));

/// The system library exporting the core functions of a namespace.
///
/// Lookups re-add the namespace prefix, so `Clear` is found as the `glClear` export.
pub struct SystemCoreLibrary {
    library: &'static DynamicLibrary,
    prefix: &'static str,
}

impl SystemCoreLibrary {
    /// Opens the library that exports the core functions of `namespace`.
    ///
    /// Returns `NoGLLibraryFound` if it isn't installed, and `UnsupportedOnThisPlatform` for
    /// namespaces that don't exist under EGL.
    pub fn open(namespace: Namespace) -> Result<SystemCoreLibrary, Error> {
        let library = match namespace {
            Namespace::Gl => &*GL_LIBRARY,
            Namespace::Gles1 => &*GLES1_LIBRARY,
            Namespace::Gles2 => &*GLES2_LIBRARY,
            Namespace::Wgl => return Err(Error::UnsupportedOnThisPlatform),
        };
        match *library {
            Some(ref library) => Ok(SystemCoreLibrary { library, prefix: namespace.prefix() }),
            None => Err(Error::NoGLLibraryFound),
        }
    }
}

impl CoreLibrary for SystemCoreLibrary {
    fn lookup(&self, core_name: &str) -> Option<ProcAddress> {
        let symbol_name = format!("{}{}", self.prefix, core_name);
        self.library.symbol(&symbol_name).valid()
    }
}
