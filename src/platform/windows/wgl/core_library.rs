// glresolve/src/platform/windows/wgl/core_library.rs
//
//! The functions `opengl32.dll` exports directly: OpenGL 1.1 and the WGL 1.0 entry points.

use crate::platform::generic::library::DynamicLibrary;
use crate::{CoreLibrary, Error, Namespace, ProcAddress};

use std::sync::LazyLock;

static OPENGL32_LIBRARY: LazyLock<Option<DynamicLibrary>> =
    LazyLock::new(|| DynamicLibrary::open(&[c"opengl32.dll"]));

/// The system OpenGL library, `opengl32.dll`.
///
/// `wglGetProcAddress()` doesn't report the functions this library exports itself, so for desktop
/// OpenGL this is where every OpenGL 1.1 entry point comes from.
pub struct SystemCoreLibrary {
    library: &'static DynamicLibrary,
    prefix: &'static str,
}

impl SystemCoreLibrary {
    /// Opens `opengl32.dll` for the `Gl` or `Wgl` namespace.
    pub fn open(namespace: Namespace) -> Result<SystemCoreLibrary, Error> {
        match namespace {
            Namespace::Gl | Namespace::Wgl => {}
            Namespace::Gles1 | Namespace::Gles2 => return Err(Error::UnsupportedOnThisPlatform),
        }
        match *OPENGL32_LIBRARY {
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
