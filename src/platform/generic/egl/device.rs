// glresolve/src/platform/generic/egl/device.rs
//
//! A device backed by the default EGL display.

use super::error::ToWindowingApiError;
use crate::egl;
use crate::egl::types::{EGLConfig, EGLContext, EGLDisplay, EGLNativeDisplayType, EGLSurface};
use crate::egl::types::{EGLenum, EGLint};
use crate::egl::Egl;
use crate::platform::generic::library::DynamicLibrary;
use crate::{DeviceInterface, DrawableAttributes, Error, GLApi, GLVersion, ProcAddress};
use crate::WindowingApiError;

use std::ffi::{CStr, CString};
use std::os::raw::c_void;
use std::ptr;
use std::sync::LazyLock;
use std::thread;

const RGB_CHANNEL_BIT_DEPTH: EGLint = 8;

#[cfg(not(target_os = "windows"))]
static EGL_LIBRARY_NAMES: [&CStr; 2] = [c"libEGL.so.1", c"libEGL.so"];
#[cfg(target_os = "windows")]
static EGL_LIBRARY_NAMES: [&CStr; 1] = [c"libEGL.dll"];

static EGL_LIBRARY: LazyLock<Option<DynamicLibrary>> =
    LazyLock::new(|| DynamicLibrary::open(&EGL_LIBRARY_NAMES));

thread_local! {
    pub(crate) static EGL_FUNCTIONS: Egl = Egl::load_with(egl_symbol);
}

fn egl_symbol(symbol_name: &str) -> *const c_void {
    match *EGL_LIBRARY {
        Some(ref library) => library.symbol(symbol_name).as_ptr(),
        None => ptr::null(),
    }
}

/// A thread-local handle to the default EGL display.
///
/// The display is initialized on creation and never terminated, since other code in the process
/// may be sharing it.
pub struct Device {
    egl_display: EGLDisplay,
    gl_api: GLApi,
}

/// A context created by `Device::create_context()`.
pub struct Context {
    pub(crate) egl_context: EGLContext,
}

/// A 16×16 pbuffer surface, the hidden drawable of the EGL backend.
pub struct Drawable {
    pub(crate) egl_surface: EGLSurface,
    pub(crate) egl_config: EGLConfig,
}

impl Drop for Context {
    #[inline]
    fn drop(&mut self) {
        if self.egl_context != egl::NO_CONTEXT && !thread::panicking() {
            panic!("Contexts must be destroyed explicitly with `destroy_context`!")
        }
    }
}

impl Drop for Drawable {
    #[inline]
    fn drop(&mut self) {
        if self.egl_surface != egl::NO_SURFACE && !thread::panicking() {
            panic!("Drawables must be destroyed explicitly with `destroy_drawable`!")
        }
    }
}

impl Device {
    /// Opens and initializes the default EGL display for the given API.
    pub fn new(gl_api: GLApi) -> Result<Device, Error> {
        if EGL_LIBRARY.is_none() {
            return Err(Error::NoGLLibraryFound);
        }

        EGL_FUNCTIONS.with(|egl| unsafe {
            let egl_display = egl.GetDisplay(egl::DEFAULT_DISPLAY as EGLNativeDisplayType);
            if egl_display == egl::NO_DISPLAY {
                error!("eglGetDisplay() failed: {:x}", egl.GetError());
                return Err(Error::DeviceOpenFailed);
            }

            let (mut major_version, mut minor_version) = (0, 0);
            let result = egl.Initialize(egl_display, &mut major_version, &mut minor_version);
            if result == egl::FALSE {
                error!("eglInitialize() failed: {:x}", egl.GetError());
                return Err(Error::DeviceOpenFailed);
            }
            debug!("initialized EGL {}.{}", major_version, minor_version);

            Ok(Device { egl_display, gl_api })
        })
    }

    /// Returns the underlying EGL display.
    #[inline]
    pub fn egl_display(&self) -> EGLDisplay {
        self.egl_display
    }

    fn egl_api(&self) -> EGLenum {
        match self.gl_api {
            GLApi::GL => egl::OPENGL_API,
            GLApi::GLES => egl::OPENGL_ES_API,
        }
    }

    /// Runs `f` with this device's client API bound, then rebinds whatever API the thread had.
    ///
    /// The current context and the kind of context `eglCreateContext()` makes are per-API thread
    /// state, and the bound API itself belongs to the application.
    fn with_api<F, R>(&self, f: F) -> Result<R, WindowingApiError>
    where
        F: FnOnce(&Egl) -> R,
    {
        EGL_FUNCTIONS.with(|egl| unsafe {
            let api = self.egl_api();
            let previous_api = egl.QueryAPI();
            if previous_api != api && egl.BindAPI(api) == egl::FALSE {
                return Err(egl.GetError().to_windowing_api_error());
            }

            let result = f(egl);

            if previous_api != api && egl.BindAPI(previous_api) == egl::FALSE {
                let err = egl.GetError();
                warn!("eglBindAPI() failed to restore API {:x}: {:x}", previous_api, err);
            }
            Ok(result)
        })
    }
}

impl DeviceInterface for Device {
    type Context = Context;
    type Drawable = Drawable;

    #[inline]
    fn gl_api(&self) -> GLApi {
        self.gl_api
    }

    fn has_current_context(&self) -> bool {
        let current = self.with_api(|egl| unsafe { egl.GetCurrentContext() != egl::NO_CONTEXT });
        match current {
            Ok(current) => current,
            Err(err) => {
                warn!("eglBindAPI() failed: {:?}", err);
                false
            }
        }
    }

    fn create_hidden_drawable(
        &mut self,
        attributes: &DrawableAttributes,
        version: GLVersion,
    ) -> Result<Drawable, Error> {
        let renderable_type = match self.gl_api {
            GLApi::GL => egl::OPENGL_BIT,
            GLApi::GLES if version.major < 2 => egl::OPENGL_ES_BIT,
            GLApi::GLES => egl::OPENGL_ES2_BIT,
        };

        // Pbuffers are single-buffered, so `DOUBLE_BUFFER` has no say in the config.
        let config_attributes = [
            egl::SURFACE_TYPE as EGLint,    egl::PBUFFER_BIT as EGLint,
            egl::RENDERABLE_TYPE as EGLint, renderable_type as EGLint,
            egl::RED_SIZE as EGLint,        RGB_CHANNEL_BIT_DEPTH,
            egl::GREEN_SIZE as EGLint,      RGB_CHANNEL_BIT_DEPTH,
            egl::BLUE_SIZE as EGLint,       RGB_CHANNEL_BIT_DEPTH,
            egl::ALPHA_SIZE as EGLint,      attributes.alpha_bits() as EGLint,
            egl::DEPTH_SIZE as EGLint,      attributes.depth_bits() as EGLint,
            egl::STENCIL_SIZE as EGLint,    attributes.stencil_bits() as EGLint,
            egl::NONE as EGLint,            0,
            0,                              0,
        ];

        EGL_FUNCTIONS.with(|egl| unsafe {
            let (mut egl_config, mut config_count) = (ptr::null(), 0);
            let result = egl.ChooseConfig(
                self.egl_display,
                config_attributes.as_ptr(),
                &mut egl_config,
                1,
                &mut config_count,
            );
            if result == egl::FALSE {
                let err = egl.GetError().to_windowing_api_error();
                return Err(Error::PixelFormatSelectionFailed(err));
            }
            if config_count == 0 {
                return Err(Error::NoPixelFormatFound);
            }

            let pbuffer_attributes = [
                egl::WIDTH as EGLint,   attributes.size.width,
                egl::HEIGHT as EGLint,  attributes.size.height,
                egl::NONE as EGLint,    0,
                0,                      0,
            ];
            let egl_surface =
                egl.CreatePbufferSurface(self.egl_display, egl_config, pbuffer_attributes.as_ptr());
            if egl_surface == egl::NO_SURFACE {
                let err = egl.GetError().to_windowing_api_error();
                return Err(Error::DrawableCreationFailed(err));
            }

            Ok(Drawable { egl_surface, egl_config })
        })
    }

    fn create_context(&mut self, drawable: &Drawable, version: GLVersion) -> Result<Context, Error> {
        // `CONTEXT_MAJOR_VERSION` has the value of the EGL 1.4 `CONTEXT_CLIENT_VERSION`, so this
        // also works without `EGL_KHR_create_context` as long as no minor version is requested.
        let mut context_attributes = vec![
            egl::CONTEXT_MAJOR_VERSION as EGLint,
            version.major as EGLint,
        ];
        if version.minor != 0 {
            context_attributes.extend_from_slice(&[
                egl::CONTEXT_MINOR_VERSION as EGLint,
                version.minor as EGLint,
            ]);
        }
        context_attributes.extend_from_slice(&[egl::NONE as EGLint, 0, 0, 0]);

        let egl_display = self.egl_display;
        let created = self.with_api(|egl| unsafe {
            let egl_context = egl.CreateContext(
                egl_display,
                drawable.egl_config,
                egl::NO_CONTEXT,
                context_attributes.as_ptr(),
            );
            if egl_context == egl::NO_CONTEXT {
                let err = egl.GetError().to_windowing_api_error();
                return Err(Error::ContextCreationFailed(err));
            }
            Ok(Context { egl_context })
        });
        created.map_err(Error::ContextCreationFailed)?
    }

    fn make_context_current(&self, context: &Context, drawable: &Drawable) -> Result<(), Error> {
        EGL_FUNCTIONS.with(|egl| unsafe {
            let result = egl.MakeCurrent(
                self.egl_display,
                drawable.egl_surface,
                drawable.egl_surface,
                context.egl_context,
            );
            if result == egl::FALSE {
                let err = egl.GetError().to_windowing_api_error();
                return Err(Error::MakeCurrentFailed(err));
            }
            Ok(())
        })
    }

    fn make_no_context_current(&self) -> Result<(), Error> {
        // Releases the context current for this device's API only.
        let released = self.with_api(|egl| unsafe {
            let result = egl.MakeCurrent(
                self.egl_display,
                egl::NO_SURFACE,
                egl::NO_SURFACE,
                egl::NO_CONTEXT,
            );
            if result == egl::FALSE {
                let err = egl.GetError().to_windowing_api_error();
                return Err(Error::MakeCurrentFailed(err));
            }
            Ok(())
        });
        released.map_err(Error::MakeCurrentFailed)?
    }

    fn destroy_context(&mut self, context: &mut Context) -> Result<(), Error> {
        if context.egl_context == egl::NO_CONTEXT {
            return Ok(());
        }

        EGL_FUNCTIONS.with(|egl| unsafe {
            let result = egl.DestroyContext(self.egl_display, context.egl_context);
            context.egl_context = egl::NO_CONTEXT;
            if result == egl::FALSE {
                let err = egl.GetError().to_windowing_api_error();
                return Err(Error::ContextDestructionFailed(err));
            }
            Ok(())
        })
    }

    fn destroy_drawable(&mut self, drawable: &mut Drawable) -> Result<(), Error> {
        if drawable.egl_surface == egl::NO_SURFACE {
            return Ok(());
        }

        EGL_FUNCTIONS.with(|egl| unsafe {
            let result = egl.DestroySurface(self.egl_display, drawable.egl_surface);
            drawable.egl_surface = egl::NO_SURFACE;
            if result == egl::FALSE {
                let err = egl.GetError().to_windowing_api_error();
                return Err(Error::DrawableDestructionFailed(err));
            }
            Ok(())
        })
    }

    fn get_proc_address(&self, symbol_name: &str) -> ProcAddress {
        let symbol_name = match CString::new(symbol_name) {
            Ok(symbol_name) => symbol_name,
            Err(_) => return ProcAddress::NULL,
        };
        EGL_FUNCTIONS.with(|egl| unsafe {
            let address = egl.GetProcAddress(symbol_name.as_ptr());
            ProcAddress::from_ptr(address as *const c_void)
        })
    }
}
