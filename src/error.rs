// glresolve/src/error.rs
//
//! Various errors that methods can produce.

use std::error;
use std::fmt::{self, Display, Formatter};

/// Various errors that methods can produce.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Error {
    /// The method failed for a miscellaneous reason.
    Failed,
    /// The platform doesn't support this method.
    UnsupportedOnThisPlatform,
    /// The system doesn't support the requested OpenGL API type (OpenGL or OpenGL ES).
    UnsupportedGLType,
    /// The display or device couldn't be opened.
    DeviceOpenFailed,
    /// The system OpenGL or windowing library couldn't be located.
    NoGLLibraryFound,
    /// Choosing a pixel format for the hidden drawable failed.
    PixelFormatSelectionFailed(WindowingApiError),
    /// The system couldn't choose a pixel format for the hidden drawable.
    NoPixelFormatFound,
    /// The system couldn't create the hidden drawable.
    DrawableCreationFailed(WindowingApiError),
    /// The system couldn't destroy the hidden drawable.
    DrawableDestructionFailed(WindowingApiError),
    /// The system couldn't create an OpenGL context.
    ContextCreationFailed(WindowingApiError),
    /// The system couldn't destroy the OpenGL context.
    ContextDestructionFailed(WindowingApiError),
    /// The system couldn't make the OpenGL context current or not current.
    MakeCurrentFailed(WindowingApiError),
    /// An entry point was called, but resolution left its slot unbound.
    MissingEntryPoint(&'static str),
}

/// Abstraction of the errors that EGL, WGL, etc. return.
///
/// They all tend to follow similar patterns.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum WindowingApiError {
    /// Miscellaneous error.
    Failed,
    /// EGL: An unrecognized attribute or attribute value was passed in the attribute list.
    BadAttribute,
    /// WGL: Invalid pixel format.
    BadPixelFormat,
    /// EGL: An EGLContext argument does not name a valid EGL rendering context.
    BadContext,
    /// EGL: An EGLDisplay argument does not name a valid EGL display connection.
    BadDisplay,
    /// EGL: Arguments are inconsistent (for example, a valid context requires
    /// buffers not supplied by a valid surface).
    BadMatch,
    /// WGL: The hidden window could not be created.
    BadWindow,
    /// EGL: EGL failed to allocate resources for the requested operation.
    BadAlloc,
    /// EGL: EGL is not initialized, or could not be initialized, for the
    /// specified EGL display connection.
    NotInitialized,
    /// EGL: EGL cannot access a requested resource (for example a context is
    /// bound in another thread).
    BadAccess,
    /// EGL: The current surface of the calling thread is a window, pixel
    /// buffer or pixmap that is no longer valid.
    BadCurrentSurface,
    /// EGL: An EGLSurface argument does not name a valid surface (window,
    /// pixel buffer or pixmap) configured for GL rendering.
    BadSurface,
    /// EGL: One or more argument values are invalid.
    BadParameter,
    /// EGL: A NativePixmapType argument does not refer to a valid native
    /// pixmap.
    BadNativePixmap,
    /// EGL: A NativeWindowType argument does not refer to a valid native
    /// window.
    BadNativeWindow,
    /// EGL: A power management event has occurred. The application must
    /// destroy all contexts and reinitialise OpenGL ES state and objects to
    /// continue rendering.
    ContextLost,
    /// EGL: The EGL configuration is unsupported.
    BadConfig,
}

impl Display for Error {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        match *self {
            Error::Failed => f.write_str("the operation failed"),
            Error::UnsupportedOnThisPlatform => {
                f.write_str("the operation is unsupported on this platform")
            }
            Error::UnsupportedGLType => f.write_str("the requested OpenGL API is unsupported"),
            Error::DeviceOpenFailed => f.write_str("the display device couldn't be opened"),
            Error::NoGLLibraryFound => f.write_str("no system OpenGL library was found"),
            Error::PixelFormatSelectionFailed(err) => {
                write!(f, "pixel format selection failed: {:?}", err)
            }
            Error::NoPixelFormatFound => f.write_str("no suitable pixel format was found"),
            Error::DrawableCreationFailed(err) => {
                write!(f, "hidden drawable creation failed: {:?}", err)
            }
            Error::DrawableDestructionFailed(err) => {
                write!(f, "hidden drawable destruction failed: {:?}", err)
            }
            Error::ContextCreationFailed(err) => write!(f, "context creation failed: {:?}", err),
            Error::ContextDestructionFailed(err) => {
                write!(f, "context destruction failed: {:?}", err)
            }
            Error::MakeCurrentFailed(err) => {
                write!(f, "making a context current failed: {:?}", err)
            }
            Error::MissingEntryPoint(name) => {
                write!(f, "OpenGL entry point `{}` was not resolved", name)
            }
        }
    }
}

impl error::Error for Error {}
