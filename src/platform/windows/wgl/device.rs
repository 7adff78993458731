// glresolve/src/platform/windows/wgl/device.rs
//
//! A device using WGL and a hidden window on the calling thread.

use crate::{DeviceInterface, DrawableAttributeFlags, DrawableAttributes, Error, GLApi};
use crate::{GLVersion, ProcAddress, WindowingApiError};

use std::ffi::{CStr, CString};
use std::io;
use std::mem;
use std::os::raw::c_void;
use std::ptr;
use std::thread;
use winapi::shared::minwindef::{DWORD, FALSE, WORD};
use winapi::shared::windef::{HBRUSH, HDC, HGLRC, HWND};
use winapi::um::libloaderapi;
use winapi::um::wingdi::{self, PFD_DOUBLEBUFFER, PFD_DRAW_TO_WINDOW, PFD_MAIN_PLANE};
use winapi::um::wingdi::{PFD_SUPPORT_OPENGL, PFD_TYPE_RGBA, PIXELFORMATDESCRIPTOR};
use winapi::um::wingdi::{wglCreateContext, wglDeleteContext, wglGetCurrentContext};
use winapi::um::wingdi::{wglGetProcAddress, wglMakeCurrent};
use winapi::um::winuser::{self, COLOR_BACKGROUND, CS_OWNDC, WNDCLASSA, WS_OVERLAPPEDWINDOW};

static HIDDEN_WINDOW_CLASS_NAME: &CStr = c"GLResolveHiddenWindow";

/// A thread-local handle to WGL.
///
/// WGL contexts are created on hidden windows owned by the thread the device is used on.
pub struct Device {
    _private: (),
}

/// A legacy context created with `wglCreateContext()`.
pub struct Context {
    pub(crate) glrc: HGLRC,
}

/// A hidden window and its device context, with a pixel format selected.
pub struct Drawable {
    pub(crate) window: HWND,
    pub(crate) dc: HDC,
}

impl Drop for Context {
    #[inline]
    fn drop(&mut self) {
        if !self.glrc.is_null() && !thread::panicking() {
            panic!("Contexts must be destroyed explicitly with `destroy_context`!")
        }
    }
}

impl Drop for Drawable {
    #[inline]
    fn drop(&mut self) {
        if !self.window.is_null() && !thread::panicking() {
            panic!("Drawables must be destroyed explicitly with `destroy_drawable`!")
        }
    }
}

impl Device {
    /// Creates a device. WGL only creates desktop OpenGL contexts.
    pub fn new(gl_api: GLApi) -> Result<Device, Error> {
        match gl_api {
            GLApi::GL => Ok(Device { _private: () }),
            GLApi::GLES => Err(Error::UnsupportedGLType),
        }
    }
}

impl DeviceInterface for Device {
    type Context = Context;
    type Drawable = Drawable;

    #[inline]
    fn gl_api(&self) -> GLApi {
        GLApi::GL
    }

    #[inline]
    fn has_current_context(&self) -> bool {
        unsafe { !wglGetCurrentContext().is_null() }
    }

    fn create_hidden_drawable(
        &mut self,
        attributes: &DrawableAttributes,
        _: GLVersion,
    ) -> Result<Drawable, Error> {
        unsafe {
            let window = create_hidden_window(attributes)?;
            let mut drawable = Drawable { window, dc: winuser::GetDC(window) };
            if drawable.dc.is_null() {
                warn!("GetDC() failed: {}", io::Error::last_os_error());
                if let Err(cleanup_err) = self.destroy_drawable(&mut drawable) {
                    warn!("failed to destroy the hidden window: {}", cleanup_err);
                }
                return Err(Error::DrawableCreationFailed(WindowingApiError::BadWindow));
            }

            if let Err(err) = set_pixel_format(drawable.dc, attributes) {
                if let Err(cleanup_err) = self.destroy_drawable(&mut drawable) {
                    warn!("failed to destroy the hidden window: {}", cleanup_err);
                }
                return Err(err);
            }

            Ok(drawable)
        }
    }

    fn create_context(&mut self, drawable: &Drawable, version: GLVersion) -> Result<Context, Error> {
        if version != GLVersion::new(1, 0) {
            debug!(
                "wglCreateContext() ignores the requested version {}.{}",
                version.major, version.minor
            );
        }

        unsafe {
            let glrc = wglCreateContext(drawable.dc);
            if glrc.is_null() {
                warn!("wglCreateContext() failed: {}", io::Error::last_os_error());
                return Err(Error::ContextCreationFailed(WindowingApiError::Failed));
            }
            Ok(Context { glrc })
        }
    }

    fn make_context_current(&self, context: &Context, drawable: &Drawable) -> Result<(), Error> {
        unsafe {
            if wglMakeCurrent(drawable.dc, context.glrc) == FALSE {
                warn!("wglMakeCurrent() failed: {}", io::Error::last_os_error());
                return Err(Error::MakeCurrentFailed(WindowingApiError::Failed));
            }
            Ok(())
        }
    }

    fn make_no_context_current(&self) -> Result<(), Error> {
        unsafe {
            if wglMakeCurrent(ptr::null_mut(), ptr::null_mut()) == FALSE {
                warn!("wglMakeCurrent() failed: {}", io::Error::last_os_error());
                return Err(Error::MakeCurrentFailed(WindowingApiError::Failed));
            }
            Ok(())
        }
    }

    fn destroy_context(&mut self, context: &mut Context) -> Result<(), Error> {
        if context.glrc.is_null() {
            return Ok(());
        }

        unsafe {
            let ok = wglDeleteContext(context.glrc);
            context.glrc = ptr::null_mut();
            if ok == FALSE {
                return Err(Error::ContextDestructionFailed(WindowingApiError::Failed));
            }
            Ok(())
        }
    }

    fn destroy_drawable(&mut self, drawable: &mut Drawable) -> Result<(), Error> {
        if drawable.window.is_null() {
            return Ok(());
        }

        unsafe {
            if !drawable.dc.is_null() {
                winuser::ReleaseDC(drawable.window, drawable.dc);
                drawable.dc = ptr::null_mut();
            }
            let ok = winuser::DestroyWindow(drawable.window);
            drawable.window = ptr::null_mut();
            if ok == FALSE {
                return Err(Error::DrawableDestructionFailed(WindowingApiError::BadWindow));
            }
            Ok(())
        }
    }

    /// Looks the symbol up with `wglGetProcAddress()`, which reports misses as 0, 1, 2, 3 or -1
    /// depending on the driver.
    fn get_proc_address(&self, symbol_name: &str) -> ProcAddress {
        let symbol_name = match CString::new(symbol_name) {
            Ok(symbol_name) => symbol_name,
            Err(_) => return ProcAddress::NULL,
        };
        unsafe { ProcAddress::from_ptr(wglGetProcAddress(symbol_name.as_ptr()) as *const c_void) }
    }
}

unsafe fn create_hidden_window(attributes: &DrawableAttributes) -> Result<HWND, Error> {
    let instance = libloaderapi::GetModuleHandleA(ptr::null());
    let class_name = HIDDEN_WINDOW_CLASS_NAME.as_ptr();

    let mut window_class: WNDCLASSA = mem::zeroed();
    if winuser::GetClassInfoA(instance, class_name, &mut window_class) == FALSE {
        window_class = WNDCLASSA {
            style: CS_OWNDC,
            lpfnWndProc: Some(winuser::DefWindowProcA),
            cbClsExtra: 0,
            cbWndExtra: 0,
            hInstance: instance,
            hIcon: ptr::null_mut(),
            hCursor: ptr::null_mut(),
            hbrBackground: COLOR_BACKGROUND as HBRUSH,
            lpszMenuName: ptr::null(),
            lpszClassName: class_name,
        };
        if winuser::RegisterClassA(&window_class) == 0 {
            warn!("RegisterClassA() failed: {}", io::Error::last_os_error());
            return Err(Error::DrawableCreationFailed(WindowingApiError::BadWindow));
        }
    }

    let window = winuser::CreateWindowExA(
        0,
        class_name,
        class_name,
        WS_OVERLAPPEDWINDOW,
        0,
        0,
        attributes.size.width,
        attributes.size.height,
        ptr::null_mut(),
        ptr::null_mut(),
        instance,
        ptr::null_mut(),
    );
    if window.is_null() {
        warn!("CreateWindowExA() failed: {}", io::Error::last_os_error());
        return Err(Error::DrawableCreationFailed(WindowingApiError::BadWindow));
    }
    Ok(window)
}

unsafe fn set_pixel_format(dc: HDC, attributes: &DrawableAttributes) -> Result<(), Error> {
    let mut flags: DWORD = PFD_DRAW_TO_WINDOW | PFD_SUPPORT_OPENGL;
    if attributes.flags.contains(DrawableAttributeFlags::DOUBLE_BUFFER) {
        flags |= PFD_DOUBLEBUFFER;
    }

    let mut pixel_format_descriptor: PIXELFORMATDESCRIPTOR = mem::zeroed();
    pixel_format_descriptor.nSize = mem::size_of::<PIXELFORMATDESCRIPTOR>() as WORD;
    pixel_format_descriptor.nVersion = 1;
    pixel_format_descriptor.dwFlags = flags;
    pixel_format_descriptor.iPixelType = PFD_TYPE_RGBA;
    pixel_format_descriptor.cColorBits = 32;
    pixel_format_descriptor.cAlphaBits = attributes.alpha_bits();
    pixel_format_descriptor.cDepthBits = attributes.depth_bits();
    pixel_format_descriptor.cStencilBits = attributes.stencil_bits();
    pixel_format_descriptor.iLayerType = PFD_MAIN_PLANE;

    let pixel_format = wingdi::ChoosePixelFormat(dc, &pixel_format_descriptor);
    if pixel_format == 0 {
        return Err(Error::NoPixelFormatFound);
    }
    if wingdi::SetPixelFormat(dc, pixel_format, &pixel_format_descriptor) == FALSE {
        warn!("SetPixelFormat() failed: {}", io::Error::last_os_error());
        return Err(Error::PixelFormatSelectionFailed(WindowingApiError::BadPixelFormat));
    }
    Ok(())
}
