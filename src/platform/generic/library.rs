// glresolve/src/platform/generic/library.rs
//
//! Dynamically-loaded system libraries.

use crate::ProcAddress;

use std::ffi::{CStr, CString};
use std::os::raw::c_void;

#[cfg(not(target_os = "windows"))]
use libc::{dlopen, dlsym, RTLD_LAZY};
#[cfg(target_os = "windows")]
use winapi::shared::minwindef::HMODULE;
#[cfg(target_os = "windows")]
use winapi::um::libloaderapi;

/// A shared library opened for symbol lookup.
///
/// Libraries are never closed: the addresses looked up from them end up in tables that may live
/// for the rest of the process.
pub(crate) struct DynamicLibrary {
    #[cfg(target_os = "windows")]
    module: HMODULE,
    #[cfg(not(target_os = "windows"))]
    handle: *mut c_void,
}

unsafe impl Send for DynamicLibrary {}
unsafe impl Sync for DynamicLibrary {}

impl DynamicLibrary {
    /// Opens the first library in `names` that the loader can find.
    #[cfg(not(target_os = "windows"))]
    pub(crate) fn open(names: &[&CStr]) -> Option<DynamicLibrary> {
        for name in names {
            unsafe {
                let handle = dlopen(name.as_ptr(), RTLD_LAZY);
                if !handle.is_null() {
                    debug!("opened {:?}", name);
                    return Some(DynamicLibrary { handle });
                }
            }
        }
        debug!("none of {:?} could be opened", names);
        None
    }

    /// Opens the first library in `names` that the loader can find.
    #[cfg(target_os = "windows")]
    pub(crate) fn open(names: &[&CStr]) -> Option<DynamicLibrary> {
        for name in names {
            unsafe {
                let module = libloaderapi::LoadLibraryA(name.as_ptr());
                if !module.is_null() {
                    debug!("opened {:?}", name);
                    return Some(DynamicLibrary { module });
                }
            }
        }
        debug!("none of {:?} could be opened", names);
        None
    }

    /// Looks up an exported symbol. Returns a null address if there is none.
    pub(crate) fn symbol(&self, symbol_name: &str) -> ProcAddress {
        let symbol_name = match CString::new(symbol_name) {
            Ok(symbol_name) => symbol_name,
            Err(_) => return ProcAddress::NULL,
        };
        ProcAddress::from_ptr(self.raw_symbol(&symbol_name))
    }

    #[cfg(not(target_os = "windows"))]
    fn raw_symbol(&self, symbol_name: &CStr) -> *const c_void {
        unsafe { dlsym(self.handle, symbol_name.as_ptr()).cast_const() }
    }

    #[cfg(target_os = "windows")]
    fn raw_symbol(&self, symbol_name: &CStr) -> *const c_void {
        unsafe { libloaderapi::GetProcAddress(self.module, symbol_name.as_ptr()) as *const c_void }
    }
}
