// glresolve/src/address.rs
//
//! Raw entry point addresses as reported by the platform.

use std::fmt::{self, Debug, Formatter};
use std::os::raw::c_void;
use std::ptr;

/// A native function address returned by an address-lookup facility.
///
/// Some platforms report a missing function with a small sentinel value instead of null. The
/// values 0, 1, 2, 3 and -1 are never valid entry points.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct ProcAddress(*const c_void);

// Entry point addresses are process-global; which thread may call through them is governed by the
// current context, not by the address itself.
unsafe impl Send for ProcAddress {}
unsafe impl Sync for ProcAddress {}

impl ProcAddress {
    /// The null address.
    pub const NULL: ProcAddress = ProcAddress(ptr::null());

    #[inline]
    pub fn from_ptr(ptr: *const c_void) -> ProcAddress {
        ProcAddress(ptr)
    }

    #[inline]
    pub fn as_ptr(self) -> *const c_void {
        self.0
    }

    /// Returns true if this address can be called.
    ///
    /// Addresses in the range `-1..=3`, interpreted as a signed 64-bit integer, are sentinels.
    #[inline]
    pub fn is_valid(self) -> bool {
        let address = self.0 as isize as i64;
        !(-1..=3).contains(&address)
    }

    /// Returns this address if it is valid.
    #[inline]
    pub fn valid(self) -> Option<ProcAddress> {
        if self.is_valid() {
            Some(self)
        } else {
            None
        }
    }
}

impl Debug for ProcAddress {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        write!(f, "ProcAddress({:p})", self.0)
    }
}

impl Default for ProcAddress {
    #[inline]
    fn default() -> ProcAddress {
        ProcAddress::NULL
    }
}
