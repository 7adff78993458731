// glresolve/src/slot.rs
//
//! Function slots: the placeholder for one entry point in a table.

use crate::{Error, ProcAddress};

use std::os::raw::c_void;

/// What a slot currently points to.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum SlotBinding {
    /// Neither the driver nor the core library provided the function.
    Unbound,
    /// The address reported by the platform's address lookup.
    Driver(ProcAddress),
    /// The statically-exported core function used when the driver reported nothing.
    Fallback(ProcAddress),
}

/// The slot for a single entry point.
///
/// Slots are created unbound and are only rebound by a resolution pass.
#[derive(Clone, Copy, Debug)]
pub struct FnSlot {
    name: &'static str,
    binding: SlotBinding,
}

impl FnSlot {
    /// Creates an unbound slot for the entry point with the given exported symbol name.
    #[inline]
    pub const fn unbound(name: &'static str) -> FnSlot {
        FnSlot { name, binding: SlotBinding::Unbound }
    }

    /// The exported symbol name, e.g. `glClear` or `wglSwapIntervalEXT`.
    #[inline]
    pub fn name(&self) -> &'static str {
        self.name
    }

    #[inline]
    pub fn binding(&self) -> SlotBinding {
        self.binding
    }

    #[inline]
    pub fn is_bound(&self) -> bool {
        self.address().is_some()
    }

    /// Returns the bound address, whether it came from the driver or from the core library.
    #[inline]
    pub fn address(&self) -> Option<ProcAddress> {
        match self.binding {
            SlotBinding::Unbound => None,
            SlotBinding::Driver(address) | SlotBinding::Fallback(address) => Some(address),
        }
    }

    /// Returns the bound address, or a `MissingEntryPoint` error naming this slot.
    #[inline]
    pub fn try_address(&self) -> Result<*const c_void, Error> {
        match self.address() {
            Some(address) => Ok(address.as_ptr()),
            None => Err(Error::MissingEntryPoint(self.name)),
        }
    }

    /// Returns the address to call through.
    ///
    /// Panics if the slot is unbound; calling an entry point that was never resolved must not
    /// jump through an invalid pointer.
    #[inline]
    #[track_caller]
    pub fn callable(&self) -> *const c_void {
        match self.try_address() {
            Ok(address) => address,
            Err(err) => panic!("{}", err),
        }
    }

    #[inline]
    pub(crate) fn bind(&mut self, binding: SlotBinding) {
        self.binding = binding;
    }
}
