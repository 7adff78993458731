// glresolve/src/core_library.rs
//
//! Core-profile fallbacks: statically-exported functions used when the driver's address lookup
//! reports nothing.

use crate::ProcAddress;

use std::os::raw::c_void;

/// Vendor suffixes stripped when looking for a core fallback of an extension entry point.
static VENDOR_SUFFIXES: [&str; 28] = [
    "GREMEDY", "INTEL", "ANGLE", "APPLE", "MESAX", "MESA", "QCOM", "SGIX", "SGIS", "3DFX", "EXT",
    "ARB", "KHR", "OES", "NVX", "AMD", "ATI", "IMG", "ARM", "OML", "I3D", "SGI", "SUN", "IBM",
    "OVR", "WIN", "NV", "HP",
];

/// A namespace of statically-linked implementations, addressed by unprefixed name.
///
/// `glClear` is looked up as `Clear`, `wglCreateContext` as `CreateContext`.
pub trait CoreLibrary {
    /// Returns the implementation of the named function, if this library has one.
    fn lookup(&self, core_name: &str) -> Option<ProcAddress>;
}

impl<'a, L> CoreLibrary for &'a L
where
    L: CoreLibrary + ?Sized,
{
    #[inline]
    fn lookup(&self, core_name: &str) -> Option<ProcAddress> {
        (**self).lookup(core_name)
    }
}

/// A core library with no functions. Every driver miss leaves its slot unbound.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoCoreLibrary;

impl CoreLibrary for NoCoreLibrary {
    #[inline]
    fn lookup(&self, _: &str) -> Option<ProcAddress> {
        None
    }
}

/// A core library made of functions registered by the caller.
#[derive(Clone, Debug, Default)]
pub struct StaticCoreLibrary {
    entries: Vec<(&'static str, ProcAddress)>,
}

impl StaticCoreLibrary {
    #[inline]
    pub fn new() -> StaticCoreLibrary {
        StaticCoreLibrary::default()
    }

    /// Registers `function` under its unprefixed name, replacing any earlier registration.
    pub fn with(mut self, core_name: &'static str, function: *const c_void) -> StaticCoreLibrary {
        self.insert(core_name, function);
        self
    }

    pub fn insert(&mut self, core_name: &'static str, function: *const c_void) {
        let address = ProcAddress::from_ptr(function);
        match self.entries.iter_mut().find(|(name, _)| *name == core_name) {
            Some(entry) => entry.1 = address,
            None => self.entries.push((core_name, address)),
        }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl CoreLibrary for StaticCoreLibrary {
    fn lookup(&self, core_name: &str) -> Option<ProcAddress> {
        self.entries
            .iter()
            .find(|(name, _)| *name == core_name)
            .map(|&(_, address)| address)
    }
}

/// Returns the names a fallback for `symbol_name` may be registered under, most specific first.
///
/// The namespace prefix is always stripped. If the remainder ends with a vendor suffix, the name
/// without it is tried second, so `glBarEXT` falls back to `BarEXT` and then to `Bar`.
pub(crate) fn fallback_names<'a>(symbol_name: &'a str, prefix: &str) -> Vec<&'a str> {
    let core_name = match symbol_name.strip_prefix(prefix) {
        Some(core_name) if !core_name.is_empty() => core_name,
        _ => return vec![],
    };

    let mut names = vec![core_name];
    let unsuffixed = VENDOR_SUFFIXES
        .iter()
        .filter_map(|suffix| core_name.strip_suffix(suffix))
        .find(|base| !base.is_empty());
    if let Some(base) = unsuffixed {
        names.push(base);
    }
    names
}
