// glresolve/src/tables.rs
//
//! Generated function tables, one per OpenGL namespace.

use crate::{FnSlot, GLApi};

use std::os::raw::c_void;
use std::ptr;

/// A family of entry points sharing a symbol prefix.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Namespace {
    /// Desktop OpenGL, `gl*`.
    Gl,
    /// OpenGL ES 1.x, `gl*`.
    Gles1,
    /// OpenGL ES 2.0 and later, `gl*`.
    Gles2,
    /// WGL, `wgl*`.
    Wgl,
}

impl Namespace {
    /// The prefix every exported symbol of this namespace starts with.
    pub fn prefix(self) -> &'static str {
        match self {
            Namespace::Gl | Namespace::Gles1 | Namespace::Gles2 => "gl",
            Namespace::Wgl => "wgl",
        }
    }

    /// The API flavor a context must have for this namespace to resolve.
    pub fn gl_api(self) -> GLApi {
        match self {
            Namespace::Gles1 | Namespace::Gles2 => GLApi::GLES,
            Namespace::Gl | Namespace::Wgl => GLApi::GL,
        }
    }
}

/// A table of function slots that a `Resolver` can fill.
///
/// Implementations are generated at build time; each one owns a fixed array of slots and a typed
/// wrapper per entry point.
pub trait SlotTable: Sized {
    /// The namespace the slot names belong to.
    const NAMESPACE: Namespace;

    /// Returns a table with every slot unbound.
    fn unresolved() -> Self;

    fn slots(&self) -> &[FnSlot];

    fn slots_mut(&mut self) -> &mut [FnSlot];

    /// Finds the slot with the given exported symbol name.
    fn slot(&self, name: &str) -> Option<&FnSlot> {
        self.slots().iter().find(|slot| slot.name() == name)
    }

    /// Returns the bound address of the named entry point, or null.
    ///
    /// This has the shape loaders such as `gl::load_with()` or
    /// `glow::Context::from_loader_function()` expect.
    fn get_proc_address(&self, name: &str) -> *const c_void {
        self.slot(name)
            .and_then(FnSlot::address)
            .map_or(ptr::null(), |address| address.as_ptr())
    }

    fn bound_count(&self) -> usize {
        self.slots().iter().filter(|slot| slot.is_bound()).count()
    }

    /// The names of all entry points left unbound by the last resolution.
    fn missing_entry_points(&self) -> Vec<&'static str> {
        self.slots()
            .iter()
            .filter(|slot| !slot.is_bound())
            .map(FnSlot::name)
            .collect()
    }
}

/// Desktop OpenGL 4.6 (compatibility profile) and common extensions.
#[allow(clippy::all, clippy::missing_safety_doc)]
pub mod gl {
    include!(concat!(env!("OUT_DIR"), "/gl_table.rs"));
}

/// OpenGL ES 1.0 and 1.1 (common profile) with the OES extensions most ES 1.x drivers ship.
#[allow(clippy::all, clippy::missing_safety_doc)]
pub mod gles1 {
    include!(concat!(env!("OUT_DIR"), "/gles1_table.rs"));
}

/// OpenGL ES 2.0 and the vendor extensions found on mobile drivers.
#[allow(clippy::all, clippy::missing_safety_doc)]
pub mod gles2 {
    include!(concat!(env!("OUT_DIR"), "/gles2_table.rs"));
}

/// WGL 1.0 and the ARB/EXT/NV/OML/I3D extensions.
#[cfg(windows)]
#[allow(clippy::all, clippy::missing_safety_doc)]
pub mod wgl {
    include!(concat!(env!("OUT_DIR"), "/wgl_table.rs"));
}

pub use self::gl::Gl;
pub use self::gles1::Gles1;
pub use self::gles2::Gles2;
#[cfg(windows)]
pub use self::wgl::Wgl;
