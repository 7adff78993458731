// glresolve/src/interop.rs
//
//! Hands resolved tables to other OpenGL wrappers.

use crate::SlotTable;

/// Creates a `glow` context whose loader answers from a resolved table.
///
/// Names the table doesn't contain, or whose slots are unbound, load as null.
///
/// # Safety
///
/// The context the table was resolved for (or one compatible with it) must be current on the
/// calling thread whenever the returned context is used.
pub unsafe fn glow_context<T>(table: &T) -> glow::Context
where
    T: SlotTable,
{
    glow::Context::from_loader_function(|name| table.get_proc_address(name))
}
