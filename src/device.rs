// glresolve/src/device.rs
//
//! The abstract interface that all devices conform to.

use crate::{DrawableAttributes, Error, GLApi, GLVersion, ProcAddress};

/// A thread-local handle to the platform's context factory and address lookup.
///
/// The resolver uses a device to find out whether a context is current, to create a transient
/// context behind a hidden drawable when none is, and to look up entry point addresses. Contexts
/// are thread-affine: every method must be called on the thread the resolution runs on.
pub trait Device: Sized {
    /// The context type associated with this device.
    type Context;
    /// The hidden drawable type associated with this device.
    type Drawable;

    /// Returns the OpenGL API flavor that this device creates contexts for.
    fn gl_api(&self) -> GLApi;

    /// Returns true if any context is current on the calling thread.
    fn has_current_context(&self) -> bool;

    /// Creates a minimal off-screen or hidden drawable with the given pixel format, compatible
    /// with contexts of `version`.
    fn create_hidden_drawable(
        &mut self,
        attributes: &DrawableAttributes,
        version: GLVersion,
    ) -> Result<Self::Drawable, Error>;

    /// Creates a context able to render to the drawable, requesting at least `version`.
    fn create_context(
        &mut self,
        drawable: &Self::Drawable,
        version: GLVersion,
    ) -> Result<Self::Context, Error>;

    /// Makes the context the current OpenGL context for this thread, rendering to `drawable`.
    fn make_context_current(
        &self,
        context: &Self::Context,
        drawable: &Self::Drawable,
    ) -> Result<(), Error>;

    /// Removes the current OpenGL context from this thread.
    fn make_no_context_current(&self) -> Result<(), Error>;

    /// Destroys a context created by `create_context`.
    fn destroy_context(&mut self, context: &mut Self::Context) -> Result<(), Error>;

    /// Destroys a drawable created by `create_hidden_drawable`.
    fn destroy_drawable(&mut self, drawable: &mut Self::Drawable) -> Result<(), Error>;

    /// Fetches the address of an entry point from the currently active context.
    ///
    /// Returns a sentinel (null or another address `ProcAddress::is_valid` rejects) when the
    /// platform doesn't know the symbol.
    fn get_proc_address(&self, symbol_name: &str) -> ProcAddress;
}
