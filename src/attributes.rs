// glresolve/src/attributes.rs
//
//! Configuration of the transient context a resolution pass may create.

use crate::{GLApi, GLVersion, Namespace};

use bitflags::bitflags;
use euclid::default::Size2D;

/// The side length of the hidden drawable, in pixels.
pub(crate) const HIDDEN_DRAWABLE_SIZE: i32 = 16;

bitflags! {
    /// Buffers requested for the hidden drawable's pixel format.
    #[derive(Clone, Copy, Debug, PartialEq)]
    pub struct DrawableAttributeFlags: u8 {
        const ALPHA         = 0x01;
        const DEPTH         = 0x02;
        const STENCIL       = 0x04;
        const DOUBLE_BUFFER = 0x08;
    }
}

/// The pixel format and size of the hidden drawable.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DrawableAttributes {
    pub size: Size2D<i32>,
    pub flags: DrawableAttributeFlags,
}

impl Default for DrawableAttributes {
    fn default() -> DrawableAttributes {
        DrawableAttributes {
            size: Size2D::new(HIDDEN_DRAWABLE_SIZE, HIDDEN_DRAWABLE_SIZE),
            flags: DrawableAttributeFlags::DEPTH
                | DrawableAttributeFlags::STENCIL
                | DrawableAttributeFlags::DOUBLE_BUFFER,
        }
    }
}

impl DrawableAttributes {
    #[inline]
    pub(crate) fn alpha_bits(&self) -> u8 {
        if self.flags.contains(DrawableAttributeFlags::ALPHA) { 8 } else { 0 }
    }

    #[inline]
    pub(crate) fn depth_bits(&self) -> u8 {
        if self.flags.contains(DrawableAttributeFlags::DEPTH) { 24 } else { 0 }
    }

    #[inline]
    pub(crate) fn stencil_bits(&self) -> u8 {
        if self.flags.contains(DrawableAttributeFlags::STENCIL) { 8 } else { 0 }
    }
}

/// Settings for the transient context created when no context is current.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ResolverOptions {
    /// The version requested for the transient context.
    pub version: GLVersion,
    pub drawable: DrawableAttributes,
}

impl ResolverOptions {
    /// The baseline options for the given API: the lowest version and a small hidden drawable.
    pub fn for_api(api: GLApi) -> ResolverOptions {
        ResolverOptions {
            version: GLVersion::baseline(api),
            drawable: DrawableAttributes::default(),
        }
    }

    /// The baseline options for resolving tables of the given namespace.
    ///
    /// OpenGL ES 1.x entry points need an ES 1 context rather than the ES 2 baseline.
    pub fn for_namespace(namespace: Namespace) -> ResolverOptions {
        let mut options = ResolverOptions::for_api(namespace.gl_api());
        if namespace == Namespace::Gles1 {
            options.version = GLVersion::new(1, 0);
        }
        options
    }
}
