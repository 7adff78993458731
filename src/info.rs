// glresolve/src/info.rs
//
//! OpenGL information.

/// The API (OpenGL or OpenGL ES).
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum GLApi {
    /// OpenGL (full or desktop OpenGL).
    GL,
    /// OpenGL ES (embedded OpenGL).
    GLES,
}

/// Describes the OpenGL version that is requested when a context is created.
///
/// Since OpenGL and OpenGL ES have different version numbering schemes, the valid values here
/// depend on the API of the context being created.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GLVersion {
    /// The major OpenGL version (e.g. 4 in 4.2).
    pub major: u8,
    /// The minor OpenGL version (e.g. 2 in 4.2).
    pub minor: u8,
}

impl GLVersion {
    #[inline]
    pub fn new(major: u8, minor: u8) -> GLVersion {
        GLVersion { major, minor }
    }

    /// The lowest version worth asking for when a context only exists to look up addresses.
    #[inline]
    pub fn baseline(api: GLApi) -> GLVersion {
        match api {
            GLApi::GL => GLVersion::new(1, 0),
            GLApi::GLES => GLVersion::new(2, 0),
        }
    }
}
