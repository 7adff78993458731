// glresolve/build.rs
//
//! The `glresolve` build script.
//!
//! Besides the EGL bindings used by the EGL backend, this generates one slot table per GL
//! namespace: a struct holding one `FnSlot` per command, a compile-time name/index mapping and a
//! typed wrapper per command.

use cfg_aliases::cfg_aliases;
use gl_generator::generators::{self, Generator};
use gl_generator::{Api, Fallbacks, Profile, Registry, StructGenerator};
use std::env;
use std::fs::File;
use std::io;
use std::path::PathBuf;

static GL_EXTENSIONS: [&str; 14] = [
    "GL_APPLE_vertex_array_object",
    "GL_ARB_bindless_texture",
    "GL_ARB_debug_output",
    "GL_ARB_framebuffer_object",
    "GL_ARB_sync",
    "GL_ARB_vertex_array_object",
    "GL_EXT_direct_state_access",
    "GL_EXT_framebuffer_blit",
    "GL_EXT_framebuffer_multisample",
    "GL_EXT_framebuffer_object",
    "GL_EXT_memory_object",
    "GL_KHR_debug",
    "GL_NV_fence",
    "GL_NV_vertex_buffer_unified_memory",
];

static GLES1_EXTENSIONS: [&str; 16] = [
    "GL_IMG_user_clip_plane",
    "GL_NV_fence",
    "GL_OES_blend_equation_separate",
    "GL_OES_blend_func_separate",
    "GL_OES_blend_subtract",
    "GL_OES_draw_texture",
    "GL_OES_EGL_image",
    "GL_OES_fixed_point",
    "GL_OES_framebuffer_object",
    "GL_OES_mapbuffer",
    "GL_OES_matrix_palette",
    "GL_OES_point_size_array",
    "GL_OES_query_matrix",
    "GL_OES_single_precision",
    "GL_OES_texture_cube_map",
    "GL_QCOM_driver_control",
];

static GLES2_EXTENSIONS: [&str; 16] = [
    "GL_AMD_performance_monitor",
    "GL_ANGLE_framebuffer_blit",
    "GL_ANGLE_framebuffer_multisample",
    "GL_APPLE_framebuffer_multisample",
    "GL_EXT_disjoint_timer_query",
    "GL_IMG_multisampled_render_to_texture",
    "GL_NV_coverage_sample",
    "GL_NV_fence",
    "GL_OES_EGL_image",
    "GL_OES_get_program_binary",
    "GL_OES_mapbuffer",
    "GL_OES_vertex_array_object",
    "GL_QCOM_driver_control",
    "GL_QCOM_extended_get",
    "GL_QCOM_extended_get2",
    "GL_QCOM_tiled_rendering",
];

static WGL_EXTENSIONS: [&str; 21] = [
    "WGL_ARB_buffer_region",
    "WGL_ARB_create_context",
    "WGL_ARB_extensions_string",
    "WGL_ARB_make_current_read",
    "WGL_ARB_pbuffer",
    "WGL_ARB_pixel_format",
    "WGL_ARB_render_texture",
    "WGL_EXT_display_color_table",
    "WGL_EXT_extensions_string",
    "WGL_EXT_make_current_read",
    "WGL_EXT_pbuffer",
    "WGL_EXT_pixel_format",
    "WGL_EXT_swap_control",
    "WGL_I3D_digital_video_control",
    "WGL_I3D_gamma",
    "WGL_I3D_genlock",
    "WGL_I3D_image_buffer",
    "WGL_I3D_swap_frame_lock",
    "WGL_I3D_swap_frame_usage",
    "WGL_NV_vertex_array_range",
    "WGL_OML_sync_control",
];

fn main() {
    // Setup aliases for #[cfg] checks
    cfg_aliases! {
        // Platforms
        windows: { target_os = "windows" },
        macos: { target_os = "macos" },
        android: { target_os = "android" },
        linux: { all(unix, not(any(macos, android))) },

        // Features
        angle: { all(windows, feature = "angle") },

        // Backends
        egl_backend: { any(android, linux, angle) },
        wgl_backend: { all(windows, not(angle)) },
    }

    let target_os = env::var("CARGO_CFG_TARGET_OS").unwrap();
    let target_family = env::var("CARGO_CFG_TARGET_FAMILY").ok();
    let dest = PathBuf::from(&env::var("OUT_DIR").unwrap());

    // Generate EGL bindings for the EGL backend.
    if (target_os == "windows" && cfg!(feature = "angle"))
        || (target_family.as_deref() == Some("unix") && target_os != "macos")
    {
        let mut file = File::create(dest.join("egl_bindings.rs")).unwrap();
        let registry = Registry::new(Api::Egl, (1, 5), Profile::Core, Fallbacks::All, []);
        registry.write_bindings(StructGenerator, &mut file).unwrap();
    }

    // Generate the slot tables.
    let mut file = File::create(dest.join("gl_table.rs")).unwrap();
    let registry = Registry::new(
        Api::Gl,
        (4, 6),
        Profile::Compatibility,
        Fallbacks::None,
        GL_EXTENSIONS,
    );
    registry.write_bindings(SlotTableGenerator, &mut file).unwrap();

    // The single GLES1 feature in the registry covers both ES 1.0 and ES 1.1.
    let mut file = File::create(dest.join("gles1_table.rs")).unwrap();
    let registry = Registry::new(
        Api::Gles1,
        (1, 0),
        Profile::Core,
        Fallbacks::None,
        GLES1_EXTENSIONS,
    );
    registry.write_bindings(SlotTableGenerator, &mut file).unwrap();

    let mut file = File::create(dest.join("gles2_table.rs")).unwrap();
    let registry = Registry::new(
        Api::Gles2,
        (2, 0),
        Profile::Core,
        Fallbacks::None,
        GLES2_EXTENSIONS,
    );
    registry.write_bindings(SlotTableGenerator, &mut file).unwrap();

    if target_os == "windows" {
        let mut file = File::create(dest.join("wgl_table.rs")).unwrap();
        let registry = Registry::new(
            Api::Wgl,
            (1, 0),
            Profile::Core,
            Fallbacks::None,
            WGL_EXTENSIONS,
        );
        registry.write_bindings(SlotTableGenerator, &mut file).unwrap();
    }
}

/// Writes a slot table: the `types` module, the enum constants, and a struct whose methods call
/// through resolved slots.
struct SlotTableGenerator;

impl Generator for SlotTableGenerator {
    fn write<W>(&self, registry: &Registry, dest: &mut W) -> io::Result<()>
    where
        W: io::Write,
    {
        write_header(dest)?;
        write_type_aliases(registry, dest)?;
        write_enums(registry, dest)?;
        write_slot_indices(registry, dest)?;
        write_struct(registry, dest)?;
        write_impl(registry, dest)?;
        Ok(())
    }
}

fn namespace_variant(api: Api) -> &'static str {
    match api {
        Api::Gl | Api::GlCore => "Gl",
        Api::Gles1 => "Gles1",
        Api::Gles2 | Api::Glsc2 => "Gles2",
        Api::Wgl => "Wgl",
        Api::Glx | Api::Egl => panic!("no slot table namespace for {:?}", api),
    }
}

fn write_header<W>(dest: &mut W) -> io::Result<()>
where
    W: io::Write,
{
    writeln!(
        dest,
        r#"
        mod __gl_imports {{
            pub use std::fmt;
            pub use std::mem;
            pub use std::os::raw;
        }}
        "#
    )
}

fn write_type_aliases<W>(registry: &Registry, dest: &mut W) -> io::Result<()>
where
    W: io::Write,
{
    writeln!(
        dest,
        r#"
        pub mod types {{
            #![allow(non_camel_case_types, non_snake_case, dead_code, missing_copy_implementations)]
        "#
    )?;
    generators::gen_types(registry.api, dest)?;
    writeln!(dest, "}}")
}

fn write_enums<W>(registry: &Registry, dest: &mut W) -> io::Result<()>
where
    W: io::Write,
{
    for enm in &registry.enums {
        generators::gen_enum_item(enm, "types::", dest)?;
    }
    Ok(())
}

fn write_slot_indices<W>(registry: &Registry, dest: &mut W) -> io::Result<()>
where
    W: io::Write,
{
    writeln!(
        dest,
        "#[allow(non_upper_case_globals, dead_code)] mod slot_index {{"
    )?;
    for (index, cmd) in registry.cmds.iter().enumerate() {
        writeln!(dest, "pub const {}: usize = {};", cmd.proto.ident, index)?;
    }
    writeln!(dest, "}}")?;

    writeln!(
        dest,
        "const UNRESOLVED: [crate::FnSlot; {}] = [",
        registry.cmds.len()
    )?;
    for cmd in &registry.cmds {
        writeln!(
            dest,
            "crate::FnSlot::unbound(\"{}\"),",
            generators::gen_symbol_name(registry.api, &cmd.proto.ident)
        )?;
    }
    writeln!(dest, "];")
}

fn write_struct<W>(registry: &Registry, dest: &mut W) -> io::Result<()>
where
    W: io::Write,
{
    writeln!(
        dest,
        r#"
        /// One function slot per entry point of this namespace.
        ///
        /// Build one with `SlotTable::unresolved()` and fill it with a `Resolver`. The wrappers
        /// must only be called on a thread where a context compatible with the one the table was
        /// resolved against is current. Calling a wrapper whose slot is unbound panics with the
        /// name of the missing entry point.
        #[derive(Clone)]
        pub struct {api} {{
            slots: [crate::FnSlot; {len}],
        }}
        "#,
        api = generators::gen_struct_name(registry.api),
        len = registry.cmds.len(),
    )
}

fn write_impl<W>(registry: &Registry, dest: &mut W) -> io::Result<()>
where
    W: io::Write,
{
    let api = generators::gen_struct_name(registry.api);

    writeln!(
        dest,
        r#"
        impl crate::SlotTable for {api} {{
            const NAMESPACE: crate::Namespace = crate::Namespace::{namespace};

            #[inline]
            fn unresolved() -> {api} {{
                {api} {{ slots: UNRESOLVED }}
            }}

            #[inline]
            fn slots(&self) -> &[crate::FnSlot] {{
                &self.slots
            }}

            #[inline]
            fn slots_mut(&mut self) -> &mut [crate::FnSlot] {{
                &mut self.slots
            }}
        }}

        impl __gl_imports::fmt::Debug for {api} {{
            fn fmt(&self, f: &mut __gl_imports::fmt::Formatter) -> __gl_imports::fmt::Result {{
                f.debug_struct("{api}")
                 .field("slots", &self.slots.len())
                 .field("bound", &crate::SlotTable::bound_count(self))
                 .finish()
            }}
        }}
        "#,
        api = api,
        namespace = namespace_variant(registry.api),
    )?;

    writeln!(dest, "impl {} {{", api)?;
    for cmd in &registry.cmds {
        writeln!(
            dest,
            "/// Calls `{symbol}`.
            #[allow(non_snake_case, unused_variables, dead_code)]
            #[inline]
            pub unsafe fn {name}(&self, {params}) -> {return_suffix} {{
                __gl_imports::mem::transmute::<_, extern \"system\" fn({typed_params}) -> {return_suffix}>\
                    (self.slots[slot_index::{name}].callable())({idents})
            }}",
            symbol = generators::gen_symbol_name(registry.api, &cmd.proto.ident),
            name = cmd.proto.ident,
            params = generators::gen_parameters(cmd, true, true).join(", "),
            typed_params = generators::gen_parameters(cmd, false, true).join(", "),
            return_suffix = cmd.proto.ty,
            idents = generators::gen_parameters(cmd, true, false).join(", "),
        )?;
    }
    writeln!(dest, "}}")
}
