// glresolve/src/tests.rs
//
//! Unit tests.

use crate::core_library::fallback_names;
use crate::{CoreLibrary, DeviceInterface, DrawableAttributes, Error, FnSlot, GLApi, GLVersion};
use crate::{Gl, Gles1, Gles2, Namespace, NoCoreLibrary, ProcAddress, ResolveReport, Resolver};
use crate::{ResolverOptions, SlotBinding, SlotTable, StaticCoreLibrary, WindowingApiError};

use std::cell::{Cell, RefCell};
use std::mem;
use std::os::raw::c_void;
use std::sync::atomic::{AtomicUsize, Ordering};

static SENTINELS: [isize; 5] = [0, 1, 2, 3, -1];

fn address(value: isize) -> ProcAddress {
    ProcAddress::from_ptr(value as *const c_void)
}

#[derive(Clone, Debug, PartialEq)]
enum Event {
    CreateDrawable(GLVersion),
    CreateContext(GLVersion),
    MakeCurrent,
    MakeNoContextCurrent,
    DestroyContext,
    DestroyDrawable,
    Lookup(String),
}

#[derive(Clone, Copy, Debug, PartialEq)]
enum Current {
    Nothing,
    External,
    Transient,
}

#[derive(Clone, Copy, Debug, PartialEq)]
enum Failure {
    CreateDrawable,
    CreateContext,
    MakeCurrent,
    DestroyContext,
}

/// A device that answers lookups from a fixed export list, but only while a context is current.
struct MockDevice {
    gl_api: GLApi,
    exports: Vec<(&'static str, ProcAddress)>,
    current: Cell<Current>,
    events: RefCell<Vec<Event>>,
    failure: Option<Failure>,
    live_contexts: usize,
    live_drawables: usize,
}

struct MockContext;
struct MockDrawable;

impl MockDevice {
    fn new(gl_api: GLApi) -> MockDevice {
        MockDevice {
            gl_api,
            exports: vec![],
            current: Cell::new(Current::Nothing),
            events: RefCell::new(vec![]),
            failure: None,
            live_contexts: 0,
            live_drawables: 0,
        }
    }

    fn export(mut self, name: &'static str, address: ProcAddress) -> MockDevice {
        self.exports.push((name, address));
        self
    }

    fn with_current_context(self) -> MockDevice {
        self.current.set(Current::External);
        self
    }

    fn failing_at(mut self, failure: Failure) -> MockDevice {
        self.failure = Some(failure);
        self
    }

    fn events(&self) -> Vec<Event> {
        self.events.borrow().clone()
    }

    fn lifecycle_events(&self) -> Vec<Event> {
        self.events()
            .into_iter()
            .filter(|event| !matches!(*event, Event::Lookup(_)))
            .collect()
    }

    fn lookup_count(&self) -> usize {
        self.events().len() - self.lifecycle_events().len()
    }

    fn record(&self, event: Event) {
        self.events.borrow_mut().push(event);
    }
}

impl DeviceInterface for MockDevice {
    type Context = MockContext;
    type Drawable = MockDrawable;

    fn gl_api(&self) -> GLApi {
        self.gl_api
    }

    fn has_current_context(&self) -> bool {
        self.current.get() != Current::Nothing
    }

    fn create_hidden_drawable(
        &mut self,
        attributes: &DrawableAttributes,
        version: GLVersion,
    ) -> Result<MockDrawable, Error> {
        assert_eq!(attributes.size.width, 16);
        self.record(Event::CreateDrawable(version));
        if self.failure == Some(Failure::CreateDrawable) {
            return Err(Error::DrawableCreationFailed(WindowingApiError::BadWindow));
        }
        self.live_drawables += 1;
        Ok(MockDrawable)
    }

    fn create_context(&mut self, _: &MockDrawable, version: GLVersion) -> Result<MockContext, Error> {
        self.record(Event::CreateContext(version));
        if self.failure == Some(Failure::CreateContext) {
            return Err(Error::ContextCreationFailed(WindowingApiError::BadConfig));
        }
        self.live_contexts += 1;
        Ok(MockContext)
    }

    fn make_context_current(&self, _: &MockContext, _: &MockDrawable) -> Result<(), Error> {
        self.record(Event::MakeCurrent);
        if self.failure == Some(Failure::MakeCurrent) {
            return Err(Error::MakeCurrentFailed(WindowingApiError::BadMatch));
        }
        self.current.set(Current::Transient);
        Ok(())
    }

    fn make_no_context_current(&self) -> Result<(), Error> {
        self.record(Event::MakeNoContextCurrent);
        self.current.set(Current::Nothing);
        Ok(())
    }

    fn destroy_context(&mut self, _: &mut MockContext) -> Result<(), Error> {
        self.record(Event::DestroyContext);
        if self.failure == Some(Failure::DestroyContext) {
            return Err(Error::ContextDestructionFailed(WindowingApiError::BadContext));
        }
        self.live_contexts -= 1;
        Ok(())
    }

    fn destroy_drawable(&mut self, _: &mut MockDrawable) -> Result<(), Error> {
        self.record(Event::DestroyDrawable);
        self.live_drawables -= 1;
        Ok(())
    }

    fn get_proc_address(&self, symbol_name: &str) -> ProcAddress {
        self.record(Event::Lookup(symbol_name.to_owned()));
        if self.current.get() == Current::Nothing {
            return ProcAddress::NULL;
        }
        self.exports
            .iter()
            .find(|(name, _)| *name == symbol_name)
            .map_or(ProcAddress::NULL, |&(_, address)| address)
    }
}

#[derive(Clone, Debug)]
struct TestTable {
    slots: [FnSlot; 3],
}

impl SlotTable for TestTable {
    const NAMESPACE: Namespace = Namespace::Gl;

    fn unresolved() -> TestTable {
        TestTable {
            slots: [
                FnSlot::unbound("glFoo"),
                FnSlot::unbound("glBarEXT"),
                FnSlot::unbound("glBazEXT"),
            ],
        }
    }

    fn slots(&self) -> &[FnSlot] {
        &self.slots
    }

    fn slots_mut(&mut self) -> &mut [FnSlot] {
        &mut self.slots
    }
}

#[allow(non_snake_case)]
impl TestTable {
    unsafe fn Bar(&self) -> usize {
        mem::transmute::<_, extern "system" fn() -> usize>(self.slots[1].callable())()
    }

    unsafe fn Baz(&self) -> usize {
        mem::transmute::<_, extern "system" fn() -> usize>(self.slots[2].callable())()
    }

    fn binding(&self, name: &str) -> SlotBinding {
        self.slot(name).unwrap().binding()
    }
}

static BAR_CALLS: AtomicUsize = AtomicUsize::new(0);

extern "system" fn core_bar() -> usize {
    BAR_CALLS.fetch_add(1, Ordering::SeqCst) + 1
}

extern "system" fn core_baz() -> usize {
    42
}

fn resolve_test_table<L>(device: MockDevice, core_library: L) -> (TestTable, MockDevice)
where
    L: CoreLibrary,
{
    let mut resolver = Resolver::new(device, core_library);
    let table = resolver.resolve::<TestTable>().unwrap();
    (table, resolver.into_inner().0)
}

#[test]
fn test_sentinel_addresses_are_invalid() {
    for &sentinel in &SENTINELS {
        assert!(!address(sentinel).is_valid(), "{} should be a sentinel", sentinel);
        assert_eq!(address(sentinel).valid(), None);
    }
    assert!(address(4).is_valid());
    assert!(address(-2).is_valid());
    assert!(ProcAddress::from_ptr(core_bar as *const c_void).is_valid());
    assert_eq!(ProcAddress::default(), ProcAddress::NULL);
}

#[test]
fn test_driver_address_is_bound() {
    let device = MockDevice::new(GLApi::GL).export("glFoo", address(0x1000));
    let (table, _) = resolve_test_table(device, NoCoreLibrary);
    assert_eq!(table.binding("glFoo"), SlotBinding::Driver(address(0x1000)));
    assert_eq!(table.binding("glBarEXT"), SlotBinding::Unbound);
}

// Small addresses just above the sentinel range and negative ones below it are real addresses.
#[test]
fn test_addresses_bordering_the_sentinels_are_bound() {
    let device = MockDevice::new(GLApi::GL)
        .export("glFoo", address(4))
        .export("glBarEXT", address(-2));
    let (table, _) = resolve_test_table(device, NoCoreLibrary);
    assert_eq!(table.binding("glFoo"), SlotBinding::Driver(address(4)));
    assert_eq!(table.binding("glBarEXT"), SlotBinding::Driver(address(-2)));
}

#[test]
fn test_sentinels_without_fallback_leave_slots_unbound() {
    for &sentinel in &SENTINELS {
        let device = MockDevice::new(GLApi::GL).export("glFoo", address(sentinel));
        let (table, _) = resolve_test_table(device, NoCoreLibrary);
        assert_eq!(table.binding("glFoo"), SlotBinding::Unbound);
    }
}

#[test]
fn test_sentinel_falls_back_to_core_function() {
    let device = MockDevice::new(GLApi::GL).export("glBarEXT", address(-1));
    let core_library = StaticCoreLibrary::new().with("BarEXT", core_bar as *const c_void);
    let (table, _) = resolve_test_table(device, core_library);

    let core_bar_address = ProcAddress::from_ptr(core_bar as *const c_void);
    assert_eq!(table.binding("glBarEXT"), SlotBinding::Fallback(core_bar_address));

    let calls_before = BAR_CALLS.load(Ordering::SeqCst);
    let calls_after = unsafe { table.Bar() };
    assert_eq!(calls_after, calls_before + 1);
}

#[test]
fn test_fallback_strips_vendor_suffix() {
    let device = MockDevice::new(GLApi::GL);
    let core_library = StaticCoreLibrary::new().with("Baz", core_baz as *const c_void);
    let (table, _) = resolve_test_table(device, core_library);
    assert!(matches!(table.binding("glBazEXT"), SlotBinding::Fallback(_)));
    assert_eq!(unsafe { table.Baz() }, 42);
}

#[test]
fn test_suffixed_fallback_is_preferred() {
    let device = MockDevice::new(GLApi::GL);
    let core_library = StaticCoreLibrary::new()
        .with("Baz", core_bar as *const c_void)
        .with("BazEXT", core_baz as *const c_void);
    let (table, _) = resolve_test_table(device, core_library);
    let core_baz_address = ProcAddress::from_ptr(core_baz as *const c_void);
    assert_eq!(table.binding("glBazEXT"), SlotBinding::Fallback(core_baz_address));
}

#[test]
fn test_driver_wins_over_fallback() {
    let device = MockDevice::new(GLApi::GL).export("glBazEXT", address(0x2000));
    let core_library = StaticCoreLibrary::new().with("BazEXT", core_baz as *const c_void);
    let (table, _) = resolve_test_table(device, core_library);
    assert_eq!(table.binding("glBazEXT"), SlotBinding::Driver(address(0x2000)));
}

#[test]
fn test_invalid_fallback_leaves_slot_unbound() {
    let device = MockDevice::new(GLApi::GL);
    let core_library = StaticCoreLibrary::new().with("Foo", 2 as *const c_void);
    let (table, _) = resolve_test_table(device, core_library);
    assert_eq!(table.binding("glFoo"), SlotBinding::Unbound);
}

#[test]
fn test_report_counts_every_slot() {
    let device = MockDevice::new(GLApi::GL).export("glFoo", address(0x1000));
    let core_library = StaticCoreLibrary::new().with("Bar", core_bar as *const c_void);
    let mut resolver = Resolver::new(device, core_library);
    let mut table = TestTable::unresolved();
    let report = resolver.resolve_into(&mut table).unwrap();
    assert_eq!(
        report,
        ResolveReport { driver: 1, fallback: 1, unbound: 1, used_transient_context: true }
    );
    assert_eq!(report.bound(), 2);
    assert_eq!(table.bound_count(), 2);
}

#[test]
fn test_transient_context_lifecycle() {
    let device = MockDevice::new(GLApi::GL).export("glFoo", address(0x1000));
    let (table, device) = resolve_test_table(device, NoCoreLibrary);

    // Lookups only succeed while the transient context is current.
    assert!(table.slot("glFoo").unwrap().is_bound());

    let events = device.events();
    assert_eq!(
        &events[..3],
        &[
            Event::CreateDrawable(GLVersion::new(1, 0)),
            Event::CreateContext(GLVersion::new(1, 0)),
            Event::MakeCurrent
        ]
    );
    assert_eq!(
        &events[events.len() - 3..],
        &[Event::MakeNoContextCurrent, Event::DestroyContext, Event::DestroyDrawable]
    );
    assert_eq!(device.lookup_count(), 3);
    assert_eq!(device.current.get(), Current::Nothing);
    assert_eq!(device.live_contexts, 0);
    assert_eq!(device.live_drawables, 0);
}

#[test]
fn test_existing_context_is_used_and_left_current() {
    let device = MockDevice::new(GLApi::GL)
        .with_current_context()
        .export("glFoo", address(0x1000));
    let mut resolver = Resolver::new(device, NoCoreLibrary);
    let mut table = TestTable::unresolved();
    let report = resolver.resolve_into(&mut table).unwrap();

    assert!(!report.used_transient_context);
    assert_eq!(table.binding("glFoo"), SlotBinding::Driver(address(0x1000)));
    let device = resolver.device();
    assert!(device.lifecycle_events().is_empty());
    assert_eq!(device.current.get(), Current::External);
}

#[test]
fn test_gles_transient_context_uses_gles_baseline() {
    let device = MockDevice::new(GLApi::GLES);
    let mut resolver = Resolver::new(device, NoCoreLibrary);
    assert_eq!(resolver.options().version, GLVersion::new(2, 0));
    resolver.resolve::<Gles2>().unwrap();
    assert!(resolver
        .device()
        .events()
        .contains(&Event::CreateContext(GLVersion::new(2, 0))));
}

#[test]
fn test_custom_options_reach_the_device() {
    let mut options = ResolverOptions::for_api(GLApi::GL);
    options.version = GLVersion::new(3, 2);
    let mut resolver = Resolver::with_options(MockDevice::new(GLApi::GL), NoCoreLibrary, options);
    resolver.resolve::<TestTable>().unwrap();
    assert!(resolver
        .device()
        .events()
        .contains(&Event::CreateContext(GLVersion::new(3, 2))));
}

#[test]
fn test_drawable_creation_failure_aborts_resolution() {
    let device = MockDevice::new(GLApi::GL)
        .export("glFoo", address(0x1000))
        .failing_at(Failure::CreateDrawable);
    let mut resolver = Resolver::new(device, NoCoreLibrary);
    let mut table = TestTable::unresolved();
    assert_eq!(
        resolver.resolve_into(&mut table),
        Err(Error::DrawableCreationFailed(WindowingApiError::BadWindow))
    );
    assert_eq!(resolver.device().lookup_count(), 0);
    assert_eq!(table.bound_count(), 0);
}

#[test]
fn test_context_creation_failure_releases_drawable() {
    let device = MockDevice::new(GLApi::GL).failing_at(Failure::CreateContext);
    let mut resolver = Resolver::new(device, NoCoreLibrary);
    match resolver.resolve::<TestTable>() {
        Err(Error::ContextCreationFailed(WindowingApiError::BadConfig)) => {}
        other => panic!("unexpected result: {:?}", other),
    }

    let device = resolver.device();
    assert_eq!(device.lookup_count(), 0);
    assert_eq!(device.live_drawables, 0);
    assert_eq!(
        device.lifecycle_events(),
        [
            Event::CreateDrawable(GLVersion::new(1, 0)),
            Event::CreateContext(GLVersion::new(1, 0)),
            Event::DestroyDrawable
        ]
    );
}

#[test]
fn test_make_current_failure_releases_everything() {
    let device = MockDevice::new(GLApi::GL).failing_at(Failure::MakeCurrent);
    let mut resolver = Resolver::new(device, NoCoreLibrary);
    assert_eq!(
        resolver.resolve::<TestTable>().err(),
        Some(Error::MakeCurrentFailed(WindowingApiError::BadMatch))
    );

    let device = resolver.device();
    assert_eq!(device.lookup_count(), 0);
    assert_eq!(device.live_contexts, 0);
    assert_eq!(device.live_drawables, 0);
}

// Teardown keeps going past a failed step, and the slots resolved before it stay bound.
#[test]
fn test_teardown_failure_is_reported_after_every_step() {
    let device = MockDevice::new(GLApi::GL)
        .export("glFoo", address(0x1000))
        .failing_at(Failure::DestroyContext);
    let mut resolver = Resolver::new(device, NoCoreLibrary);
    let mut table = TestTable::unresolved();
    assert_eq!(
        resolver.resolve_into(&mut table),
        Err(Error::ContextDestructionFailed(WindowingApiError::BadContext))
    );

    let device = resolver.device();
    assert!(device.lifecycle_events().ends_with(&[
        Event::MakeNoContextCurrent,
        Event::DestroyContext,
        Event::DestroyDrawable
    ]));
    assert_eq!(device.current.get(), Current::Nothing);
    assert_eq!(device.live_drawables, 0);
    assert_eq!(table.binding("glFoo"), SlotBinding::Driver(address(0x1000)));
}

// A failed pass must not disturb a table resolved earlier.
#[test]
fn test_failed_pass_keeps_previous_bindings() {
    let device = MockDevice::new(GLApi::GL).export("glFoo", address(0x1000));
    let (mut table, mut device) = resolve_test_table(device, NoCoreLibrary);
    device.failure = Some(Failure::CreateContext);

    let mut resolver = Resolver::new(device, NoCoreLibrary);
    assert!(resolver.resolve_into(&mut table).is_err());
    assert_eq!(table.binding("glFoo"), SlotBinding::Driver(address(0x1000)));
}

#[test]
fn test_resolution_is_idempotent() {
    let device = MockDevice::new(GLApi::GL).export("glFoo", address(0x1000));
    let core_library = StaticCoreLibrary::new().with("Baz", core_baz as *const c_void);
    let mut resolver = Resolver::new(device, core_library);

    let mut table = TestTable::unresolved();
    let first = resolver.resolve_into(&mut table).unwrap();
    let bindings: Vec<_> = table.slots().iter().map(FnSlot::binding).collect();
    let second = resolver.resolve_into(&mut table).unwrap();

    assert_eq!(first, second);
    assert_eq!(table.slots().iter().map(FnSlot::binding).collect::<Vec<_>>(), bindings);
}

#[test]
fn test_reresolution_reevaluates_every_slot() {
    let device = MockDevice::new(GLApi::GL)
        .export("glFoo", address(0x1000))
        .export("glBarEXT", address(0x2000));
    let (mut table, mut device) = resolve_test_table(device, NoCoreLibrary);
    assert_eq!(table.bound_count(), 2);

    device.exports = vec![("glBarEXT", address(0x3000))];
    let mut resolver = Resolver::new(device, NoCoreLibrary);
    resolver.resolve_into(&mut table).unwrap();

    assert_eq!(table.binding("glFoo"), SlotBinding::Unbound);
    assert_eq!(table.binding("glBarEXT"), SlotBinding::Driver(address(0x3000)));
}

#[test]
fn test_lost_export_rebinds_to_fallback() {
    let device = MockDevice::new(GLApi::GL).export("glBarEXT", address(0x2000));
    let core_library = StaticCoreLibrary::new().with("Bar", core_bar as *const c_void);
    let mut resolver = Resolver::new(device, core_library);
    let mut table = TestTable::unresolved();
    resolver.resolve_into(&mut table).unwrap();
    assert_eq!(table.binding("glBarEXT"), SlotBinding::Driver(address(0x2000)));

    resolver.device_mut().exports.clear();
    resolver.resolve_into(&mut table).unwrap();
    let core_bar_address = ProcAddress::from_ptr(core_bar as *const c_void);
    assert_eq!(table.binding("glBarEXT"), SlotBinding::Fallback(core_bar_address));
}

#[test]
#[should_panic(expected = "glBazEXT")]
fn test_calling_unbound_slot_panics_with_its_name() {
    let (table, _) = resolve_test_table(MockDevice::new(GLApi::GL), NoCoreLibrary);
    unsafe {
        table.Baz();
    }
}

#[test]
fn test_missing_entry_points() {
    let device = MockDevice::new(GLApi::GL).export("glFoo", address(0x1000));
    let (table, _) = resolve_test_table(device, NoCoreLibrary);

    assert_eq!(table.missing_entry_points(), ["glBarEXT", "glBazEXT"]);
    assert_eq!(
        table.slot("glBazEXT").unwrap().try_address(),
        Err(Error::MissingEntryPoint("glBazEXT"))
    );
    assert_eq!(table.get_proc_address("glFoo"), 0x1000 as *const c_void);
    assert!(table.get_proc_address("glBazEXT").is_null());
    assert!(table.get_proc_address("glNotInTheTable").is_null());
}

#[test]
fn test_missing_entry_point_message_names_the_function() {
    let message = Error::MissingEntryPoint("glBazEXT").to_string();
    assert!(message.contains("glBazEXT"), "{}", message);
}

#[test]
fn test_fallback_names() {
    assert_eq!(fallback_names("glBarEXT", "gl"), ["BarEXT", "Bar"]);
    assert_eq!(fallback_names("glClear", "gl"), ["Clear"]);
    assert_eq!(
        fallback_names("glFramebufferTexture2DEXT", "gl"),
        ["FramebufferTexture2DEXT", "FramebufferTexture2D"]
    );
    assert_eq!(
        fallback_names("glRenderbufferStorageMultisampleANGLE", "gl"),
        ["RenderbufferStorageMultisampleANGLE", "RenderbufferStorageMultisample"]
    );
    assert_eq!(fallback_names("wglSwapIntervalEXT", "wgl"), ["SwapIntervalEXT", "SwapInterval"]);
    assert_eq!(fallback_names("wglCreateContext", "wgl"), ["CreateContext"]);

    // A name that is all suffix has nothing left to fall back to.
    assert_eq!(fallback_names("glEXT", "gl"), ["EXT"]);
    assert!(fallback_names("gl", "gl").is_empty());
    assert!(fallback_names("eglBar", "gl").is_empty());
}

#[test]
fn test_static_core_library_replaces_entries() {
    let mut core_library = StaticCoreLibrary::new().with("Foo", 0x10 as *const c_void);
    core_library.insert("Foo", 0x20 as *const c_void);
    assert_eq!(core_library.len(), 1);
    assert_eq!(core_library.lookup("Foo"), Some(address(0x20)));
    assert_eq!(core_library.lookup("Bar"), None);
    assert!(StaticCoreLibrary::new().is_empty());
}

#[test]
fn test_default_drawable_attributes() {
    let options = ResolverOptions::for_api(GLApi::GL);
    assert_eq!(options.version, GLVersion::new(1, 0));
    assert_eq!(options.drawable.size.width, 16);
    assert_eq!(options.drawable.size.height, 16);
    assert_eq!(options.drawable.alpha_bits(), 0);
    assert_eq!(options.drawable.depth_bits(), 24);
    assert_eq!(options.drawable.stencil_bits(), 8);
}

#[test]
fn test_generated_gl_table_starts_unresolved() {
    let gl = Gl::unresolved();
    assert_eq!(Gl::NAMESPACE, Namespace::Gl);
    assert!(gl.slots().len() > 500);
    assert_eq!(gl.bound_count(), 0);
    assert!(gl.slot("glClear").is_some());
    assert!(gl.slot("glGenVertexArraysAPPLE").is_some());
    assert!(gl.slots().iter().all(|slot| slot.name().starts_with("gl")));
}

#[test]
#[should_panic(expected = "glClearColor")]
fn test_generated_wrapper_panics_when_unbound() {
    let gl = Gl::unresolved();
    unsafe {
        gl.ClearColor(0.0, 0.0, 0.0, 1.0);
    }
}

#[test]
fn test_generated_table_resolves_extension_through_core() {
    let device = MockDevice::new(GLApi::GL).export("glClear", address(0x1000));
    let core_library =
        StaticCoreLibrary::new().with("GenVertexArrays", core_baz as *const c_void);
    let mut resolver = Resolver::new(device, core_library);
    let gl = resolver.resolve::<Gl>().unwrap();

    assert_eq!(gl.slot("glClear").unwrap().binding(), SlotBinding::Driver(address(0x1000)));
    // Both the core slot and the suffixed one find the core export.
    let core_address = ProcAddress::from_ptr(core_baz as *const c_void);
    assert_eq!(
        gl.slot("glGenVertexArrays").unwrap().binding(),
        SlotBinding::Fallback(core_address)
    );
    assert_eq!(
        gl.slot("glGenVertexArraysAPPLE").unwrap().binding(),
        SlotBinding::Fallback(core_address)
    );
    assert_eq!(gl.bound_count(), 3);
}

#[test]
fn test_gles1_table() {
    let gles1 = Gles1::unresolved();
    assert_eq!(Gles1::NAMESPACE, Namespace::Gles1);
    assert_eq!(Gles1::NAMESPACE.gl_api(), GLApi::GLES);
    assert_eq!(gles1.bound_count(), 0);
    assert!(gles1.slot("glAlphaFuncx").is_some());
    assert!(gles1.slot("glGenFramebuffersOES").is_some());
    assert!(gles1.slot("glDrawTexiOES").is_some());
    assert!(gles1.slot("glCreateShader").is_none());
}

#[test]
fn test_gles1_resolution_uses_an_es1_context() {
    let options = ResolverOptions::for_namespace(Namespace::Gles1);
    assert_eq!(options.version, GLVersion::new(1, 0));
    assert_eq!(ResolverOptions::for_namespace(Namespace::Gles2).version, GLVersion::new(2, 0));

    let device = MockDevice::new(GLApi::GLES).export("glAlphaFuncx", address(0x1000));
    let core_library =
        StaticCoreLibrary::new().with("GenFramebuffers", core_baz as *const c_void);
    let mut resolver = Resolver::with_options(device, core_library, options);
    let gles1 = resolver.resolve::<Gles1>().unwrap();

    assert_eq!(
        gles1.slot("glAlphaFuncx").unwrap().binding(),
        SlotBinding::Driver(address(0x1000))
    );
    assert!(matches!(
        gles1.slot("glGenFramebuffersOES").unwrap().binding(),
        SlotBinding::Fallback(_)
    ));
    assert_eq!(
        &resolver.device().lifecycle_events()[..2],
        &[Event::CreateDrawable(GLVersion::new(1, 0)), Event::CreateContext(GLVersion::new(1, 0))]
    );
}

#[test]
fn test_gles2_table() {
    let gles2 = Gles2::unresolved();
    assert_eq!(Gles2::NAMESPACE, Namespace::Gles2);
    assert_eq!(Gles2::NAMESPACE.gl_api(), GLApi::GLES);
    assert!(gles2.slot("glBindVertexArrayOES").is_some());
    assert!(gles2.slot("glBlitFramebufferANGLE").is_some());
}

#[cfg(windows)]
#[test]
fn test_wgl_table() {
    use crate::Wgl;

    let wgl = Wgl::unresolved();
    assert_eq!(Wgl::NAMESPACE.prefix(), "wgl");
    assert!(wgl.slot("wglCreateContext").is_some());
    assert!(wgl.slot("wglSwapIntervalEXT").is_some());
}

#[cfg(all(feature = "driver-tests", any(egl_backend, wgl_backend)))]
mod driver {
    use crate::{DeviceInterface, Device, GLApi, Gl, Resolver, SlotTable, SystemCoreLibrary};
    use crate::{DrawableAttributes, GLVersion, Namespace};
    use serial_test::serial;

    #[test]
    #[serial]
    fn test_load_gl() {
        let gl: Gl = crate::load().unwrap();
        assert!(gl.slot("glClear").unwrap().is_bound());
        assert!(gl.slot("glGetString").unwrap().is_bound());
    }

    #[test]
    #[serial]
    fn test_transient_context_is_not_left_current() {
        let device = Device::new(GLApi::GL).unwrap();
        let core_library = SystemCoreLibrary::open(Namespace::Gl).unwrap();
        let mut resolver = Resolver::new(device, core_library);
        assert!(!resolver.device().has_current_context());

        let report = resolver.resolve_into(&mut Gl::unresolved()).unwrap();
        assert!(report.used_transient_context);
        assert!(report.bound() > 0);
        assert!(!resolver.device().has_current_context());
    }

    #[test]
    #[serial]
    fn test_glow_context_from_table() {
        use glow::HasContext;

        let mut device = Device::new(GLApi::GL).unwrap();
        let attributes = DrawableAttributes::default();
        let version = GLVersion::new(1, 0);
        let mut drawable = device.create_hidden_drawable(&attributes, version).unwrap();
        let mut context = device.create_context(&drawable, version).unwrap();
        device.make_context_current(&context, &drawable).unwrap();

        let core_library = SystemCoreLibrary::open(Namespace::Gl).unwrap();
        let mut resolver = Resolver::new(device, core_library);
        let gl = resolver.resolve::<Gl>().unwrap();
        let glow = unsafe { crate::interop::glow_context(&gl) };
        assert!(glow.version().major >= 1);

        let (mut device, _) = resolver.into_inner();
        device.make_no_context_current().unwrap();
        device.destroy_context(&mut context).unwrap();
        device.destroy_drawable(&mut drawable).unwrap();
    }

    // Resolving desktop GL must leave an application's `eglBindAPI()` choice alone.
    #[cfg(egl_backend)]
    #[test]
    #[serial]
    fn test_bound_egl_api_is_restored() {
        use crate::egl;
        use crate::platform::generic::egl::device::EGL_FUNCTIONS;

        let device = Device::new(GLApi::GL).unwrap();
        EGL_FUNCTIONS.with(|egl| unsafe {
            assert_eq!(egl.BindAPI(egl::OPENGL_ES_API), egl::TRUE);
        });

        let core_library = SystemCoreLibrary::open(Namespace::Gl).unwrap();
        let mut resolver = Resolver::new(device, core_library);
        resolver.resolve::<Gl>().unwrap();

        EGL_FUNCTIONS.with(|egl| unsafe {
            assert_eq!(egl.QueryAPI(), egl::OPENGL_ES_API);
        });
    }
}
