// glresolve/src/resolver.rs
//
//! The entry point resolver: fills a table's slots from the driver, with core fallbacks.

use crate::core_library::{fallback_names, CoreLibrary};
use crate::device::Device;
use crate::{Error, FnSlot, ProcAddress, ResolverOptions, SlotBinding, SlotTable};

use std::sync::{Mutex, PoisonError};

/// Serializes resolution passes across all resolvers in the process, and numbers them.
static RESOLVE_MUTEX: Mutex<u64> = Mutex::new(0);

/// How the slots of a table ended up after a resolution pass.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ResolveReport {
    /// Slots bound to an address reported by the driver.
    pub driver: usize,
    /// Slots bound to a core library fallback.
    pub fallback: usize,
    /// Slots left unbound.
    pub unbound: usize,
    /// True if no context was current and the pass had to create a transient one.
    pub used_transient_context: bool,
}

impl ResolveReport {
    #[inline]
    pub fn bound(&self) -> usize {
        self.driver + self.fallback
    }
}

/// Resolves function tables against a device, falling back to a core library.
///
/// A resolver is thread-affine in the same way contexts are: resolve on the thread that will call
/// through the resulting table, with the context it will use already current if there is one.
pub struct Resolver<D, L>
where
    D: Device,
    L: CoreLibrary,
{
    device: D,
    core_library: L,
    options: ResolverOptions,
}

impl<D, L> Resolver<D, L>
where
    D: Device,
    L: CoreLibrary,
{
    /// Creates a resolver with the baseline options for the device's API.
    pub fn new(device: D, core_library: L) -> Resolver<D, L> {
        let options = ResolverOptions::for_api(device.gl_api());
        Resolver::with_options(device, core_library, options)
    }

    pub fn with_options(device: D, core_library: L, options: ResolverOptions) -> Resolver<D, L> {
        Resolver { device, core_library, options }
    }

    #[inline]
    pub fn device(&self) -> &D {
        &self.device
    }

    #[inline]
    pub fn device_mut(&mut self) -> &mut D {
        &mut self.device
    }

    #[inline]
    pub fn core_library(&self) -> &L {
        &self.core_library
    }

    #[inline]
    pub fn options(&self) -> &ResolverOptions {
        &self.options
    }

    #[inline]
    pub fn set_options(&mut self, options: ResolverOptions) {
        self.options = options;
    }

    /// Returns the device and the core library.
    #[inline]
    pub fn into_inner(self) -> (D, L) {
        (self.device, self.core_library)
    }

    /// Creates a table and resolves every one of its slots.
    pub fn resolve<T>(&mut self) -> Result<T, Error>
    where
        T: SlotTable,
    {
        let mut table = T::unresolved();
        self.resolve_into(&mut table)?;
        Ok(table)
    }

    /// Re-resolves every slot of an existing table.
    ///
    /// Each slot is evaluated from scratch, so a slot bound by an earlier pass is rebound or
    /// unbound if the driver's exports changed. Individual misses never fail the pass; failing to
    /// set up the transient context does, before any slot is touched.
    pub fn resolve_into<T>(&mut self, table: &mut T) -> Result<ResolveReport, Error>
    where
        T: SlotTable,
    {
        let mut pass_counter = RESOLVE_MUTEX.lock().unwrap_or_else(PoisonError::into_inner);
        *pass_counter += 1;
        let pass = *pass_counter;

        let namespace = T::NAMESPACE;
        debug!(
            "resolve pass {}: {} slots in namespace {:?}",
            pass,
            table.slots().len(),
            namespace
        );

        let transient = if self.device.has_current_context() {
            None
        } else {
            debug!("resolve pass {}: no current context, creating a transient one", pass);
            Some(TransientContext::new(&mut self.device, &self.options)?)
        };

        let mut report = bind_slots(
            &self.device,
            &self.core_library,
            namespace.prefix(),
            table.slots_mut(),
        );
        report.used_transient_context = transient.is_some();

        if let Some(transient) = transient {
            debug!("resolve pass {}: destroying the transient context", pass);
            transient.destroy(&mut self.device)?;
        }

        info!(
            "resolve pass {}: {:?} resolved {} from the driver, {} from core fallbacks, {} unbound",
            pass, namespace, report.driver, report.fallback, report.unbound
        );
        Ok(report)
    }
}

fn bind_slots<D, L>(device: &D, core_library: &L, prefix: &str, slots: &mut [FnSlot]) -> ResolveReport
where
    D: Device,
    L: CoreLibrary,
{
    let mut report = ResolveReport::default();
    for slot in slots {
        let binding = resolve_slot(device, core_library, prefix, slot.name());
        match binding {
            SlotBinding::Driver(_) => report.driver += 1,
            SlotBinding::Fallback(_) => report.fallback += 1,
            SlotBinding::Unbound => report.unbound += 1,
        }
        slot.bind(binding);
    }
    report
}

fn resolve_slot<D, L>(device: &D, core_library: &L, prefix: &str, name: &'static str) -> SlotBinding
where
    D: Device,
    L: CoreLibrary,
{
    if let Some(address) = device.get_proc_address(name).valid() {
        trace!("{}: driver {:?}", name, address);
        return SlotBinding::Driver(address);
    }

    let fallback = fallback_names(name, prefix).into_iter().find_map(|core_name| {
        core_library.lookup(core_name).and_then(ProcAddress::valid)
    });
    match fallback {
        Some(address) => {
            trace!("{}: core fallback {:?}", name, address);
            SlotBinding::Fallback(address)
        }
        None => {
            trace!("{}: unbound", name);
            SlotBinding::Unbound
        }
    }
}

/// A hidden drawable and a context current on it, owned by one resolution pass.
struct TransientContext<D>
where
    D: Device,
{
    context: D::Context,
    drawable: D::Drawable,
}

impl<D> TransientContext<D>
where
    D: Device,
{
    fn new(device: &mut D, options: &ResolverOptions) -> Result<TransientContext<D>, Error> {
        let mut drawable = device.create_hidden_drawable(&options.drawable, options.version)?;

        let mut context = match device.create_context(&drawable, options.version) {
            Ok(context) => context,
            Err(err) => {
                if let Err(cleanup_err) = device.destroy_drawable(&mut drawable) {
                    warn!("failed to destroy the hidden drawable: {}", cleanup_err);
                }
                return Err(err);
            }
        };

        if let Err(err) = device.make_context_current(&context, &drawable) {
            if let Err(cleanup_err) = device.destroy_context(&mut context) {
                warn!("failed to destroy the transient context: {}", cleanup_err);
            }
            if let Err(cleanup_err) = device.destroy_drawable(&mut drawable) {
                warn!("failed to destroy the hidden drawable: {}", cleanup_err);
            }
            return Err(err);
        }

        Ok(TransientContext { context, drawable })
    }

    /// Makes no context current, then destroys the context and the drawable.
    ///
    /// Every step is attempted; the first failure is returned.
    fn destroy(mut self, device: &mut D) -> Result<(), Error> {
        let unbound = device.make_no_context_current();
        let context_destroyed = device.destroy_context(&mut self.context);
        let drawable_destroyed = device.destroy_drawable(&mut self.drawable);
        for result in [&unbound, &context_destroyed, &drawable_destroyed] {
            if let Err(err) = result {
                warn!("transient context teardown: {}", err);
            }
        }
        unbound.and(context_destroyed).and(drawable_destroyed)
    }
}
