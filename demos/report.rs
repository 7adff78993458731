// glresolve/demos/report.rs
//
//! Resolves one of the function tables against the system driver and prints how every entry
//! point was bound.

use clap::{App, Arg};
use glresolve::{Gl, Gles1, Gles2, SlotTable};

#[cfg(not(target_os = "macos"))]
use glresolve::{Device, Resolver, ResolverOptions, SlotBinding, SystemCoreLibrary};

static APP_NAME: &'static str = "glresolve report";

#[cfg(target_os = "windows")]
static APIS: [&'static str; 4] = ["gl", "gles1", "gles2", "wgl"];
#[cfg(not(target_os = "windows"))]
static APIS: [&'static str; 3] = ["gl", "gles1", "gles2"];

fn main() {
    let matches = App::new(APP_NAME)
        .arg(
            Arg::with_name("api")
                .short("a")
                .long("api")
                .takes_value(true)
                .possible_values(&APIS)
                .default_value("gl")
                .help("The function table to resolve"),
        )
        .arg(
            Arg::with_name("missing")
                .short("m")
                .long("missing")
                .help("List the entry points that could not be resolved"),
        )
        .arg(
            Arg::with_name("verbose")
                .short("v")
                .long("verbose")
                .help("Print the binding of every entry point"),
        )
        .get_matches();

    let list_missing = matches.is_present("missing");
    let verbose = matches.is_present("verbose");
    match matches.value_of("api") {
        Some("gles1") => report::<Gles1>(list_missing, verbose),
        Some("gles2") => report::<Gles2>(list_missing, verbose),
        #[cfg(target_os = "windows")]
        Some("wgl") => report::<glresolve::Wgl>(list_missing, verbose),
        _ => report::<Gl>(list_missing, verbose),
    }
}

#[cfg(not(target_os = "macos"))]
fn report<T>(list_missing: bool, verbose: bool)
where
    T: SlotTable,
{
    let device = Device::new(T::NAMESPACE.gl_api()).unwrap();
    let core_library = SystemCoreLibrary::open(T::NAMESPACE).unwrap();
    let options = ResolverOptions::for_namespace(T::NAMESPACE);
    let mut resolver = Resolver::with_options(device, core_library, options);

    let mut table = T::unresolved();
    let report = resolver.resolve_into(&mut table).unwrap();

    if verbose {
        for slot in table.slots() {
            match slot.binding() {
                SlotBinding::Driver(address) => println!("{:<48} driver   {:?}", slot.name(), address),
                SlotBinding::Fallback(address) => println!("{:<48} core     {:?}", slot.name(), address),
                SlotBinding::Unbound => println!("{:<48} unbound", slot.name()),
            }
        }
    }

    println!(
        "{:?}: {} entry points, {} from the driver, {} from the core library, {} unbound",
        T::NAMESPACE,
        report.driver + report.fallback + report.unbound,
        report.driver,
        report.fallback,
        report.unbound,
    );
    if report.used_transient_context {
        println!("(resolved with a transient context)");
    }

    if list_missing {
        for name in table.missing_entry_points() {
            println!("missing: {}", name);
        }
    }
}

#[cfg(target_os = "macos")]
fn report<T>(_: bool, _: bool)
where
    T: SlotTable,
{
    eprintln!("{}: no backend for {:?} on this platform", APP_NAME, T::NAMESPACE);
}
