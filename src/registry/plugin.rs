//! The binary ABI for externally compiled strategy modules.
//!
//! A module must export exactly three `extern "C"` symbols:
//!
//! - [`CREATE_SYMBOL`]: zero-argument constructor returning an opaque
//!   [`StrategyHandle`] pointer,
//! - [`DESTROY_SYMBOL`]: one-argument destructor consuming that pointer,
//! - [`ID_SYMBOL`]: zero-argument accessor returning the strategy's stable
//!   name as a NUL-terminated string.
//!
//! [`PluginStrategy`] binds the created handle, the destructor, and the
//! owning [`Library`] into a single releasable unit: its `Drop` invokes the
//! destructor exactly once and only then lets the library unload. Loading
//! the same module twice yields two independent units.
use std::ffi::{c_char, CStr};
use std::path::Path;

use libloading::Library;
use tracing::debug;

use crate::errors::LoadError;
use crate::moves::Move;
use crate::strategy::Strategy;

/// What a plugin constructor hands back: a raw pointer to a boxed trait
/// object. Opaque to the host except through the [`Strategy`] vtable.
pub type StrategyHandle = Box<dyn Strategy>;

pub type CreateFn = unsafe extern "C" fn() -> *mut StrategyHandle;
pub type DestroyFn = unsafe extern "C" fn(*mut StrategyHandle);
pub type IdFn = unsafe extern "C" fn() -> *const c_char;

pub const CREATE_SYMBOL: &str = "create_strategy";
pub const DESTROY_SYMBOL: &str = "destroy_strategy";
pub const ID_SYMBOL: &str = "strategy_id";

/// A strategy instance backed by a dynamically loaded module.
pub struct PluginStrategy {
    name: String,
    handle: *mut StrategyHandle,
    destroy: DestroyFn,
    // Declared last: the library must stay loaded until the handle has
    // been destroyed in `drop`.
    _library: Library,
}

fn symbol<T>(library: &Library, path: &Path, name: &'static str) -> Result<T, LoadError>
where
    T: Copy,
{
    // SAFETY: the symbol types are part of the documented module ABI; a
    // module exporting these names with other signatures is out of
    // contract.
    let sym = unsafe { library.get::<T>(name.as_bytes()) };
    match sym {
        Ok(sym) => Ok(*sym),
        Err(source) => Err(LoadError::MissingSymbol {
            path: path.to_path_buf(),
            symbol: name,
            source,
        }),
    }
}

impl PluginStrategy {
    /// Open a module and construct one strategy instance from it.
    ///
    /// Every failure path releases whatever was acquired: a library with
    /// missing symbols is closed before returning, and nothing is created
    /// until all three symbols have resolved.
    pub fn load(path: &Path) -> Result<PluginStrategy, LoadError> {
        // SAFETY: loading a library runs its initializers; the plugin
        // directory is operator-supplied, same trust level as the binary.
        let library = unsafe { Library::new(path) }.map_err(|source| LoadError::OpenModule {
            path: path.to_path_buf(),
            source,
        })?;

        let create: CreateFn = symbol(&library, path, CREATE_SYMBOL)?;
        let destroy: DestroyFn = symbol(&library, path, DESTROY_SYMBOL)?;
        let id: IdFn = symbol(&library, path, ID_SYMBOL)?;

        // SAFETY: symbols checked above; `create` hands us sole ownership
        // of the returned handle.
        let handle = unsafe { create() };
        if handle.is_null() {
            return Err(LoadError::NullStrategy {
                path: path.to_path_buf(),
            });
        }

        // SAFETY: the ABI requires `strategy_id` to return a stable
        // NUL-terminated string.
        let id_ptr = unsafe { id() };
        let name = if id_ptr.is_null() {
            String::from("PluginStrategy")
        } else {
            unsafe { CStr::from_ptr(id_ptr) }
                .to_string_lossy()
                .into_owned()
        };

        debug!(name, path = %path.display(), "loaded strategy plugin");
        Ok(PluginStrategy {
            name,
            handle,
            destroy,
            _library: library,
        })
    }

    fn instance(&mut self) -> &mut dyn Strategy {
        // SAFETY: `handle` is non-null, created by this unit's module, and
        // destroyed only in `drop`.
        unsafe { (*self.handle).as_mut() }
    }
}

impl Strategy for PluginStrategy {
    fn identify(&self) -> &str {
        &self.name
    }

    fn decide(&mut self, self_history: &[Move], opponent_a: &[Move], opponent_b: &[Move]) -> Move {
        self.instance().decide(self_history, opponent_a, opponent_b)
    }

    fn on_round_end(&mut self, own: Move, opponent_a: Move, opponent_b: Move) {
        self.instance().on_round_end(own, opponent_a, opponent_b);
    }

    fn configure(&mut self, config: &str) {
        self.instance().configure(config);
    }
}

impl Drop for PluginStrategy {
    fn drop(&mut self) {
        // SAFETY: the handle came from this module's constructor and this
        // is the only place it is released. The library field drops after
        // this body runs, so the destructor code is still mapped.
        unsafe { (self.destroy)(self.handle) }
    }
}
