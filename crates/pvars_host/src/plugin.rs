//! The plugin: a store plus the host-facing lifecycle.

use pvars_foundation::{Error, OwnerId, Result};
use pvars_storage::VarStore;
use tracing::{debug, info, trace, warn};

use crate::cell::{Arg, Cell};
use crate::config::{PLUGIN_AUTHOR, PLUGIN_NAME, PLUGIN_VERSION, PluginConfig};
use crate::natives::{self, NATIVES, NativeInfo};

/// Owns the variable store and dispatches native calls into it.
#[derive(Debug, Default)]
pub struct Plugin {
    store: VarStore,
    config: PluginConfig,
    loaded: bool,
}

impl Plugin {
    /// Creates an unloaded plugin with an empty store.
    #[must_use]
    pub fn new(config: PluginConfig) -> Self {
        Self {
            store: VarStore::new(),
            config,
            loaded: false,
        }
    }

    /// Marks the plugin loaded, announcing it if the banner is enabled.
    pub fn load(&mut self) {
        if self.config.show_banner {
            info!("  {PLUGIN_NAME} {PLUGIN_VERSION} loaded");
            info!("  by {PLUGIN_AUTHOR}");
        }
        self.loaded = true;
    }

    /// Marks the plugin unloaded. The store is kept.
    pub fn unload(&mut self) {
        if self.config.show_banner {
            info!("  {PLUGIN_NAME} unloaded");
        }
        self.loaded = false;
    }

    /// Returns true between `load` and `unload`.
    #[must_use]
    pub const fn is_loaded(&self) -> bool {
        self.loaded
    }

    /// Calls a native by name.
    ///
    /// # Errors
    ///
    /// Returns an error if the native is unknown, the parameter count is
    /// wrong, or an argument has the wrong shape. The store is unchanged in
    /// every error case.
    pub fn call(&mut self, name: &str, args: &mut [Arg]) -> Result<Cell> {
        let native = natives::find(name).ok_or_else(|| Error::unknown_native(name))?;
        trace!(native = native.name, args = args.len(), "dispatch");
        native.call(&mut self.store, args)
    }

    /// Calls a native the way the host does: failures are logged and yield 0.
    pub fn invoke(&mut self, name: &str, args: &mut [Arg]) -> Cell {
        match self.call(name, args) {
            Ok(cell) => cell,
            Err(err) => {
                warn!("{err}");
                Cell::ZERO
            }
        }
    }

    /// Handles an owner leaving the host by dropping all its variables.
    ///
    /// Always returns true so the host keeps propagating the event.
    pub fn on_owner_disconnect(&mut self, owner: OwnerId) -> bool {
        let dropped = self.store.drop_owner(owner);
        debug!(%owner, dropped, "owner disconnected");
        true
    }

    /// Iterates the native table in registration order.
    pub fn natives(&self) -> impl Iterator<Item = &'static NativeInfo> {
        NATIVES.iter()
    }

    /// Returns the plugin configuration.
    #[must_use]
    pub const fn config(&self) -> &PluginConfig {
        &self.config
    }

    /// Returns the store.
    #[must_use]
    pub const fn store(&self) -> &VarStore {
        &self.store
    }

    /// Returns the store for direct mutation.
    pub fn store_mut(&mut self) -> &mut VarStore {
        &mut self.store
    }
}
