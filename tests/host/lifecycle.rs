//! Integration tests for the plugin lifecycle
//!
//! Tests load/unload, owner disconnect, the native listing, and
//! configuration.

use pvars_foundation::{OwnerId, VarType};
use pvars_host::{Arg, Cell, CellKind, Plugin, PluginConfig};

#[test]
fn load_and_unload() {
    let mut plugin = Plugin::new(PluginConfig::default());
    assert!(!plugin.is_loaded());

    plugin.load();
    assert!(plugin.is_loaded());

    plugin.invoke("PVarSetInt", &mut [1.into(), "a".into(), 1.into()]);
    plugin.unload();
    assert!(!plugin.is_loaded());
    assert_eq!(plugin.store().get_int(OwnerId(1), "a"), Some(1));
}

#[test]
fn disconnect_leaves_no_residue() {
    let mut plugin = Plugin::new(PluginConfig::quiet());
    plugin.load();
    plugin.invoke("PVarSetInt", &mut [4.into(), "a".into(), 1.into()]);
    plugin.invoke("PVarSetString", &mut [4.into(), "b".into(), "x".into()]);
    plugin.invoke("PVarSetInt", &mut [6.into(), "a".into(), 9.into()]);

    assert!(plugin.on_owner_disconnect(OwnerId(4)));

    for name in ["a", "b"] {
        let ty = plugin.invoke("PVarGetType", &mut [4.into(), name.into()]);
        assert_eq!(ty, Cell::from(VarType::None));
    }
    assert_eq!(plugin.invoke("PVarsGetUpperIndex", &mut [4.into()]), Cell::ZERO);
    assert_eq!(plugin.invoke("PVarGetInt", &mut [6.into(), "a".into()]), Cell(9));

    let first = plugin.invoke("PVarSetInt", &mut [4.into(), "c".into(), 1.into()]);
    assert_eq!(first, Cell::TRUE);
    assert_eq!(plugin.store().index_of(OwnerId(4), "c"), Some(0));
}

#[test]
fn disconnect_of_unknown_owner_is_harmless() {
    let mut plugin = Plugin::new(PluginConfig::quiet());
    assert!(plugin.on_owner_disconnect(OwnerId(123)));
    assert!(plugin.store().is_empty());
}

#[test]
fn native_listing_matches_dispatch() {
    let mut plugin = Plugin::new(PluginConfig::quiet());
    let natives: Vec<_> = plugin.natives().collect();
    assert_eq!(natives.len(), 10);

    for native in natives {
        let mut args: Vec<Arg> = Vec::new();
        let err = plugin.call(native.name, &mut args).unwrap_err();
        assert!(err.to_string().contains(native.name));
    }

    let float_natives: Vec<_> = plugin
        .natives()
        .filter(|n| n.returns == CellKind::Float)
        .map(|n| n.name)
        .collect();
    assert_eq!(float_natives, vec!["PVarGetFloat"]);
}

#[test]
fn config_is_kept() {
    let config = PluginConfig::default()
        .with_banner(false)
        .with_log_filter("pvars=trace")
        .with_history_size(10);
    let plugin = Plugin::new(config.clone());

    assert_eq!(plugin.config(), &config);
}
