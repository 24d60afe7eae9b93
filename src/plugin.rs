//! The `ts3plugin_*` export surface the TeamSpeak 3 client loads.
//!
//! The client drives the whole lifecycle: it copies in the callback table,
//! calls `ts3plugin_init` once, requests info-panel content through
//! `ts3plugin_infoData`, and releases every returned buffer through
//! `ts3plugin_freeMemory`. No panic may cross this boundary; every failure
//! is signalled by leaving the output buffer null.

#![allow(non_snake_case)]

use std::ffi::{CStr, CString, c_char, c_int, c_void};
use std::ptr;

use log::LevelFilter;
use once_cell::sync::OnceCell;
use ts3_abi::{PLUGIN_API_VERSION, PLUGIN_OFFERS_NO_CONFIGURE, Ts3Functions};

use crate::badges::BadgeDirectory;
use crate::log::{LOG_LEVEL_ENV_VAR, LOG_PATH_ENV_VAR, default_log_path, init_logging};
use crate::query::Ts3Query;
use crate::report::{EntityKind, build_report};

// Process-wide state, written once by the host's lifecycle calls and
// read-only afterwards.
static FUNCTIONS: OnceCell<Ts3Functions> = OnceCell::new();
static BADGES: OnceCell<BadgeDirectory> = OnceCell::new();
static PLUGIN_ID: OnceCell<String> = OnceCell::new();

/// Unique name identifying this plugin.
#[unsafe(no_mangle)]
pub extern "C" fn ts3plugin_name() -> *const c_char {
    c"Keyinator's More Info".as_ptr()
}

/// Plugin version.
#[unsafe(no_mangle)]
pub extern "C" fn ts3plugin_version() -> *const c_char {
    c"1.1".as_ptr()
}

/// Plugin API version. Must match the client's API major version, else the
/// plugin fails to load.
#[unsafe(no_mangle)]
pub extern "C" fn ts3plugin_apiVersion() -> c_int {
    PLUGIN_API_VERSION
}

/// Plugin author.
#[unsafe(no_mangle)]
pub extern "C" fn ts3plugin_author() -> *const c_char {
    c"Keyinator".as_ptr()
}

/// Plugin description.
#[unsafe(no_mangle)]
pub extern "C" fn ts3plugin_description() -> *const c_char {
    c"A plugin to give more infos to users".as_ptr()
}

/// Receives the client's callback table. Called once before init.
#[unsafe(no_mangle)]
pub extern "C" fn ts3plugin_setFunctionPointers(funcs: Ts3Functions) {
    let _ = FUNCTIONS.set(funcs);
}

/// Called right after loading the plugin. Returns 0 on success, 1 on
/// failure; on failure the client unloads the plugin again.
#[unsafe(no_mangle)]
pub extern "C" fn ts3plugin_init() -> c_int {
    // Diagnostics are best effort; a missing log file must not keep the
    // plugin from loading.
    let _ = init_logging(
        LOG_PATH_ENV_VAR,
        default_log_path(),
        LOG_LEVEL_ENV_VAR,
        LevelFilter::Info,
    );

    let badges = BADGES.get_or_init(BadgeDirectory::builtin);
    log::info!("plugin initialized, {} badge labels known", badges.len());
    0
}

/// Called right before the plugin is unloaded.
#[unsafe(no_mangle)]
pub extern "C" fn ts3plugin_shutdown() {
    log::info!("plugin shutdown");
    log::logger().flush();
}

/// The plugin offers no configuration window.
#[unsafe(no_mangle)]
pub extern "C" fn ts3plugin_offersConfigure() -> c_int {
    PLUGIN_OFFERS_NO_CONFIGURE
}

/// Stores the plugin ID assigned by the client. The passed buffer is
/// invalidated after this call returns, so it is copied here.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn ts3plugin_registerPluginID(id: *const c_char) {
    if id.is_null() {
        return;
    }
    let id = unsafe { CStr::from_ptr(id) }.to_string_lossy().into_owned();
    log::info!("registered plugin id {id}");
    let _ = PLUGIN_ID.set(id);
}

/// Static title shown in the left column of the info frame.
#[unsafe(no_mangle)]
pub extern "C" fn ts3plugin_infoTitle() -> *const c_char {
    c"Extend info".as_ptr()
}

/// Dynamic content shown in the right column of the info frame.
///
/// Ownership of the written buffer transfers to the client; it calls
/// `ts3plugin_freeMemory` exactly once per buffer. On any failure `*data`
/// is left null and the client displays nothing.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn ts3plugin_infoData(
    server_connection_handler_id: u64,
    id: u64,
    item_type: c_int,
    data: *mut *mut c_char,
) {
    unsafe {
        *data = ptr::null_mut();
    }

    let Some(kind) = EntityKind::from_raw(item_type) else {
        log::warn!("invalid info item type: {item_type}");
        return;
    };
    let (Some(funcs), Some(badges)) = (FUNCTIONS.get(), BADGES.get()) else {
        log::warn!("info requested before the plugin was initialized");
        return;
    };

    let query = Ts3Query::new(funcs);
    let report = build_report(kind, &query, badges, server_connection_handler_id, id);

    // Host strings are NUL-free, so this only fails on a corrupted report.
    match CString::new(report) {
        Ok(buffer) => unsafe {
            *data = buffer.into_raw();
        },
        Err(e) => log::warn!("report contained an interior NUL: {e}"),
    }
}

/// Releases a buffer written by `ts3plugin_infoData`.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn ts3plugin_freeMemory(data: *mut c_void) {
    if !data.is_null() {
        // Reclaim the CString handed out in ts3plugin_infoData.
        drop(unsafe { CString::from_raw(data as *mut c_char) });
    }
}

/// The plugin does not request to be loaded automatically.
#[unsafe(no_mangle)]
pub extern "C" fn ts3plugin_requestAutoload() -> c_int {
    0
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;
    use std::ffi::c_uint;
    use ts3_abi::{
        AnyId, ChannelProperty, ClientProperty, ERROR_OK, PLUGIN_CHANNEL, PLUGIN_CLIENT,
        PLUGIN_SERVER,
    };

    // A fake host: getters allocate C strings the same way the client
    // does, free_memory reclaims them.
    unsafe extern "C" fn fake_request_server_variables(_sch: u64) -> c_uint {
        ERROR_OK
    }

    fn leak_c_string(s: String) -> *mut c_char {
        CString::new(s).expect("no interior NUL").into_raw()
    }

    unsafe extern "C" fn fake_server_var(
        _sch: u64,
        flag: usize,
        result: *mut *mut c_char,
    ) -> c_uint {
        unsafe { *result = leak_c_string(format!("server-{flag}")) };
        ERROR_OK
    }

    unsafe extern "C" fn fake_channel_var(
        _sch: u64,
        _channel: u64,
        flag: usize,
        result: *mut *mut c_char,
    ) -> c_uint {
        let value = match flag {
            f if f == ChannelProperty::Name as usize => "Lobby".to_string(),
            f if f == ChannelProperty::Order as usize => "5".to_string(),
            f if f == ChannelProperty::DeleteDelay as usize => "60".to_string(),
            other => format!("channel-{other}"),
        };
        unsafe { *result = leak_c_string(value) };
        ERROR_OK
    }

    unsafe extern "C" fn fake_client_var(
        _sch: u64,
        _client: AnyId,
        flag: usize,
        result: *mut *mut c_char,
    ) -> c_uint {
        let value = if flag == ClientProperty::Badges as usize {
            "overwolf=1".to_string()
        } else {
            format!("client-{flag}")
        };
        unsafe { *result = leak_c_string(value) };
        ERROR_OK
    }

    unsafe extern "C" fn fake_free_memory(pointer: *mut c_void) -> c_uint {
        if !pointer.is_null() {
            drop(unsafe { CString::from_raw(pointer as *mut c_char) });
        }
        ERROR_OK
    }

    fn fake_functions() -> Ts3Functions {
        Ts3Functions {
            request_server_variables: fake_request_server_variables,
            get_server_variable_as_string: fake_server_var,
            get_channel_variable_as_string: fake_channel_var,
            get_client_variable_as_string: fake_client_var,
            free_memory: fake_free_memory,
        }
    }

    #[test]
    #[serial]
    fn info_data_roundtrip_through_the_c_surface() {
        ts3plugin_setFunctionPointers(fake_functions());
        assert_eq!(ts3plugin_init(), 0);
        // A second init is harmless; the badge directory stays intact.
        assert_eq!(ts3plugin_init(), 0);

        unsafe {
            // Known item type produces an owned buffer.
            let mut data: *mut c_char = ptr::null_mut();
            ts3plugin_infoData(1, 42, PLUGIN_CHANNEL, &mut data);
            assert!(!data.is_null());

            let report = CStr::from_ptr(data).to_string_lossy().into_owned();
            assert!(report.contains("Channel-NAME: [I]Lobby[/I]"));
            assert!(report.contains("Channel-DELETE-DELAY: [I]60[/I]"));

            // The host frees the buffer exactly once; null is a no-op.
            ts3plugin_freeMemory(data as *mut c_void);
            ts3plugin_freeMemory(ptr::null_mut());

            // Server and client reports go through the same surface.
            let mut data: *mut c_char = ptr::null_mut();
            ts3plugin_infoData(1, 0, PLUGIN_SERVER, &mut data);
            assert!(!data.is_null());
            let report = CStr::from_ptr(data).to_string_lossy().into_owned();
            assert!(report.contains("[B][U]EXTENDED[/U][/B]"));
            ts3plugin_freeMemory(data as *mut c_void);

            let mut data: *mut c_char = ptr::null_mut();
            ts3plugin_infoData(1, 17, PLUGIN_CLIENT, &mut data);
            assert!(!data.is_null());
            let report = CStr::from_ptr(data).to_string_lossy().into_owned();
            assert!(report.contains("Client-BADGES: [I]Overwolf[/I]"));
            ts3plugin_freeMemory(data as *mut c_void);

            // Unknown item type produces no buffer at all.
            let mut data: *mut c_char = ptr::null_mut();
            ts3plugin_infoData(1, 42, 99, &mut data);
            assert!(data.is_null());
        }
    }

    #[test]
    #[serial]
    fn static_metadata_is_wired_up() {
        unsafe {
            assert_eq!(
                CStr::from_ptr(ts3plugin_name()).to_str().unwrap(),
                "Keyinator's More Info"
            );
            assert_eq!(CStr::from_ptr(ts3plugin_version()).to_str().unwrap(), "1.1");
            assert_eq!(
                CStr::from_ptr(ts3plugin_infoTitle()).to_str().unwrap(),
                "Extend info"
            );
        }
        assert_eq!(ts3plugin_apiVersion(), PLUGIN_API_VERSION);
        assert_eq!(ts3plugin_offersConfigure(), PLUGIN_OFFERS_NO_CONFIGURE);
        assert_eq!(ts3plugin_requestAutoload(), 0);
    }
}
