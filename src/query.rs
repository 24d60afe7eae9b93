use std::ffi::{CStr, c_char, c_void};
use std::ptr;

use ts3_abi::{
    AnyId, ChannelProperty, ClientProperty, ERROR_OK, Ts3Functions, VirtualServerProperty,
};

/// Read access to the live session variables of the connected server.
///
/// Every getter resolves to an empty string when the variable is absent
/// or the query fails; failures are never surfaced to the caller.
pub trait VariableQuery {
    /// Asks the host to refresh its cached virtual server variables.
    fn refresh_server(&self, connection: u64);

    fn server_var(&self, connection: u64, prop: VirtualServerProperty) -> String;

    fn channel_var(&self, connection: u64, channel: u64, prop: ChannelProperty) -> String;

    fn client_var(&self, connection: u64, client: AnyId, prop: ClientProperty) -> String;
}

/// `VariableQuery` over the host's callback table.
///
/// The host getters allocate the result on their side of the boundary;
/// each value is copied into an owned `String` and the host buffer is
/// released through the table's `free_memory` before returning.
pub struct Ts3Query<'a> {
    funcs: &'a Ts3Functions,
}

impl<'a> Ts3Query<'a> {
    pub fn new(funcs: &'a Ts3Functions) -> Self {
        Self { funcs }
    }

    /// Copies a host-allocated C string and hands the buffer back to the
    /// host. A non-OK status or null buffer yields an empty string.
    fn take_host_string(&self, rc: u32, out: *mut c_char) -> String {
        if rc != ERROR_OK || out.is_null() {
            return String::new();
        }
        let value = unsafe { CStr::from_ptr(out) }.to_string_lossy().into_owned();
        unsafe {
            (self.funcs.free_memory)(out as *mut c_void);
        }
        value
    }
}

impl VariableQuery for Ts3Query<'_> {
    fn refresh_server(&self, connection: u64) {
        unsafe {
            (self.funcs.request_server_variables)(connection);
        }
    }

    fn server_var(&self, connection: u64, prop: VirtualServerProperty) -> String {
        let mut out: *mut c_char = ptr::null_mut();
        let rc =
            unsafe { (self.funcs.get_server_variable_as_string)(connection, prop as usize, &mut out) };
        self.take_host_string(rc, out)
    }

    fn channel_var(&self, connection: u64, channel: u64, prop: ChannelProperty) -> String {
        let mut out: *mut c_char = ptr::null_mut();
        let rc = unsafe {
            (self.funcs.get_channel_variable_as_string)(connection, channel, prop as usize, &mut out)
        };
        self.take_host_string(rc, out)
    }

    fn client_var(&self, connection: u64, client: AnyId, prop: ClientProperty) -> String {
        let mut out: *mut c_char = ptr::null_mut();
        let rc = unsafe {
            (self.funcs.get_client_variable_as_string)(connection, client, prop as usize, &mut out)
        };
        self.take_host_string(rc, out)
    }
}
