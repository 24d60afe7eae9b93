#![no_std]

//! Raw `repr(C)` types for the TeamSpeak 3 client plugin boundary.
//!
//! The client hands the plugin a table of callback function pointers at load
//! time (`ts3plugin_setFunctionPointers`); everything here mirrors the vendor
//! SDK headers, reduced to the callbacks and property keys this plugin uses.
//! Discriminant values must match the vendor headers byte for byte.

use core::ffi::c_char;
use core::ffi::c_uint;
use core::ffi::c_void;

/// Client API major version this plugin is built against.
pub const PLUGIN_API_VERSION: i32 = 22;

/// Client-side ID of a single connected client.
pub type AnyId = u16;

// Return value of ts3plugin_offersConfigure.
pub const PLUGIN_OFFERS_NO_CONFIGURE: i32 = 0;

// Item types passed to ts3plugin_infoData.
pub const PLUGIN_SERVER: i32 = 0;
pub const PLUGIN_CHANNEL: i32 = 1;
pub const PLUGIN_CLIENT: i32 = 2;

// Status code returned by the client's callback functions.
pub const ERROR_OK: c_uint = 0;

/// Virtual server properties queryable as strings.
#[repr(usize)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VirtualServerProperty {
    UniqueIdentifier = 0,
    Name = 1,
    WelcomeMessage = 2,
    Platform = 3,
    Version = 4,
    MaxClients = 5,
    ClientsOnline = 7,
    Created = 9,
    CodecEncryptionMode = 11,
    DefaultServerGroup = 16,
    DefaultChannelGroup = 17,
    DefaultChannelAdminGroup = 19,
    MaxDownloadTotalBandwidth = 20,
    MaxUploadTotalBandwidth = 21,
    ComplainAutobanCount = 25,
    ComplainAutobanTime = 26,
    ComplainRemoveTime = 27,
    Id = 30,
    AntifloodPointsTickReduce = 31,
    AntifloodPointsNeededCommandBlock = 32,
    AntifloodPointsNeededIpBlock = 33,
    HostbuttonTooltip = 36,
    HostbuttonUrl = 37,
    HostbuttonGfxUrl = 38,
    DownloadQuota = 40,
    UploadQuota = 41,
    TotalBytesDownloaded = 44,
    TotalBytesUploaded = 45,
    Port = 46,
    MinClientVersion = 56,
    Ip = 65,
    MinAndroidVersion = 70,
    MinIosVersion = 71,
}

/// Channel properties queryable as strings.
#[repr(usize)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChannelProperty {
    Name = 0,
    Order = 8,
    DeleteDelay = 16,
}

/// Client properties queryable as strings.
#[repr(usize)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClientProperty {
    UniqueIdentifier = 0,
    Nickname = 1,
    Version = 2,
    Platform = 3,
    InputMuted = 5,
    OutputMuted = 6,
    IsRecording = 17,
    DatabaseId = 31,
    ChannelGroupId = 32,
    Servergroups = 33,
    Created = 34,
    LastConnected = 35,
    TotalConnections = 36,
    Away = 37,
    AwayMessage = 38,
    TalkPower = 41,
    Description = 44,
    IsTalker = 45,
    IsPrioritySpeaker = 49,
    NeededServerqueryViewPower = 52,
    IsChannelCommander = 55,
    Country = 56,
    Badges = 58,
}

/// The client's callback table, passed by value to
/// `ts3plugin_setFunctionPointers`.
///
/// String getters allocate the result on the client's heap; the plugin must
/// release every returned buffer through `free_memory` exactly once.
#[repr(C)]
#[derive(Debug, Clone, Copy)]
pub struct Ts3Functions {
    /// Asks the client to refresh its cached virtual server variables.
    pub request_server_variables:
        unsafe extern "C" fn(server_connection_handler_id: u64) -> c_uint,

    /// Reads one virtual server variable as a newly allocated C string.
    pub get_server_variable_as_string: unsafe extern "C" fn(
        server_connection_handler_id: u64,
        flag: usize,
        result: *mut *mut c_char,
    ) -> c_uint,

    /// Reads one channel variable as a newly allocated C string.
    pub get_channel_variable_as_string: unsafe extern "C" fn(
        server_connection_handler_id: u64,
        channel_id: u64,
        flag: usize,
        result: *mut *mut c_char,
    ) -> c_uint,

    /// Reads one client variable as a newly allocated C string.
    pub get_client_variable_as_string: unsafe extern "C" fn(
        server_connection_handler_id: u64,
        client_id: AnyId,
        flag: usize,
        result: *mut *mut c_char,
    ) -> c_uint,

    /// Releases a buffer previously returned by one of the getters above.
    pub free_memory: unsafe extern "C" fn(pointer: *mut c_void) -> c_uint,
}
