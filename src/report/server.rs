use ts3_abi::VirtualServerProperty as P;

use crate::query::VariableQuery;
use crate::report::{Style, push_field};
use crate::util::{byte_unit_breakdown_field, format_timestamp_field};

/// Arrow markers framing the welcome message block.
const WM_OPEN: &str =
    "\\/ \\/ \\/ \\/ \\/ \\/ \\/ \\/ \\/ \\/ \\/ \\/ \\/ \\/ \\/ \\/ \\/ \\/ \\/ \\/ \\/ \\/ \\/ \\/ \\/";
const WM_CLOSE: &str =
    "/\\ /\\ /\\ /\\ /\\ /\\ /\\ /\\ /\\ /\\ /\\ /\\ /\\ /\\ /\\ /\\ /\\ /\\ /\\ /\\ /\\ /\\ /\\ /\\ /\\";

pub(crate) fn render(query: &dyn VariableQuery, connection: u64) -> String {
    // Server variables are cached client-side; ask for a refresh before
    // reading them.
    query.refresh_server(connection);

    let var = |prop: P| query.server_var(connection, prop);
    let mut out = String::new();
    let field = |out: &mut String, label: &str, value: &str| {
        push_field(out, label, value, Style::Bold);
    };

    field(&mut out, "Server-NAME", &var(P::Name));
    field(&mut out, "Server-ID", &var(P::Id));
    field(&mut out, "Server-UID", &var(P::UniqueIdentifier));
    field(&mut out, "Server-PLATFORM", &var(P::Platform));
    field(&mut out, "Server-VERSION", &var(P::Version));
    field(
        &mut out,
        "Server-CLIENTS",
        &format!("{} / {}", var(P::ClientsOnline), var(P::MaxClients)),
    );
    field(
        &mut out,
        "Server-CREATED",
        &format_timestamp_field(&var(P::Created)),
    );
    field(
        &mut out,
        "Server-CODEC_ENCRYPTION_MODE",
        &var(P::CodecEncryptionMode),
    );
    out.push_str("Server-WELCOME MESSAGE: UNDERNEATH\n");
    out.push_str(WM_OPEN);
    out.push_str("[B]\n");
    out.push_str(&var(P::WelcomeMessage));
    out.push_str("\n[/B]");
    out.push_str(WM_CLOSE);
    out.push_str("\n\n[B][U]EXTENDED[/U][/B]\n\n");

    field(
        &mut out,
        "DEFAULT_SERVER_GROUP",
        &var(P::DefaultServerGroup),
    );
    field(
        &mut out,
        "DEFAULT_CHANNEL_GROUP",
        &var(P::DefaultChannelGroup),
    );
    field(
        &mut out,
        "DEFAULT_CHANNEL_ADMIN_GROUP",
        &var(P::DefaultChannelAdminGroup),
    );

    let max_download = var(P::MaxDownloadTotalBandwidth);
    field(&mut out, "MAX_DOWNLOAD_TOTAL_BANDWIDTH", &max_download);
    field(
        &mut out,
        "MAX_DOWNLOAD_TOTAL_BANDWIDTH (units)",
        &byte_unit_breakdown_field(&max_download),
    );
    let max_upload = var(P::MaxUploadTotalBandwidth);
    field(&mut out, "MAX_UPLOAD_TOTAL_BANDWIDTH", &max_upload);
    field(
        &mut out,
        "MAX_UPLOAD_TOTAL_BANDWIDTH (units)",
        &byte_unit_breakdown_field(&max_upload),
    );

    field(&mut out, "HOSTBUTTON_TOOLTIP", &var(P::HostbuttonTooltip));
    field(&mut out, "HOSTBUTTON_URL", &var(P::HostbuttonUrl));
    field(&mut out, "HOSTBUTTON_GFX_URL", &var(P::HostbuttonGfxUrl));

    field(&mut out, "MIN_CLIENT_VERSION", &var(P::MinClientVersion));
    field(&mut out, "MIN_ANDROID_VERSION", &var(P::MinAndroidVersion));
    field(&mut out, "MIN_IOS_VERSION", &var(P::MinIosVersion));

    field(
        &mut out,
        "SERVER-ADDRESS",
        &format!("{}:{}", var(P::Ip), var(P::Port)),
    );

    field(
        &mut out,
        "COMPLAIN_AUTOBAN_COUNT",
        &var(P::ComplainAutobanCount),
    );
    field(
        &mut out,
        "COMPLAIN_AUTOBAN_TIME",
        &var(P::ComplainAutobanTime),
    );
    field(
        &mut out,
        "COMPLAIN_REMOVE_TIME",
        &var(P::ComplainRemoveTime),
    );

    field(&mut out, "DOWNLOAD_QUOTA", &var(P::DownloadQuota));
    field(&mut out, "UPLOAD_QUOTA", &var(P::UploadQuota));
    field(
        &mut out,
        "TOTAL_BYTES_DOWNLOADED",
        &byte_unit_breakdown_field(&var(P::TotalBytesDownloaded)),
    );
    field(
        &mut out,
        "TOTAL_BYTES_UPLOADED",
        &byte_unit_breakdown_field(&var(P::TotalBytesUploaded)),
    );

    field(
        &mut out,
        "ANTIFLOOD_POINTS_TICK_REDUCE",
        &var(P::AntifloodPointsTickReduce),
    );
    field(
        &mut out,
        "ANTIFLOOD_POINTS_NEEDED_COMMAND_BLOCK",
        &var(P::AntifloodPointsNeededCommandBlock),
    );
    field(
        &mut out,
        "ANTIFLOOD_POINTS_NEEDED_IP_BLOCK",
        &var(P::AntifloodPointsNeededIpBlock),
    );

    out
}
