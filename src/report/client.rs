use ts3_abi::{AnyId, ClientProperty as P};

use crate::badges::BadgeDirectory;
use crate::query::VariableQuery;
use crate::report::{Style, push_field};
use crate::util::{format_timestamp_field, split_on};

/// First segment of the raw badge variable when the Overwolf client
/// integration is disabled.
const OVERWOLF_DISABLED: &str = "overwolf=0";
/// Marker rendered when the Overwolf integration is enabled.
const OVERWOLF_MARKER: &str = "Overwolf";
/// Named prefix carried by the badge-id list segment.
const BADGE_LIST_PREFIX: &str = "badges=";
/// Separator between rendered badge labels.
const BADGE_SEPARATOR: &str = ", ";

pub(crate) fn render(
    query: &dyn VariableQuery,
    badges: &BadgeDirectory,
    connection: u64,
    client: AnyId,
) -> String {
    let var = |prop: P| query.client_var(connection, client, prop);
    let mut out = String::new();
    let field = |out: &mut String, label: &str, value: &str| {
        push_field(out, label, value, Style::Italic);
    };

    field(&mut out, "Client-NAME", &var(P::Nickname));
    field(&mut out, "Client-UID", &var(P::UniqueIdentifier));
    field(&mut out, "Client-VERSION", &var(P::Version));
    field(&mut out, "Client-PLATFORM", &var(P::Platform));
    field(&mut out, "Client-DESCRIPTION", &var(P::Description));
    field(&mut out, "Client-COUNTRY", &var(P::Country));

    field(
        &mut out,
        "Client-BADGES",
        &render_badges(&var(P::Badges), badges),
    );

    field(&mut out, "Client-INPUT_MUTED", &var(P::InputMuted));
    field(&mut out, "Client-OUTPUT_MUTED", &var(P::OutputMuted));
    field(&mut out, "Client-AWAY", &var(P::Away));
    field(&mut out, "Client-AWAY_MESSAGE", &var(P::AwayMessage));
    field(&mut out, "Client-IS_RECORDING", &var(P::IsRecording));
    field(&mut out, "Client-IS_TALKER", &var(P::IsTalker));
    field(
        &mut out,
        "Client-IS_PRIORITY_SPEAKER",
        &var(P::IsPrioritySpeaker),
    );
    field(
        &mut out,
        "Client-IS_CHANNEL_COMMANDER",
        &var(P::IsChannelCommander),
    );

    field(&mut out, "Client-DATABASE_ID", &var(P::DatabaseId));
    field(
        &mut out,
        "Client-TOTAL_CONNECTIONS",
        &var(P::TotalConnections),
    );
    field(
        &mut out,
        "Client-FIRST_CONNECTED",
        &format_timestamp_field(&var(P::Created)),
    );
    field(
        &mut out,
        "Client-LAST_CONNECTED",
        &format_timestamp_field(&var(P::LastConnected)),
    );

    field(&mut out, "Client-SERVER_GROUPS", &var(P::Servergroups));
    field(&mut out, "Client-CHANNEL_GROUP", &var(P::ChannelGroupId));

    field(&mut out, "Client-TALK_POWER", &var(P::TalkPower));
    field(
        &mut out,
        "Client-NEEDED_SERVERQUERY_VIEW_POWER",
        &var(P::NeededServerqueryViewPower),
    );

    out
}

/// Renders the raw `CLIENT_BADGES` variable.
///
/// The raw value is colon-delimited: an Overwolf flag segment, optionally
/// followed by a `badges=`-prefixed comma-delimited badge-id list. A list
/// segment without the expected prefix contributes nothing.
pub(crate) fn render_badges(raw: &str, badges: &BadgeDirectory) -> String {
    let segments = split_on(raw, ':');
    let mut labels: Vec<String> = Vec::new();

    match segments.first() {
        None => return String::new(),
        Some(flag) if flag == OVERWOLF_DISABLED => {}
        Some(_) => labels.push(OVERWOLF_MARKER.to_string()),
    }

    if let Some(list) = segments.get(1) {
        if let Some(ids) = list.strip_prefix(BADGE_LIST_PREFIX) {
            for id in split_on(ids, ',') {
                labels.push(badges.lookup(&id).to_string());
            }
        }
    }

    labels.join(BADGE_SEPARATOR)
}
