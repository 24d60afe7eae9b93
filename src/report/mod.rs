pub mod channel;
pub mod client;
pub mod server;

use ts3_abi::{AnyId, PLUGIN_CHANNEL, PLUGIN_CLIENT, PLUGIN_SERVER};

use crate::badges::BadgeDirectory;
use crate::query::VariableQuery;

/// The kind of item selected in the client UI.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntityKind {
    Server,
    Channel,
    Client,
}

impl EntityKind {
    /// Maps the host's raw item-type value. Anything outside the known
    /// set yields `None`; no report may be produced for it.
    pub fn from_raw(value: i32) -> Option<Self> {
        match value {
            PLUGIN_SERVER => Some(Self::Server),
            PLUGIN_CHANNEL => Some(Self::Channel),
            PLUGIN_CLIENT => Some(Self::Client),
            _ => None,
        }
    }
}

/// BBCode style wrapped around a field value.
#[derive(Debug, Clone, Copy)]
pub(crate) enum Style {
    Bold,
    Italic,
}

/// Appends one `Label: [B]value[/B]` line to the report.
pub(crate) fn push_field(out: &mut String, label: &str, value: &str, style: Style) {
    let (open, close) = match style {
        Style::Bold => ("[B]", "[/B]"),
        Style::Italic => ("[I]", "[/I]"),
    };
    out.push_str(label);
    out.push_str(": ");
    out.push_str(open);
    out.push_str(value);
    out.push_str(close);
    out.push('\n');
}

/// Assembles the info-panel report for one selected item.
///
/// Individual variables that cannot be read render as empty values; the
/// report itself is always produced for a known `EntityKind`.
pub fn build_report(
    kind: EntityKind,
    query: &dyn VariableQuery,
    badges: &BadgeDirectory,
    connection: u64,
    id: u64,
) -> String {
    match kind {
        EntityKind::Server => server::render(query, connection),
        EntityKind::Channel => channel::render(query, connection, id),
        EntityKind::Client => client::render(query, badges, connection, id as AnyId),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn maps_known_item_types() {
        assert_eq!(EntityKind::from_raw(0), Some(EntityKind::Server));
        assert_eq!(EntityKind::from_raw(1), Some(EntityKind::Channel));
        assert_eq!(EntityKind::from_raw(2), Some(EntityKind::Client));
    }

    #[test]
    fn rejects_unknown_item_types() {
        assert_eq!(EntityKind::from_raw(3), None);
        assert_eq!(EntityKind::from_raw(-1), None);
    }

    #[test]
    fn field_lines_carry_style_tags() {
        let mut out = String::new();
        push_field(&mut out, "Server-NAME", "my server", Style::Bold);
        push_field(&mut out, "Channel-NAME", "lobby", Style::Italic);
        assert_eq!(
            out,
            "Server-NAME: [B]my server[/B]\nChannel-NAME: [I]lobby[/I]\n"
        );
    }
}
