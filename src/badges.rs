use std::collections::HashMap;

/// Immutable mapping from badge identifier to display label.
///
/// Badge identifiers arrive in the `CLIENT_BADGES` variable as opaque
/// UUID-like strings; the client offers no way to resolve them, so the
/// table is maintained here. Built once during plugin init and passed by
/// reference into the report builder.
pub struct BadgeDirectory {
    entries: HashMap<String, String>,
}

impl BadgeDirectory {
    /// Builds the directory with the known badge identifiers.
    pub fn builtin() -> Self {
        let mut entries = HashMap::new();
        let mut insert = |id: &str, label: &str| {
            entries.insert(id.to_string(), label.to_string());
        };
        insert(
            "1cb07348-34a4-4741-b50f-c41e584370f7",
            "Creator of TeamSpeak Addons",
        );
        insert(
            "50bbdbc8-0f2a-46eb-9808-602225b49627",
            "Registered during Gamescom 2016",
        );
        insert(
            "d95f9901-c42d-4bac-8849-7164fd9e2310",
            "Registered during Paris Games Week 2016",
        );
        insert(
            "62444179-0d99-42ba-a45c-c6b1557d079a",
            "Registered at Gamescom 2014",
        );
        // Same id as the Paris Games Week 2016 entry above; kept verbatim
        // from the upstream table, last insert wins.
        // TODO: confirm the real identifier for the 2014 Paris Games Week badge.
        insert(
            "d95f9901-c42d-4bac-8849-7164fd9e2310",
            "Registered at Paris Games Week 2014",
        );
        insert(
            "450f81c1-ab41-4211-a338-222fa94ed157",
            "Creator of at least 1 TeamSpeak Addon",
        );
        insert(
            "c9e97536-5a2d-4c8e-a135-af404587a472",
            "Creator of at least 3 TeamSpeak Addon",
        );
        insert(
            "94ec66de-5940-4e38-b002-970df0cf6c94",
            "Creator of at least 5 TeamSpeak Addon",
        );
        insert(
            "534c9582-ab02-4267-aec6-2d94361daa2a",
            "Visited TeamSpeak at Gamescom 2017",
        );
        insert(
            "34dbfa8f-bd27-494c-aa08-a312fc0bb240",
            "Gaming Hero at Gamescom 2017",
        );
        insert(
            "7d9fa2b1-b6fa-47ad-9838-c239a4ddd116",
            "MIFCOM | Entered Performance",
        );
        insert(
            "f81ad44d-e931-47d1-a3ef-5fd160217cf8",
            "4Netplayers customer",
        );
        insert(
            "f22c22f1-8e2d-4d99-8de9-f352dc26ac5b",
            "Rocket Beans TV Community",
        );
        insert(
            "64221fd1-706c-4bb2-ba55-996c39effa79",
            "MyTeamSpeak early adopter",
        );
        insert(
            "c3f823eb-5d5c-40f9-9dbd-3437d59a539d",
            "New MyTeamSpeak member",
        );
        insert(
            "935e5a2a-954a-44ca-aa7a-55c79285b601",
            "Discovered at E3 2018",
        );
        insert(
            "4eef1ecf-a0ea-423d-bfd0-496543a00305",
            "Visited TeamSpeak at Gamescom 2018",
        );
        insert(
            "24512806-f886-4440-b579-9e26e4219ef6",
            "Gamescom Exclusive Gaming Hero 2018",
        );
        insert(
            "b9c7d6ad-5b99-40fb-988c-1d02ab6cc130",
            "Found Tim Speak at Gamescom 2018",
        );
        insert(
            "6b187e83-873b-46b0-b2c2-a31af15e76a4",
            "TeamSpeak Merch Owner - 1st Edition",
        );
        Self { entries }
    }

    /// Resolves a badge identifier to its display label. Unknown
    /// identifiers resolve to an empty label, never to an error.
    pub fn lookup(&self, id: &str) -> &str {
        self.entries.get(id).map(String::as_str).unwrap_or("")
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
