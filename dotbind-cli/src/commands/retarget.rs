use std::borrow::Cow;

use dotbind::unification::tables::{RetargetEntry, RETARGETING};
use serde::Serialize;

use crate::{
    app::GlobalOptions,
    commands::common::{desktop_comparer, parse_identity, IdentityInfo},
    output::{print_output, yes_no, TabWriter},
};

#[derive(Debug, Serialize)]
pub struct RetargetReport {
    pub identity: IdentityInfo,
    pub retargeted: IdentityInfo,
    pub changed: bool,
    pub entries: Vec<RetargetEntryInfo>,
}

#[derive(Debug, Serialize)]
pub struct RetargetEntryInfo {
    pub version_low: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub version_high: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub new_name: Option<String>,
    pub new_public_key_token: String,
    pub new_version: String,
    pub portable: bool,
    pub matches: bool,
}

impl RetargetEntryInfo {
    fn new(entry: &RetargetEntry, matches: bool) -> Self {
        Self {
            version_low: entry.version_low.to_string(),
            version_high: entry.version_high.map(|v| v.to_string()),
            new_name: entry.new_name.map(str::to_string),
            new_public_key_token: entry.new_public_key_token.to_string(),
            new_version: entry.new_version.to_string(),
            portable: entry.is_portable,
            matches,
        }
    }
}

pub fn run(identity: &str, opts: &GlobalOptions) -> anyhow::Result<()> {
    let (identity, _) = parse_identity(identity)?;
    let comparer = desktop_comparer(opts)?;

    if !identity.is_retargetable {
        log::info!("{} is not marked Retargetable=Yes", identity.name);
    }

    let entries: &[RetargetEntry] = match identity.public_key_token() {
        Some(token) => RETARGETING.entries(&identity.name, &token),
        None => &[],
    };
    // Only the first entry containing the version is applied.
    let first_match = entries.iter().position(|entry| entry.contains(identity.version));

    let retargeted = comparer.retarget(&identity);
    let report = RetargetReport {
        identity: IdentityInfo::from(&identity),
        retargeted: IdentityInfo::from(retargeted.as_ref()),
        changed: matches!(retargeted, Cow::Owned(_)),
        entries: entries
            .iter()
            .enumerate()
            .map(|(i, entry)| RetargetEntryInfo::new(entry, Some(i) == first_match))
            .collect(),
    };

    print_output(&report, opts, |report| {
        let mut tw = TabWriter::fields();
        tw.field("Identity", &report.identity.display_name);
        tw.field("Retargeted", &report.retargeted.display_name);
        tw.field("Changed", yes_no(report.changed));
        tw.print();

        if report.entries.is_empty() {
            println!("\nNo retargeting entries for this name and token.");
            return;
        }

        println!("\nRetargeting entries:");
        let mut tw = TabWriter::new(&["", "Range", "Name", "Token", "Version", "Portable"])
            .indent("  ");
        for entry in &report.entries {
            let range = match &entry.version_high {
                Some(high) => format!("{}-{}", entry.version_low, high),
                None => entry.version_low.clone(),
            };
            tw.row(vec![
                if entry.matches { "*" } else { "" }.to_string(),
                range,
                entry.new_name.clone().unwrap_or_else(|| "-".to_string()),
                entry.new_public_key_token.clone(),
                entry.new_version.clone(),
                yes_no(entry.portable).to_string(),
            ]);
        }
        tw.print();
    })
}
