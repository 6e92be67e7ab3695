use dotbind::unification::tables::FRAMEWORK_ASSEMBLIES;
use serde::Serialize;

use crate::{
    app::GlobalOptions,
    commands::common::{desktop_comparer, parse_identity, IdentityInfo},
    output::{print_output, yes_no, TabWriter},
};

#[derive(Debug, Serialize)]
pub struct ClassifyReport {
    pub identity: IdentityInfo,
    pub framework_assembly: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub framework_entry: Option<FrameworkEntryInfo>,
    pub retargetable_assembly: bool,
    pub optionally_retargetable_assembly: bool,
}

#[derive(Debug, Serialize)]
pub struct FrameworkEntryInfo {
    pub public_key_token: String,
    pub version: String,
}

pub fn run(identity: &str, opts: &GlobalOptions) -> anyhow::Result<()> {
    let (identity, _) = parse_identity(identity)?;
    let comparer = desktop_comparer(opts)?;

    let report = ClassifyReport {
        identity: IdentityInfo::from(&identity),
        framework_assembly: comparer.is_framework_assembly(&identity),
        framework_entry: FRAMEWORK_ASSEMBLIES
            .get(&identity.name)
            .map(|entry| FrameworkEntryInfo {
                public_key_token: entry.public_key_token.to_string(),
                version: entry.version.to_string(),
            }),
        retargetable_assembly: comparer.is_retargetable_assembly(&identity),
        optionally_retargetable_assembly: comparer.is_optionally_retargetable_assembly(&identity),
    };

    print_output(&report, opts, |report| {
        let mut tw = TabWriter::fields();
        tw.field("Identity", &report.identity.display_name);
        tw.field("Framework", yes_no(report.framework_assembly));
        if let Some(entry) = &report.framework_entry {
            tw.field(
                "Framework entry",
                format!(
                    "PublicKeyToken={}, Version<={}",
                    entry.public_key_token, entry.version
                ),
            );
        }
        tw.field("Retargetable", yes_no(report.retargetable_assembly));
        tw.field(
            "Optionally retargetable",
            yes_no(report.optionally_retargetable_assembly),
        );
        tw.print();
    })
}
