use std::borrow::Cow;

use serde::Serialize;

use crate::{
    app::GlobalOptions,
    commands::common::{desktop_comparer, parse_identity, IdentityInfo},
    output::{print_output, yes_no, TabWriter},
};

#[derive(Debug, Serialize)]
pub struct PortReport {
    pub identity: IdentityInfo,
    pub ported: IdentityInfo,
    pub changed: bool,
    pub suppress_platform_portability: bool,
    pub suppress_library_portability: bool,
}

pub fn run(identity: &str, opts: &GlobalOptions) -> anyhow::Result<()> {
    let (identity, _) = parse_identity(identity)?;
    let comparer = desktop_comparer(opts)?;
    let policy = comparer.policy();

    let ported = comparer.port(&identity);
    let report = PortReport {
        identity: IdentityInfo::from(&identity),
        ported: IdentityInfo::from(ported.as_ref()),
        changed: matches!(ported, Cow::Owned(_)),
        suppress_platform_portability: policy.suppress_platform_portability(),
        suppress_library_portability: policy.suppress_library_portability(),
    };

    print_output(&report, opts, |report| {
        let mut tw = TabWriter::fields();
        tw.field("Identity", &report.identity.display_name);
        tw.field("Ported", &report.ported.display_name);
        tw.field("Changed", yes_no(report.changed));
        tw.field(
            "Platform portability",
            if report.suppress_platform_portability { "suppressed" } else { "enabled" },
        );
        tw.field(
            "Library portability",
            if report.suppress_library_portability { "suppressed" } else { "enabled" },
        );
        tw.print();
    })
}
