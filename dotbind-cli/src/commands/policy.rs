use std::path::Path;

use dotbind::unification::tables::{SILVERLIGHT_LIBRARY_TOKEN, SILVERLIGHT_PLATFORM_TOKEN};
use serde::Serialize;

use crate::{
    app::GlobalOptions,
    commands::common::load_policy,
    output::{print_output, TabWriter},
};

#[derive(Debug, Serialize)]
pub struct PolicyReport {
    pub path: String,
    pub suppress_platform_portability: bool,
    pub suppress_library_portability: bool,
}

fn state(suppressed: bool) -> &'static str {
    if suppressed {
        "suppressed"
    } else {
        "enabled"
    }
}

pub fn run(path: &Path, opts: &GlobalOptions) -> anyhow::Result<()> {
    let policy = load_policy(path)?;

    let report = PolicyReport {
        path: path.display().to_string(),
        suppress_platform_portability: policy.suppress_platform_portability(),
        suppress_library_portability: policy.suppress_library_portability(),
    };

    print_output(&report, opts, |report| {
        println!("Policy: {}", report.path);
        let mut tw = TabWriter::new(&["Assemblies", "PKT", "Portability"]).indent("  ");
        tw.row(vec![
            "Silverlight platform".to_string(),
            SILVERLIGHT_PLATFORM_TOKEN.to_string(),
            state(report.suppress_platform_portability).to_string(),
        ]);
        tw.row(vec![
            "Silverlight library".to_string(),
            SILVERLIGHT_LIBRARY_TOKEN.to_string(),
            state(report.suppress_library_portability).to_string(),
        ]);
        tw.print();
    })
}
