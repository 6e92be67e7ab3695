use dotbind::unification::{IdentityComparer, StrictComparer};
use serde::Serialize;

use crate::{
    app::GlobalOptions,
    commands::common::{desktop_comparer, parse_identity, IdentityInfo},
    output::{print_output, yes_no, TabWriter},
};

pub struct CompareOptions {
    pub ignore_version: bool,
    pub strict: bool,
}

#[derive(Debug, Serialize)]
pub struct CompareReport {
    pub reference: IdentityInfo,
    pub definition: IdentityInfo,
    pub comparer: &'static str,
    pub reference_is_full_name: bool,
    pub result: String,
    pub unification_applied: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub unified: Option<UnifiedInfo>,
}

#[derive(Debug, Serialize)]
pub struct UnifiedInfo {
    pub reference: IdentityInfo,
    pub definition: IdentityInfo,
    pub is_definition_framework_assembly: bool,
}

pub fn run(
    reference: &str,
    definition: &str,
    options: &CompareOptions,
    opts: &GlobalOptions,
) -> anyhow::Result<()> {
    let (reference_identity, parts) = parse_identity(reference)?;
    let (definition_identity, _) = parse_identity(definition)?;

    let desktop;
    let (comparer, comparer_name) = if options.strict {
        (&StrictComparer as &dyn IdentityComparer, "strict")
    } else {
        desktop = desktop_comparer(opts)?;
        (&desktop as &dyn IdentityComparer, "desktop")
    };

    let comparison =
        comparer.compare_display_name(reference, &definition_identity, options.ignore_version);
    let unified = comparer
        .apply_unification_policies(&reference_identity, &definition_identity, parts.is_full_name())
        .ok()
        .map(|unified| UnifiedInfo {
            reference: IdentityInfo::from(unified.reference.as_ref()),
            definition: IdentityInfo::from(unified.definition.as_ref()),
            is_definition_framework_assembly: unified.is_definition_framework_assembly,
        });

    log::debug!(
        "{} comparer: {} -> {}: {}",
        comparer_name,
        reference_identity,
        definition_identity,
        comparison.result
    );

    let report = CompareReport {
        reference: IdentityInfo::from(&reference_identity),
        definition: IdentityInfo::from(&definition_identity),
        comparer: comparer_name,
        reference_is_full_name: parts.is_full_name(),
        result: comparison.result.to_string(),
        unification_applied: comparison.unification_applied,
        unified,
    };

    print_output(&report, opts, |report| {
        let mut tw = TabWriter::fields();
        tw.field("Reference", &report.reference.display_name);
        tw.field("Definition", &report.definition.display_name);
        tw.field("Comparer", report.comparer);
        tw.field("Result", &report.result);
        tw.field("Unification", yes_no(report.unification_applied));
        tw.print();

        match &report.unified {
            Some(unified) => {
                println!("\nAfter unification policies:");
                let mut tw = TabWriter::fields().indent("  ");
                tw.field("Reference", &unified.reference.display_name);
                tw.field("Definition", &unified.definition.display_name);
                tw.field(
                    "Framework",
                    yes_no(unified.is_definition_framework_assembly),
                );
                tw.print();
            }
            None => println!("\nUnification policies rule out a match."),
        }
    })
}
