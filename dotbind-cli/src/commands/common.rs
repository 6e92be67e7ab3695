use std::path::Path;

use anyhow::Context;
use dotbind::{
    identity::{AssemblyIdentity, AssemblyIdentityParts},
    unification::{DesktopComparer, PortabilityPolicy},
};
use serde::Serialize;

use crate::app::GlobalOptions;

/// Parse an assembly display name given on the command line.
pub fn parse_identity(
    display_name: &str,
) -> anyhow::Result<(AssemblyIdentity, AssemblyIdentityParts)> {
    AssemblyIdentity::parse_display_name(display_name)
        .with_context(|| format!("invalid assembly display name: {display_name}"))
}

/// Load the portability policy of an application configuration file.
pub fn load_policy(path: &Path) -> anyhow::Result<PortabilityPolicy> {
    PortabilityPolicy::from_xml_file(path)
        .with_context(|| format!("failed to load portability policy: {}", path.display()))
}

/// Build the desktop comparer, honoring `--app-config` when given.
pub fn desktop_comparer(opts: &GlobalOptions) -> anyhow::Result<DesktopComparer> {
    match &opts.app_config {
        Some(path) => Ok(DesktopComparer::with_policy(load_policy(path)?)),
        None => Ok(DesktopComparer::default()),
    }
}

#[derive(Debug, Serialize)]
pub struct IdentityInfo {
    pub display_name: String,
    pub name: String,
    pub version: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub culture: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub public_key_token: Option<String>,
    pub has_public_key: bool,
    pub retargetable: bool,
    pub content_type: String,
}

impl From<&AssemblyIdentity> for IdentityInfo {
    fn from(identity: &AssemblyIdentity) -> Self {
        Self {
            display_name: identity.display_name(),
            name: identity.name.clone(),
            version: identity.version.to_string(),
            culture: identity.culture.clone(),
            public_key_token: identity.public_key_token().map(|token| token.to_string()),
            has_public_key: identity.has_public_key(),
            retargetable: identity.is_retargetable,
            content_type: identity.content_type.to_string(),
        }
    }
}
