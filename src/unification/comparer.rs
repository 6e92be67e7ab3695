//! Reference-to-definition identity comparison.
//!
//! [`IdentityComparer`] decides whether an assembly reference is satisfied by a candidate
//! definition. Implementations differ only in [`IdentityComparer::apply_unification_policies`],
//! the step that may rewrite either identity before the comparison proper:
//!
//! - [`StrictComparer`] applies no policy. Identities match when their names, cultures, keys
//!   and versions match.
//! - [`DesktopComparer`] follows the desktop binder: mscorlib always unifies, Silverlight and
//!   portable-library identities are ported to their desktop equivalents, retargetable
//!   references are redirected through the retargeting table, and references to framework
//!   assemblies unify across versions.
//!
//! # Order of Operations
//!
//! [`DesktopComparer`] applies its policies in a fixed order. Lookups after porting use the
//! ported name and token, so porting always precedes retargeting:
//!
//! 1. mscorlib short-circuit
//! 2. retargetable definition with non-retargetable reference is rejected
//! 3. [`DesktopComparer::port`] of both identities
//! 4. [`DesktopComparer::retarget`] of a retargetable reference
//! 5. framework classification of the definition
//!
//! # Examples
//!
//! ```rust
//! use dotbind::prelude::*;
//!
//! let comparer = DesktopComparer::default();
//! let reference = AssemblyIdentity::parse(
//!     "System, Version=2.0.5.0, Culture=neutral, PublicKeyToken=969db8053d3322ac, Retargetable=Yes",
//! )?;
//! let definition = AssemblyIdentity::parse(
//!     "System, Version=4.0.0.0, Culture=neutral, PublicKeyToken=b77a5c561934e089",
//! )?;
//! assert!(comparer.reference_matches_definition(&reference, &definition));
//! # Ok::<(), dotbind::Error>(())
//! ```

use std::{borrow::Cow, ptr};

use strum::Display;
use thiserror::Error;

use crate::{
    identity::{
        simple_names_equal, AssemblyIdentity, AssemblyIdentityParts, AssemblyVersion,
        ContentType, PublicKeyToken, StrongName,
    },
    unification::{
        tables::{
            RetargetEntry, ECMA_TOKEN, FRAMEWORK_ASSEMBLIES, FX_VERSION, MICROSOFT_TOKEN,
            RETARGETING, SILVERLIGHT_LIBRARY_TOKEN, SILVERLIGHT_PLATFORM_TOKEN, VS_VERSION,
        },
        PortabilityPolicy,
    },
};

/// Lowest version eligible for porting.
const PORTABLE_VERSION_LOW: AssemblyVersion = AssemblyVersion::new(2, 0, 0, 0);
/// Highest version eligible for porting.
const PORTABLE_VERSION_HIGH: AssemblyVersion = AssemblyVersion::new(5, 9, 0, 0);

/// The reference cannot be satisfied by the definition.
///
/// This is an ordinary outcome of unification, not a failure of the comparer.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[error("reference is not equivalent to the definition")]
pub struct NotEquivalent;

/// Reference and definition after unification policies were applied.
///
/// Either identity is borrowed from the caller when no policy rewrote it.
#[derive(Debug, Clone)]
pub struct UnifiedIdentities<'a> {
    /// The reference, possibly ported or retargeted.
    pub reference: Cow<'a, AssemblyIdentity>,
    /// The definition, possibly ported.
    pub definition: Cow<'a, AssemblyIdentity>,
    /// Whether the definition is a known framework assembly, which unifies across versions.
    pub is_definition_framework_assembly: bool,
}

impl<'a> UnifiedIdentities<'a> {
    fn unchanged(reference: &'a AssemblyIdentity, definition: &'a AssemblyIdentity) -> Self {
        Self {
            reference: Cow::Borrowed(reference),
            definition: Cow::Borrowed(definition),
            is_definition_framework_assembly: false,
        }
    }
}

/// Verdict of [`IdentityComparer::compare`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
pub enum ComparisonResult {
    /// The reference is not satisfied by the definition.
    NotEquivalent,
    /// The reference is satisfied by the definition.
    Equivalent,
    /// The reference is satisfied by the definition if version differences are ignored.
    EquivalentIgnoringVersion,
}

/// A comparison verdict together with whether version unification was needed to reach it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Comparison {
    /// The verdict.
    pub result: ComparisonResult,
    /// Set when a framework assembly matched despite a version mismatch.
    pub unification_applied: bool,
}

impl Comparison {
    const NOT_EQUIVALENT: Self = Self::new(ComparisonResult::NotEquivalent);
    const EQUIVALENT: Self = Self::new(ComparisonResult::Equivalent);

    const fn new(result: ComparisonResult) -> Self {
        Self {
            result,
            unification_applied: false,
        }
    }

    /// Whether the reference is satisfied, with or without ignoring versions.
    #[must_use]
    pub fn is_equivalent(&self) -> bool {
        self.result != ComparisonResult::NotEquivalent
    }
}

/// Decides whether assembly references are satisfied by assembly definitions.
pub trait IdentityComparer {
    /// Rewrite `reference` and `definition` according to the comparer's unification policies.
    ///
    /// `reference_is_full_name` states whether the reference specified its name, full version,
    /// culture and key. Retargeting requires a full name.
    ///
    /// # Errors
    /// Returns [`NotEquivalent`] when the policies alone prove that the reference cannot bind to
    /// the definition.
    fn apply_unification_policies<'a>(
        &self,
        reference: &'a AssemblyIdentity,
        definition: &'a AssemblyIdentity,
        reference_is_full_name: bool,
    ) -> Result<UnifiedIdentities<'a>, NotEquivalent>;

    /// Compare a reference taken from metadata against a definition.
    fn compare(
        &self,
        reference: &AssemblyIdentity,
        definition: &AssemblyIdentity,
        ignore_version: bool,
    ) -> Comparison {
        if reference.content_type != definition.content_type {
            return Comparison::NOT_EQUIVALENT;
        }
        if !reference.is_retargetable {
            if reference == definition {
                return Comparison::EQUIVALENT;
            }
            if !definition.is_retargetable && !reference.name_matches(definition) {
                return Comparison::NOT_EQUIVALENT;
            }
        }

        self.compare_with_parts(
            reference,
            AssemblyIdentityParts::full(),
            definition,
            ignore_version,
        )
    }

    /// Compare a reference given as a display name against a definition.
    ///
    /// A display name that does not parse never matches.
    fn compare_display_name(
        &self,
        reference: &str,
        definition: &AssemblyIdentity,
        ignore_version: bool,
    ) -> Comparison {
        let Ok((reference, parts)) = AssemblyIdentity::parse_display_name(reference) else {
            return Comparison::NOT_EQUIVALENT;
        };
        if reference.content_type != definition.content_type {
            return Comparison::NOT_EQUIVALENT;
        }

        self.compare_with_parts(&reference, parts, definition, ignore_version)
    }

    /// Compare a reference of which only `reference_parts` were specified against a definition.
    fn compare_with_parts(
        &self,
        reference: &AssemblyIdentity,
        reference_parts: AssemblyIdentityParts,
        definition: &AssemblyIdentity,
        ignore_version: bool,
    ) -> Comparison {
        let is_full_name = reference_parts.is_full_name();
        let Ok(unified) = self.apply_unification_policies(reference, definition, is_full_name)
        else {
            return Comparison::NOT_EQUIVALENT;
        };

        if let Cow::Borrowed(unified_reference) = &unified.reference {
            if ptr::eq(*unified_reference, definition) {
                return Comparison::EQUIVALENT;
            }
        }

        let reference = unified.reference.as_ref();
        let definition = unified.definition.as_ref();
        let mut is_framework_assembly = unified.is_definition_framework_assembly;
        let compare_culture = reference_parts.contains(AssemblyIdentityParts::CULTURE);

        if !definition.is_strong_name() {
            if reference.is_strong_name() {
                return Comparison::NOT_EQUIVALENT;
            }
            if !is_full_name {
                // Partial references to weakly named assemblies ignore the version.
                if !reference.name_matches(definition)
                    || (compare_culture && !reference.culture_matches(definition))
                {
                    return Comparison::NOT_EQUIVALENT;
                }
                return Comparison::EQUIVALENT;
            }
            is_framework_assembly = false;
        }

        if !reference.name_matches(definition) {
            return Comparison::NOT_EQUIVALENT;
        }
        if compare_culture && !reference.culture_matches(definition) {
            return Comparison::NOT_EQUIVALENT;
        }
        if reference_parts.intersects(AssemblyIdentityParts::PUBLIC_KEY_OR_TOKEN)
            && !reference.keys_equal(definition)
        {
            return Comparison::NOT_EQUIVALENT;
        }

        let version_parts = reference_parts & AssemblyIdentityParts::VERSION;
        let version_differs = version_parts != AssemblyIdentityParts::VERSION
            || reference.version != definition.version;
        if definition.is_strong_name() && !version_parts.is_empty() && version_differs {
            if is_framework_assembly {
                log::trace!(
                    "unified {} to framework assembly {}",
                    reference,
                    definition
                );
                return Comparison {
                    result: ComparisonResult::Equivalent,
                    unification_applied: true,
                };
            }
            return if ignore_version {
                Comparison::new(ComparisonResult::EquivalentIgnoringVersion)
            } else {
                Comparison::NOT_EQUIVALENT
            };
        }

        Comparison::EQUIVALENT
    }

    /// Whether `reference` binds to `definition` without ignoring versions.
    fn reference_matches_definition(
        &self,
        reference: &AssemblyIdentity,
        definition: &AssemblyIdentity,
    ) -> bool {
        self.compare(reference, definition, false).result != ComparisonResult::NotEquivalent
    }

    /// Whether the reference display name binds to `definition` without ignoring versions.
    fn reference_matches_definition_display_name(
        &self,
        reference: &str,
        definition: &AssemblyIdentity,
    ) -> bool {
        self.compare_display_name(reference, definition, false).result
            != ComparisonResult::NotEquivalent
    }
}

/// Comparer that applies no unification policy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct StrictComparer;

impl IdentityComparer for StrictComparer {
    fn apply_unification_policies<'a>(
        &self,
        reference: &'a AssemblyIdentity,
        definition: &'a AssemblyIdentity,
        _reference_is_full_name: bool,
    ) -> Result<UnifiedIdentities<'a>, NotEquivalent> {
        Ok(UnifiedIdentities::unchanged(reference, definition))
    }
}

/// Comparer implementing the desktop runtime binder's unification rules.
///
/// The comparer holds only its [`PortabilityPolicy`]; the policy tables are process-wide
/// statics, so instances are cheap to copy and share between threads.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DesktopComparer {
    policy: PortabilityPolicy,
}

impl DesktopComparer {
    /// Create a comparer with portability enabled for all assemblies.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a comparer honoring the given portability policy.
    #[must_use]
    pub const fn with_policy(policy: PortabilityPolicy) -> Self {
        Self { policy }
    }

    /// The portability policy of this comparer.
    #[must_use]
    pub const fn policy(&self) -> PortabilityPolicy {
        self.policy
    }

    /// Map a Silverlight or portable-library identity onto its desktop equivalent.
    ///
    /// Only strong-named, non-retargetable identities with default content type and a version
    /// in `[2.0.0.0, 5.9.0.0]` are considered. The identity is returned unchanged when no
    /// mapping applies or the policy suppresses it.
    #[must_use]
    pub fn port<'a>(&self, identity: &'a AssemblyIdentity) -> Cow<'a, AssemblyIdentity> {
        match self.ported(identity) {
            Some(ported) => Cow::Owned(ported),
            None => Cow::Borrowed(identity),
        }
    }

    /// Redirect a retargetable identity through the retargeting table.
    ///
    /// The first table entry whose version range contains the identity's version decides the
    /// replacement name, token and version. Identities with a culture, non-default content type
    /// or no strong name are never retargeted.
    #[must_use]
    pub fn retarget<'a>(&self, identity: &'a AssemblyIdentity) -> Cow<'a, AssemblyIdentity> {
        match Self::retargeted(identity) {
            Some(retargeted) => Cow::Owned(retargeted),
            None => Cow::Borrowed(identity),
        }
    }

    /// Whether the identity is a framework assembly at or below the framework's version.
    ///
    /// Only major and minor version are compared against the table's ceiling.
    #[must_use]
    pub fn is_framework_assembly(&self, identity: &AssemblyIdentity) -> bool {
        if identity.content_type != ContentType::Default {
            return false;
        }
        let Some(entry) = FRAMEWORK_ASSEMBLIES.get(&identity.name) else {
            return false;
        };
        identity.public_key_token() == Some(entry.public_key_token)
            && entry.covers(identity.version)
    }

    /// Whether the retargeting table has any entry for the identity's name and token.
    #[must_use]
    pub fn is_retargetable_assembly(&self, identity: &AssemblyIdentity) -> bool {
        !Self::retargeting_entries(identity).is_empty()
    }

    /// Whether a retargetable identity has a portable entry in the retargeting table.
    ///
    /// Identities without `Retargetable=Yes` are never optionally retargetable.
    #[must_use]
    pub fn is_optionally_retargetable_assembly(&self, identity: &AssemblyIdentity) -> bool {
        if !identity.is_retargetable {
            return false;
        }
        Self::retargeting_entries(identity)
            .iter()
            .any(|entry| entry.is_portable)
    }

    fn ported(&self, identity: &AssemblyIdentity) -> Option<AssemblyIdentity> {
        if identity.is_retargetable
            || identity.content_type != ContentType::Default
            || identity.version < PORTABLE_VERSION_LOW
            || identity.version > PORTABLE_VERSION_HIGH
        {
            return None;
        }

        let token = identity.public_key_token()?;
        let name = identity.name.as_str();
        let (public_key_token, version) = if token == SILVERLIGHT_PLATFORM_TOKEN {
            if self.policy.suppress_platform_portability()
                || !(simple_names_equal(name, "System") || simple_names_equal(name, "System.Core"))
            {
                return None;
            }
            (ECMA_TOKEN, FX_VERSION)
        } else if token == SILVERLIGHT_LIBRARY_TOKEN {
            if self.policy.suppress_library_portability() {
                return None;
            }
            if simple_names_equal(name, "Microsoft.VisualBasic") {
                (MICROSOFT_TOKEN, VS_VERSION)
            } else if simple_names_equal(name, "System.ComponentModel.Composition") {
                (ECMA_TOKEN, FX_VERSION)
            } else {
                return None;
            }
        } else {
            return None;
        };

        let ported = AssemblyIdentity {
            name: identity.name.clone(),
            version,
            culture: identity.culture.clone(),
            strong_name: Some(StrongName::Token(public_key_token)),
            is_retargetable: identity.is_retargetable,
            content_type: identity.content_type,
        };
        log::debug!("ported {} to {}", identity, ported);
        Some(ported)
    }

    fn retargeted(identity: &AssemblyIdentity) -> Option<AssemblyIdentity> {
        let token = Self::retargeting_token(identity)?;
        let entry = RETARGETING.find(&identity.name, &token, identity.version)?;

        let retargeted = AssemblyIdentity {
            name: entry
                .new_name
                .map_or_else(|| identity.name.clone(), str::to_string),
            version: entry.new_version,
            culture: identity.culture.clone(),
            strong_name: Some(StrongName::Token(entry.new_public_key_token)),
            is_retargetable: identity.is_retargetable,
            content_type: identity.content_type,
        };
        log::debug!("retargeted {} to {}", identity, retargeted);
        Some(retargeted)
    }

    fn retargeting_entries(identity: &AssemblyIdentity) -> &'static [RetargetEntry] {
        match Self::retargeting_token(identity) {
            Some(token) => RETARGETING.entries(&identity.name, &token),
            None => &[],
        }
    }

    /// The token to look up in the retargeting table, or `None` for identities that can never
    /// appear in it.
    fn retargeting_token(identity: &AssemblyIdentity) -> Option<PublicKeyToken> {
        if identity.culture.is_some() || identity.content_type != ContentType::Default {
            return None;
        }
        identity.public_key_token()
    }
}

impl IdentityComparer for DesktopComparer {
    fn apply_unification_policies<'a>(
        &self,
        reference: &'a AssemblyIdentity,
        definition: &'a AssemblyIdentity,
        reference_is_full_name: bool,
    ) -> Result<UnifiedIdentities<'a>, NotEquivalent> {
        if reference.content_type == ContentType::Default
            && definition.content_type == ContentType::Default
            && simple_names_equal(&reference.name, "mscorlib")
            && simple_names_equal(&definition.name, "mscorlib")
        {
            log::trace!("mscorlib always unifies: {} -> {}", reference, definition);
            return Ok(UnifiedIdentities {
                reference: Cow::Borrowed(definition),
                definition: Cow::Borrowed(definition),
                is_definition_framework_assembly: true,
            });
        }

        if !reference.is_retargetable && definition.is_retargetable {
            log::trace!(
                "{} is not retargetable but {} is",
                reference,
                definition
            );
            return Err(NotEquivalent);
        }

        let mut reference = self.port(reference);
        let definition = self.port(definition);

        if reference.is_retargetable && !definition.is_retargetable {
            if !reference_is_full_name {
                log::trace!("cannot retarget partial reference {}", reference);
                return Err(NotEquivalent);
            }

            let skip = self.is_optionally_retargetable_assembly(&reference)
                && reference.name_matches(&definition)
                && reference.keys_equal(&definition);
            if skip {
                log::trace!("{} is portable and already matches its definition", reference);
            } else if let Some(retargeted) = Self::retargeted(&reference) {
                reference = Cow::Owned(retargeted);
            }
        }

        let is_definition_framework_assembly =
            if reference.is_retargetable && definition.is_retargetable {
                self.is_retargetable_assembly(&definition)
            } else {
                self.is_framework_assembly(&definition)
            };

        Ok(UnifiedIdentities {
            reference,
            definition,
            is_definition_framework_assembly,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::unification::tables::NETCF_TOKEN_3;

    fn id(display_name: &str) -> AssemblyIdentity {
        AssemblyIdentity::parse(display_name).unwrap()
    }

    const MSCORLIB_4: &str =
        "mscorlib, Version=4.0.0.0, Culture=neutral, PublicKeyToken=b77a5c561934e089";
    const SYSTEM_4: &str =
        "System, Version=4.0.0.0, Culture=neutral, PublicKeyToken=b77a5c561934e089";

    #[test]
    fn test_mscorlib_short_circuit() {
        let comparer = DesktopComparer::default();
        let reference =
            id("mscorlib, Version=2.0.0.0, Culture=neutral, PublicKeyToken=0000000000000001");
        let definition = id(MSCORLIB_4);

        let unified = comparer
            .apply_unification_policies(&reference, &definition, true)
            .unwrap();
        assert!(unified.is_definition_framework_assembly);
        assert!(matches!(unified.reference, Cow::Borrowed(r) if ptr::eq(r, &definition)));

        let comparison = comparer.compare(&reference, &definition, false);
        assert_eq!(comparison.result, ComparisonResult::Equivalent);
        assert!(!comparison.unification_applied);
    }

    #[test]
    fn test_mscorlib_requires_default_content_type() {
        let comparer = DesktopComparer::default();
        let reference = id(MSCORLIB_4).with_content_type(ContentType::WindowsRuntime);
        let definition = id(MSCORLIB_4).with_content_type(ContentType::WindowsRuntime);
        let unified = comparer
            .apply_unification_policies(&reference, &definition, true)
            .unwrap();
        assert!(!unified.is_definition_framework_assembly);
    }

    #[test]
    fn test_retargetable_definition_rejects_fixed_reference() {
        let comparer = DesktopComparer::default();
        let reference = id(SYSTEM_4);
        let definition = id(SYSTEM_4).with_retargetable(true);
        assert_eq!(
            comparer
                .apply_unification_policies(&reference, &definition, true)
                .unwrap_err(),
            NotEquivalent
        );
        assert_eq!(
            comparer.compare(&reference, &definition, true).result,
            ComparisonResult::NotEquivalent
        );
    }

    #[test]
    fn test_port_silverlight_platform() {
        let comparer = DesktopComparer::default();
        let system =
            id("System, Version=3.0.0.0, Culture=neutral, PublicKeyToken=7cec85d7bea7798e");
        let ported = comparer.port(&system);
        assert!(matches!(ported, Cow::Owned(_)));
        assert_eq!(ported.public_key_token(), Some(ECMA_TOKEN));
        assert_eq!(ported.version, FX_VERSION);
        assert!(!ported.has_public_key());

        let other =
            id("System.Xml, Version=3.0.0.0, Culture=neutral, PublicKeyToken=7cec85d7bea7798e");
        assert!(matches!(comparer.port(&other), Cow::Borrowed(_)));

        let suppressed = DesktopComparer::with_policy(PortabilityPolicy::new(true, false));
        assert!(matches!(suppressed.port(&system), Cow::Borrowed(_)));
    }

    #[test]
    fn test_port_silverlight_library() {
        let comparer = DesktopComparer::default();
        let vb = id(
            "Microsoft.VisualBasic, Version=2.0.5.0, Culture=neutral, PublicKeyToken=31bf3856ad364e35",
        );
        let ported = comparer.port(&vb);
        assert_eq!(ported.public_key_token(), Some(MICROSOFT_TOKEN));
        assert_eq!(ported.version, VS_VERSION);

        let mef = id(
            "System.ComponentModel.Composition, Version=2.0.5.0, Culture=neutral, PublicKeyToken=31bf3856ad364e35",
        );
        assert_eq!(comparer.port(&mef).public_key_token(), Some(ECMA_TOKEN));

        let suppressed = DesktopComparer::with_policy(PortabilityPolicy::new(false, true));
        assert!(matches!(suppressed.port(&vb), Cow::Borrowed(_)));
        assert!(matches!(suppressed.port(&mef), Cow::Borrowed(_)));
    }

    #[test]
    fn test_port_eligibility() {
        let comparer = DesktopComparer::default();
        for display_name in [
            "System, Version=1.9.0.0, Culture=neutral, PublicKeyToken=7cec85d7bea7798e",
            "System, Version=5.9.0.1, Culture=neutral, PublicKeyToken=7cec85d7bea7798e",
            "System, Version=3.0.0.0, Culture=neutral, PublicKeyToken=7cec85d7bea7798e, Retargetable=Yes",
            "System, Version=3.0.0.0, Culture=neutral, PublicKeyToken=null",
        ] {
            assert!(
                matches!(comparer.port(&id(display_name)), Cow::Borrowed(_)),
                "{display_name}"
            );
        }

        let edge =
            id("System, Version=5.9.0.0, Culture=neutral, PublicKeyToken=7cec85d7bea7798e");
        assert!(matches!(comparer.port(&edge), Cow::Owned(_)));
        let winmd = id("System, Version=3.0.0.0, Culture=neutral, PublicKeyToken=7cec85d7bea7798e")
            .with_content_type(ContentType::WindowsRuntime);
        assert!(matches!(comparer.port(&winmd), Cow::Borrowed(_)));
    }

    #[test]
    fn test_port_preserves_culture() {
        let comparer = DesktopComparer::default();
        let reference =
            id("System.Core, Version=3.0.0.0, Culture=de-DE, PublicKeyToken=7cec85d7bea7798e");
        let ported = comparer.port(&reference);
        assert_eq!(ported.culture.as_deref(), Some("de-DE"));
        assert_eq!(ported.name, "System.Core");
    }

    #[test]
    fn test_retarget_compact_framework_range() {
        let comparer = DesktopComparer::default();
        let reference = id(
            "System, Version=2.0.5.0, Culture=neutral, PublicKeyToken=969db8053d3322ac, Retargetable=Yes",
        );
        let retargeted = comparer.retarget(&reference);
        assert_eq!(retargeted.name, "System");
        assert_eq!(retargeted.public_key_token(), Some(ECMA_TOKEN));
        assert_eq!(retargeted.version, FX_VERSION);
        assert!(retargeted.is_retargetable);

        let outside = id(
            "System, Version=2.0.20.0, Culture=neutral, PublicKeyToken=969db8053d3322ac, Retargetable=Yes",
        );
        assert!(matches!(comparer.retarget(&outside), Cow::Borrowed(_)));
    }

    #[test]
    fn test_retarget_renames() {
        let comparer = DesktopComparer::default();
        let reference = id(
            "System.Data.SqlClient, Version=1.0.5000.0, Culture=neutral, PublicKeyToken=5fd57c543a9c0247, Retargetable=Yes",
        );
        let retargeted = comparer.retarget(&reference);
        assert_eq!(retargeted.name, "System.Data");
        assert_eq!(retargeted.public_key_token(), Some(ECMA_TOKEN));
    }

    #[test]
    fn test_retarget_trivially_non_retargetable() {
        let comparer = DesktopComparer::default();
        let with_culture = id(
            "System, Version=2.0.5.0, Culture=en-US, PublicKeyToken=969db8053d3322ac, Retargetable=Yes",
        );
        assert!(matches!(comparer.retarget(&with_culture), Cow::Borrowed(_)));
        assert!(!comparer.is_retargetable_assembly(&with_culture));

        let weak = id("System, Version=2.0.5.0, Culture=neutral, PublicKeyToken=null, Retargetable=Yes");
        assert!(matches!(comparer.retarget(&weak), Cow::Borrowed(_)));
    }

    #[test]
    fn test_framework_ceiling() {
        let comparer = DesktopComparer::default();
        assert!(comparer.is_framework_assembly(&id(MSCORLIB_4)));
        assert!(!comparer.is_framework_assembly(&id(
            "mscorlib, Version=5.1.0.0, Culture=neutral, PublicKeyToken=b77a5c561934e089"
        )));
        assert!(comparer.is_framework_assembly(&id(
            "mscorlib, Version=4.0.99.99, Culture=neutral, PublicKeyToken=b77a5c561934e089"
        )));
        assert!(!comparer.is_framework_assembly(&id(
            "mscorlib, Version=4.0.0.0, Culture=neutral, PublicKeyToken=b03f5f7f11d50a3a"
        )));
        assert!(!comparer.is_framework_assembly(&id(
            "MyLibrary, Version=1.0.0.0, Culture=neutral, PublicKeyToken=b77a5c561934e089"
        )));
        assert!(!comparer
            .is_framework_assembly(&id(MSCORLIB_4).with_content_type(ContentType::WindowsRuntime)));
    }

    #[test]
    fn test_retargetable_classification() {
        let comparer = DesktopComparer::default();
        let netcf = id("System, Version=9.9.9.9, Culture=neutral, PublicKeyToken=969db8053d3322ac");
        assert!(comparer.is_retargetable_assembly(&netcf));
        assert!(!comparer.is_optionally_retargetable_assembly(&netcf.clone().with_retargetable(true)));

        let silverlight =
            id("System, Version=9.9.9.9, Culture=neutral, PublicKeyToken=7cec85d7bea7798e");
        assert!(comparer.is_retargetable_assembly(&silverlight));
        assert!(!comparer.is_optionally_retargetable_assembly(&silverlight));
        assert!(comparer.is_optionally_retargetable_assembly(&silverlight.with_retargetable(true)));

        assert!(!comparer.is_retargetable_assembly(&id(SYSTEM_4)));
    }

    #[test]
    fn test_retargetable_pair_classifies_by_retargeting_table() {
        let comparer = DesktopComparer::default();
        let reference = id(
            "System, Version=2.0.5.0, Culture=neutral, PublicKeyToken=969db8053d3322ac, Retargetable=Yes",
        );
        let definition = id(
            "System, Version=2.0.0.0, Culture=neutral, PublicKeyToken=969db8053d3322ac, Retargetable=Yes",
        );
        assert!(!comparer.is_framework_assembly(&definition));

        let unified = comparer
            .apply_unification_policies(&reference, &definition, true)
            .unwrap();
        assert!(unified.is_definition_framework_assembly);
        assert!(matches!(unified.reference, Cow::Borrowed(_)));

        let comparison = comparer.compare(&reference, &definition, false);
        assert_eq!(comparison.result, ComparisonResult::Equivalent);
        assert!(comparison.unification_applied);
    }

    #[test]
    fn test_retargetable_pair_outside_retargeting_table() {
        let comparer = DesktopComparer::default();
        let reference = id(
            "Contoso.Mobile, Version=2.0.5.0, Culture=neutral, PublicKeyToken=969db8053d3322ac, Retargetable=Yes",
        );
        let definition = id(
            "Contoso.Mobile, Version=2.0.0.0, Culture=neutral, PublicKeyToken=969db8053d3322ac, Retargetable=Yes",
        );

        let unified = comparer
            .apply_unification_policies(&reference, &definition, true)
            .unwrap();
        assert!(!unified.is_definition_framework_assembly);

        let comparison = comparer.compare(&reference, &definition, false);
        assert_eq!(comparison.result, ComparisonResult::NotEquivalent);
        assert!(!comparison.unification_applied);
        assert_eq!(
            comparer.compare(&reference, &definition, true).result,
            ComparisonResult::EquivalentIgnoringVersion
        );
    }

    #[test]
    fn test_partial_reference_is_not_retargeted() {
        let comparer = DesktopComparer::default();
        let reference = AssemblyIdentity::new(
            "System",
            AssemblyVersion::new(2, 0, 5, 0),
            None,
            Some(StrongName::Token(NETCF_TOKEN_3)),
        )
        .with_retargetable(true);
        let definition = id(SYSTEM_4);
        assert!(comparer
            .apply_unification_policies(&reference, &definition, false)
            .is_err());
        assert!(comparer
            .apply_unification_policies(&reference, &definition, true)
            .is_ok());
    }

    #[test]
    fn test_portable_reference_skips_retargeting_when_keys_match() {
        let comparer = DesktopComparer::with_policy(PortabilityPolicy::new(true, true));
        let reference = id(
            "System, Version=2.0.5.0, Culture=neutral, PublicKeyToken=7cec85d7bea7798e, Retargetable=Yes",
        );
        let definition =
            id("System, Version=2.0.5.0, Culture=neutral, PublicKeyToken=7cec85d7bea7798e");
        let unified = comparer
            .apply_unification_policies(&reference, &definition, true)
            .unwrap();
        assert!(matches!(unified.reference, Cow::Borrowed(_)));
        assert_eq!(
            comparer.compare(&reference, &definition, false).result,
            ComparisonResult::Equivalent
        );
    }

    #[test]
    fn test_compare_framework_unification() {
        let comparer = DesktopComparer::default();
        let reference =
            id("System, Version=2.0.0.0, Culture=neutral, PublicKeyToken=b77a5c561934e089");
        let definition = id(SYSTEM_4);
        let comparison = comparer.compare(&reference, &definition, false);
        assert_eq!(comparison.result, ComparisonResult::Equivalent);
        assert!(comparison.unification_applied);

        let strict = StrictComparer.compare(&reference, &definition, false);
        assert_eq!(strict.result, ComparisonResult::NotEquivalent);
        let strict = StrictComparer.compare(&reference, &definition, true);
        assert_eq!(strict.result, ComparisonResult::EquivalentIgnoringVersion);
    }

    #[test]
    fn test_compare_non_framework_versions() {
        let comparer = DesktopComparer::default();
        let reference =
            id("MyLibrary, Version=1.0.0.0, Culture=neutral, PublicKeyToken=0123456789abcdef");
        let definition =
            id("MyLibrary, Version=2.0.0.0, Culture=neutral, PublicKeyToken=0123456789abcdef");
        assert_eq!(
            comparer.compare(&reference, &definition, false).result,
            ComparisonResult::NotEquivalent
        );
        assert_eq!(
            comparer.compare(&reference, &definition, true).result,
            ComparisonResult::EquivalentIgnoringVersion
        );
    }

    #[test]
    fn test_compare_weak_names() {
        let comparer = DesktopComparer::default();
        let reference = id("MyLibrary, Version=1.0.0.0, Culture=neutral, PublicKeyToken=null");
        let definition = id("mylibrary, Version=2.0.0.0, Culture=neutral, PublicKeyToken=null");
        assert_eq!(
            comparer.compare(&reference, &definition, false).result,
            ComparisonResult::Equivalent
        );

        let strong =
            id("MyLibrary, Version=1.0.0.0, Culture=neutral, PublicKeyToken=0123456789abcdef");
        assert_eq!(
            comparer.compare(&strong, &definition, true).result,
            ComparisonResult::NotEquivalent
        );
        assert_eq!(
            comparer.compare(&definition, &strong, true).result,
            ComparisonResult::NotEquivalent
        );
    }

    #[test]
    fn test_compare_display_name() {
        let comparer = DesktopComparer::default();
        let definition = id("MyLibrary, Version=1.2.3.4, Culture=neutral, PublicKeyToken=null");
        assert!(comparer.reference_matches_definition_display_name("MyLibrary", &definition));
        assert!(comparer.reference_matches_definition_display_name("MYLIBRARY, Version=1.0", &definition));
        assert!(!comparer.reference_matches_definition_display_name("Other", &definition));
        assert!(!comparer.reference_matches_definition_display_name("MyLibrary, Culture=de-DE", &definition));
        assert!(!comparer.reference_matches_definition_display_name("", &definition));
        assert!(!comparer.reference_matches_definition_display_name(
            "MyLibrary, ContentType=WindowsRuntime",
            &definition
        ));
    }

    #[test]
    fn test_compare_display_name_partial_version_against_strong_name() {
        let comparer = DesktopComparer::default();
        let definition =
            id("MyLibrary, Version=1.0.0.0, Culture=neutral, PublicKeyToken=0123456789abcdef");
        assert_eq!(
            comparer
                .compare_display_name("MyLibrary, Version=1.0", &definition, false)
                .result,
            ComparisonResult::NotEquivalent
        );
        assert_eq!(
            comparer
                .compare_display_name("MyLibrary, PublicKeyToken=0123456789abcdef", &definition, false)
                .result,
            ComparisonResult::Equivalent
        );
        assert_eq!(
            comparer
                .compare_display_name("MyLibrary, PublicKeyToken=fedcba9876543210", &definition, false)
                .result,
            ComparisonResult::NotEquivalent
        );
    }

    #[test]
    fn test_compare_trivial_cases() {
        let comparer = DesktopComparer::default();
        let a = id(SYSTEM_4);
        assert_eq!(comparer.compare(&a, &a.clone(), false), Comparison::EQUIVALENT);
        assert_eq!(
            comparer.compare(&a, &id(MSCORLIB_4), false),
            Comparison::NOT_EQUIVALENT
        );
        assert_eq!(
            comparer.compare(
                &a,
                &a.clone().with_content_type(ContentType::WindowsRuntime),
                false
            ),
            Comparison::NOT_EQUIVALENT
        );
    }

    #[test]
    fn test_strict_comparer_leaves_identities_alone() {
        let reference = id(
            "System, Version=2.0.5.0, Culture=neutral, PublicKeyToken=969db8053d3322ac, Retargetable=Yes",
        );
        let definition = id(SYSTEM_4);
        let unified = StrictComparer
            .apply_unification_policies(&reference, &definition, true)
            .unwrap();
        assert!(matches!(unified.reference, Cow::Borrowed(_)));
        assert!(!unified.is_definition_framework_assembly);
        assert!(!StrictComparer.reference_matches_definition(&reference, &definition));
        assert!(DesktopComparer::default().reference_matches_definition(&reference, &definition));
    }

    #[test]
    fn test_comparers_are_send_and_sync() {
        fn assert_send_sync<T: Send + Sync + Copy>() {}
        assert_send_sync::<DesktopComparer>();
        assert_send_sync::<StrictComparer>();
    }
}
