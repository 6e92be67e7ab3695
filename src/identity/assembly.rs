//! Assembly identities as recorded in metadata.
//!
//! An assembly is identified by its simple name, four-part version, culture, strong name, and
//! two flags that influence binding: whether references to it may be *retargeted*, and whether
//! its content is ordinary CIL or a Windows Runtime metadata file.
//!
//! # Display Names
//!
//! Identities are written and parsed in the runtime's display name format:
//!
//! ```text
//! Name[, Version=a.b.c.d][, Culture=neutral|xx-YY][, PublicKeyToken=hex|null]
//!     [, PublicKey=hex][, Retargetable=Yes|No][, ContentType=WindowsRuntime|Default]
//! ```
//!
//! [`AssemblyIdentity::parse_display_name`] reports which of these parts were present through
//! [`AssemblyIdentityParts`]; the comparer uses that to decide whether a reference is a *full
//! name* and therefore eligible for retargeting.
//!
//! # Equality Semantics
//!
//! Two identities are equal when their simple names and cultures match case-insensitively,
//! their versions, public key tokens, retargetable flags and content types match exactly. A
//! full public key and the equivalent bare token compare equal.

use std::{fmt, fmt::Write as _, hash::Hash, str::FromStr};

use bitflags::bitflags;
use strum::{Display, EnumString};

use crate::{
    identity::{AssemblyVersion, PublicKeyToken, StrongName},
    Error, Result,
};

/// The kind of content stored in an assembly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Display, EnumString)]
#[strum(ascii_case_insensitive)]
pub enum ContentType {
    /// Ordinary CIL assembly.
    #[default]
    Default,
    /// Windows Runtime metadata (`.winmd`).
    WindowsRuntime,
}

bitflags! {
    /// Parts of an identity that were explicitly present in a display name.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct AssemblyIdentityParts: u32 {
        /// Simple name
        const NAME = 0x0001;
        /// Major version component
        const VERSION_MAJOR = 0x0002;
        /// Minor version component
        const VERSION_MINOR = 0x0004;
        /// Build version component
        const VERSION_BUILD = 0x0008;
        /// Revision version component
        const VERSION_REVISION = 0x0010;
        /// All four version components
        const VERSION = Self::VERSION_MAJOR.bits()
            | Self::VERSION_MINOR.bits()
            | Self::VERSION_BUILD.bits()
            | Self::VERSION_REVISION.bits();
        /// Culture
        const CULTURE = 0x0020;
        /// Full public key
        const PUBLIC_KEY = 0x0040;
        /// Public key token
        const PUBLIC_KEY_TOKEN = 0x0080;
        /// Either form of the key
        const PUBLIC_KEY_OR_TOKEN = Self::PUBLIC_KEY.bits() | Self::PUBLIC_KEY_TOKEN.bits();
        /// Retargetable flag
        const RETARGETABILITY = 0x0100;
        /// Content type
        const CONTENT_TYPE = 0x0200;
        /// An attribute this parser does not know
        const UNKNOWN = 0x0400;
    }
}

impl AssemblyIdentityParts {
    /// Whether the parts describe a *full name*: name, all four version components, culture, and
    /// a public key or token.
    #[must_use]
    pub fn is_full_name(self) -> bool {
        let required = Self::NAME | Self::VERSION | Self::CULTURE;
        self.contains(required) && self.intersects(Self::PUBLIC_KEY_OR_TOKEN)
    }

    /// Parts carried by an identity read from metadata, which always has every component.
    #[must_use]
    pub fn full() -> Self {
        Self::NAME | Self::VERSION | Self::CULTURE | Self::PUBLIC_KEY_TOKEN
    }
}

/// Complete identity information for a .NET assembly.
///
/// Identities are values: the unification code never changes one in place, it builds a new
/// identity when porting or retargeting rewrites a reference.
///
/// # Examples
///
/// ```rust
/// use dotbind::identity::{AssemblyIdentity, AssemblyVersion};
///
/// let system = AssemblyIdentity::parse(
///     "System, Version=2.0.5.0, Culture=neutral, PublicKeyToken=7cec85d7bea7798e, Retargetable=Yes",
/// )?;
/// assert!(system.is_retargetable);
/// assert_eq!(system.version, AssemblyVersion::new(2, 0, 5, 0));
/// # Ok::<(), dotbind::Error>(())
/// ```
#[derive(Debug, Clone)]
pub struct AssemblyIdentity {
    /// Simple assembly name (e.g., "mscorlib", "System.Core").
    pub name: String,

    /// Four-part version number.
    pub version: AssemblyVersion,

    /// Culture of satellite assemblies; `None` for culture-neutral assemblies.
    pub culture: Option<String>,

    /// Full public key or public key token; `None` for weakly named assemblies.
    pub strong_name: Option<StrongName>,

    /// Whether references to this identity may be redirected by the binder.
    pub is_retargetable: bool,

    /// Kind of content stored in the assembly.
    pub content_type: ContentType,
}

impl AssemblyIdentity {
    /// Create a new assembly identity with the specified components.
    ///
    /// The identity is neither retargetable nor Windows Runtime; use
    /// [`with_retargetable`](Self::with_retargetable) and
    /// [`with_content_type`](Self::with_content_type) to change that.
    pub fn new(
        name: impl Into<String>,
        version: AssemblyVersion,
        culture: Option<String>,
        strong_name: Option<StrongName>,
    ) -> Self {
        Self {
            name: name.into(),
            version,
            culture: culture.filter(|c| !c.is_empty()),
            strong_name,
            is_retargetable: false,
            content_type: ContentType::Default,
        }
    }

    /// Create a new assembly identity, validating the name.
    ///
    /// # Errors
    /// Returns [`Error::InvalidArgument`] if the name is empty or contains a NUL character.
    pub fn try_new(
        name: impl Into<String>,
        version: AssemblyVersion,
        culture: Option<String>,
        strong_name: Option<StrongName>,
    ) -> Result<Self> {
        let name = name.into();
        if name.is_empty() {
            return Err(Error::InvalidArgument(
                "assembly name cannot be empty".to_string(),
            ));
        }
        if name.contains('\0') {
            return Err(Error::InvalidArgument(format!(
                "assembly name '{}' contains a NUL character",
                name.escape_debug()
            )));
        }
        Ok(Self::new(name, version, culture, strong_name))
    }

    /// Return this identity with the retargetable flag set to `retargetable`.
    #[must_use]
    pub fn with_retargetable(mut self, retargetable: bool) -> Self {
        self.is_retargetable = retargetable;
        self
    }

    /// Return this identity with the given content type.
    #[must_use]
    pub fn with_content_type(mut self, content_type: ContentType) -> Self {
        self.content_type = content_type;
        self
    }

    /// Parse assembly identity from display name string, discarding the part information.
    ///
    /// # Errors
    /// Returns an error if the display name cannot be parsed; see
    /// [`parse_display_name`](Self::parse_display_name).
    pub fn parse(display_name: &str) -> Result<Self> {
        Self::parse_display_name(display_name).map(|(identity, _)| identity)
    }

    /// Parse assembly identity from display name string.
    ///
    /// Attribute names are matched ignoring ASCII case and surrounding whitespace. Unknown
    /// attributes are ignored but recorded as [`AssemblyIdentityParts::UNKNOWN`]. `Culture=neutral`
    /// and `PublicKeyToken=null` are explicit statements of a neutral culture and a missing key;
    /// they count as present parts.
    ///
    /// # Returns
    ///
    /// The identity, plus the set of parts that were explicitly given.
    ///
    /// # Errors
    /// Returns [`Error::Malformed`] for an empty name, a duplicated attribute, a malformed
    /// version, invalid hex in a key or token, a token that is not 8 bytes, or an unrecognized
    /// `Retargetable`/`ContentType` value.
    pub fn parse_display_name(display_name: &str) -> Result<(Self, AssemblyIdentityParts)> {
        let mut parts_iter = display_name.split(',').map(str::trim);

        let name = parts_iter.next().unwrap_or_default();
        if name.is_empty() {
            return Err(malformed_error!("Assembly name cannot be empty"));
        }

        let mut identity = Self::new(name, AssemblyVersion::ZERO, None, None);
        let mut parts = AssemblyIdentityParts::NAME;

        for part in parts_iter {
            let Some((key, value)) = part.split_once('=') else {
                return Err(malformed_error!(
                    "Expected 'Key=Value' in display name, got '{}'",
                    part
                ));
            };
            let key = key.trim();
            let value = value.trim();

            let seen = |flag: AssemblyIdentityParts, parts: AssemblyIdentityParts| {
                if parts.intersects(flag) {
                    Err(malformed_error!("Duplicate '{}' in display name", key))
                } else {
                    Ok(())
                }
            };

            if key.eq_ignore_ascii_case("Version") {
                seen(AssemblyIdentityParts::VERSION, parts)?;
                let (version, version_parts) = parse_partial_version(value)?;
                identity.version = version;
                parts |= version_parts;
            } else if key.eq_ignore_ascii_case("Culture") {
                seen(AssemblyIdentityParts::CULTURE, parts)?;
                if !value.eq_ignore_ascii_case("neutral") && !value.is_empty() {
                    identity.culture = Some(value.to_string());
                }
                parts |= AssemblyIdentityParts::CULTURE;
            } else if key.eq_ignore_ascii_case("PublicKeyToken") {
                seen(AssemblyIdentityParts::PUBLIC_KEY_TOKEN, parts)?;
                if !value.eq_ignore_ascii_case("null") && !value.is_empty() {
                    let token = PublicKeyToken::parse(value)?;
                    match &identity.strong_name {
                        Some(existing) if existing.token() != token => {
                            return Err(malformed_error!(
                                "PublicKeyToken '{}' does not match the given PublicKey",
                                value
                            ));
                        }
                        Some(_) => {}
                        None => identity.strong_name = Some(StrongName::Token(token)),
                    }
                }
                parts |= AssemblyIdentityParts::PUBLIC_KEY_TOKEN;
            } else if key.eq_ignore_ascii_case("PublicKey") {
                seen(AssemblyIdentityParts::PUBLIC_KEY, parts)?;
                if !value.eq_ignore_ascii_case("null") && !value.is_empty() {
                    let key_bytes = hex::decode(value).map_err(|e| {
                        malformed_error!("Invalid hex in PublicKey '{}': {}", value, e)
                    })?;
                    let strong_name = StrongName::from_public_key(key_bytes);
                    if let Some(existing) = &identity.strong_name {
                        if existing.token() != strong_name.token() {
                            return Err(malformed_error!(
                                "PublicKey does not match the given PublicKeyToken {}",
                                existing.token()
                            ));
                        }
                    }
                    identity.strong_name = Some(strong_name);
                }
                parts |= AssemblyIdentityParts::PUBLIC_KEY;
            } else if key.eq_ignore_ascii_case("Retargetable") {
                seen(AssemblyIdentityParts::RETARGETABILITY, parts)?;
                identity.is_retargetable = if value.eq_ignore_ascii_case("Yes") {
                    true
                } else if value.eq_ignore_ascii_case("No") {
                    false
                } else {
                    return Err(malformed_error!("Invalid Retargetable value '{}'", value));
                };
                parts |= AssemblyIdentityParts::RETARGETABILITY;
            } else if key.eq_ignore_ascii_case("ContentType") {
                seen(AssemblyIdentityParts::CONTENT_TYPE, parts)?;
                identity.content_type = value
                    .parse::<ContentType>()
                    .map_err(|_| malformed_error!("Invalid ContentType value '{}'", value))?;
                parts |= AssemblyIdentityParts::CONTENT_TYPE;
            } else {
                parts |= AssemblyIdentityParts::UNKNOWN;
            }
        }

        Ok((identity, parts))
    }

    /// Generate display name string for this assembly identity.
    ///
    /// Version, culture and token are always written; `Retargetable` and `ContentType` only when
    /// they differ from their defaults.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use dotbind::identity::{AssemblyIdentity, AssemblyVersion};
    ///
    /// let identity = AssemblyIdentity::new("MyLibrary", AssemblyVersion::new(1, 2, 3, 4), None, None);
    /// assert_eq!(
    ///     identity.display_name(),
    ///     "MyLibrary, Version=1.2.3.4, Culture=neutral, PublicKeyToken=null"
    /// );
    /// ```
    #[must_use]
    pub fn display_name(&self) -> String {
        let mut result = String::with_capacity(self.name.len() + 80);

        result.push_str(&self.name);
        let _ = write!(result, ", Version={}", self.version);
        let _ = write!(
            result,
            ", Culture={}",
            self.culture.as_deref().unwrap_or("neutral")
        );

        result.push_str(", PublicKeyToken=");
        match &self.strong_name {
            Some(strong_name) => {
                let _ = write!(result, "{}", strong_name.token());
            }
            None => result.push_str("null"),
        }

        if self.is_retargetable {
            result.push_str(", Retargetable=Yes");
        }
        if self.content_type != ContentType::Default {
            let _ = write!(result, ", ContentType={}", self.content_type);
        }

        result
    }

    /// Whether this identity carries a full public key or a token.
    #[must_use]
    pub fn is_strong_name(&self) -> bool {
        self.strong_name.is_some()
    }

    /// Whether this identity carries the full public key rather than only its token.
    #[must_use]
    pub fn has_public_key(&self) -> bool {
        self.strong_name
            .as_ref()
            .is_some_and(StrongName::has_public_key)
    }

    /// The public key token, derived from the full key if necessary.
    #[must_use]
    pub fn public_key_token(&self) -> Option<PublicKeyToken> {
        self.strong_name.as_ref().map(StrongName::token)
    }

    /// Whether this identity is culture-neutral.
    #[must_use]
    pub fn is_culture_neutral(&self) -> bool {
        self.culture.is_none()
    }

    /// Whether the keys of two identities match.
    ///
    /// Full public keys are compared directly when both sides carry one; otherwise tokens are
    /// compared. Two weakly named identities have equal (absent) keys.
    #[must_use]
    pub fn keys_equal(&self, other: &AssemblyIdentity) -> bool {
        match (&self.strong_name, &other.strong_name) {
            (
                Some(StrongName::PublicKey { key: a, .. }),
                Some(StrongName::PublicKey { key: b, .. }),
            ) => a == b,
            (Some(a), Some(b)) => a.token() == b.token(),
            (None, None) => true,
            _ => false,
        }
    }

    /// Whether the simple names of two identities match ignoring case.
    #[must_use]
    pub fn name_matches(&self, other: &AssemblyIdentity) -> bool {
        simple_names_equal(&self.name, &other.name)
    }

    /// Whether the cultures of two identities match ignoring case.
    #[must_use]
    pub fn culture_matches(&self, other: &AssemblyIdentity) -> bool {
        match (&self.culture, &other.culture) {
            (Some(a), Some(b)) => simple_names_equal(a, b),
            (None, None) => true,
            _ => false,
        }
    }
}

/// Compare two simple names ignoring case.
///
/// Names are compared character by character. A character whose upper-case form is more than one
/// character (`ß`) only matches itself, so names never change length when folded.
#[must_use]
pub fn simple_names_equal(a: &str, b: &str) -> bool {
    if a.is_ascii() && b.is_ascii() {
        return a.eq_ignore_ascii_case(b);
    }
    a.chars().map(fold_char).eq(b.chars().map(fold_char))
}

/// Case-folded form of a simple name, suitable as a map key.
#[must_use]
pub fn simple_name_key(name: &str) -> String {
    if name.is_ascii() {
        name.to_ascii_uppercase()
    } else {
        name.chars().map(fold_char).collect()
    }
}

fn fold_char(c: char) -> char {
    let mut upper = c.to_uppercase();
    match (upper.next(), upper.next()) {
        (Some(single), None) => single,
        _ => c,
    }
}

/// Parse a possibly partial version, reporting which components were present.
///
/// A `*` component stands for "unspecified" and ends the version.
fn parse_partial_version(value: &str) -> Result<(AssemblyVersion, AssemblyIdentityParts)> {
    const FLAGS: [AssemblyIdentityParts; 4] = [
        AssemblyIdentityParts::VERSION_MAJOR,
        AssemblyIdentityParts::VERSION_MINOR,
        AssemblyIdentityParts::VERSION_BUILD,
        AssemblyIdentityParts::VERSION_REVISION,
    ];

    let components: Vec<&str> = value.split('.').map(str::trim).collect();
    if value.trim().is_empty() || components.len() > 4 {
        return Err(malformed_error!("Invalid version format: {}", value));
    }

    let mut numbers = [0u16; 4];
    let mut parts = AssemblyIdentityParts::empty();
    let mut wildcard = false;
    for (i, component) in components.iter().enumerate() {
        if *component == "*" {
            wildcard = true;
            continue;
        }
        if wildcard {
            return Err(malformed_error!(
                "Version component after wildcard in '{}'",
                value
            ));
        }
        numbers[i] = component
            .parse::<u16>()
            .map_err(|_| malformed_error!("Invalid version component: {}", component))?;
        parts |= FLAGS[i];
    }

    Ok((
        AssemblyVersion::new(numbers[0], numbers[1], numbers[2], numbers[3]),
        parts,
    ))
}

impl PartialEq for AssemblyIdentity {
    fn eq(&self, other: &Self) -> bool {
        self.version == other.version
            && self.is_retargetable == other.is_retargetable
            && self.content_type == other.content_type
            && self.public_key_token() == other.public_key_token()
            && self.name_matches(other)
            && self.culture_matches(other)
    }
}

impl Eq for AssemblyIdentity {}

impl Hash for AssemblyIdentity {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        simple_name_key(&self.name).hash(state);
        self.version.hash(state);
        self.culture.as_deref().map(simple_name_key).hash(state);
        self.public_key_token().hash(state);
        self.is_retargetable.hash(state);
        self.content_type.hash(state);
    }
}

impl fmt::Display for AssemblyIdentity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

impl FromStr for AssemblyIdentity {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const MSCORLIB: &str =
        "mscorlib, Version=4.0.0.0, Culture=neutral, PublicKeyToken=b77a5c561934e089";

    #[test]
    fn test_parse_simple_name() {
        let (identity, parts) = AssemblyIdentity::parse_display_name("MyLibrary").unwrap();
        assert_eq!(identity.name, "MyLibrary");
        assert_eq!(identity.version, AssemblyVersion::ZERO);
        assert!(identity.culture.is_none());
        assert!(identity.strong_name.is_none());
        assert_eq!(parts, AssemblyIdentityParts::NAME);
        assert!(!parts.is_full_name());
    }

    #[test]
    fn test_parse_full_mscorlib() {
        let (identity, parts) = AssemblyIdentity::parse_display_name(MSCORLIB).unwrap();
        assert_eq!(identity.name, "mscorlib");
        assert_eq!(identity.version, AssemblyVersion::new(4, 0, 0, 0));
        assert!(identity.is_culture_neutral());
        assert_eq!(
            identity.public_key_token().unwrap().to_string(),
            "b77a5c561934e089"
        );
        assert!(!identity.has_public_key());
        assert!(parts.is_full_name());
    }

    #[test]
    fn test_parse_null_token_is_full_name() {
        let (identity, parts) = AssemblyIdentity::parse_display_name(
            "Lib, Version=1.0.0.0, Culture=neutral, PublicKeyToken=null",
        )
        .unwrap();
        assert!(!identity.is_strong_name());
        assert!(parts.is_full_name());
    }

    #[test]
    fn test_parse_partial_version() {
        let (identity, parts) =
            AssemblyIdentity::parse_display_name("Lib, Version=1.2").unwrap();
        assert_eq!(identity.version, AssemblyVersion::new(1, 2, 0, 0));
        assert!(parts.contains(AssemblyIdentityParts::VERSION_MAJOR));
        assert!(parts.contains(AssemblyIdentityParts::VERSION_MINOR));
        assert!(!parts.contains(AssemblyIdentityParts::VERSION_BUILD));

        let (_, parts) = AssemblyIdentity::parse_display_name("Lib, Version=1.*").unwrap();
        assert!(parts.contains(AssemblyIdentityParts::VERSION_MAJOR));
        assert!(!parts.contains(AssemblyIdentityParts::VERSION_MINOR));

        assert!(AssemblyIdentity::parse("Lib, Version=1.*.3").is_err());
    }

    #[test]
    fn test_parse_flags_and_content_type() {
        let (identity, parts) = AssemblyIdentity::parse_display_name(
            "Windows, Version=255.255.255.255, Culture=neutral, PublicKeyToken=null, ContentType=WindowsRuntime",
        )
        .unwrap();
        assert_eq!(identity.content_type, ContentType::WindowsRuntime);
        assert!(parts.contains(AssemblyIdentityParts::CONTENT_TYPE));

        let identity = AssemblyIdentity::parse("System, retargetable = yes").unwrap();
        assert!(identity.is_retargetable);
        let identity = AssemblyIdentity::parse("System, Retargetable=No").unwrap();
        assert!(!identity.is_retargetable);
    }

    #[test]
    fn test_parse_culture() {
        let identity = AssemblyIdentity::parse("Lib.resources, Culture=de-DE").unwrap();
        assert_eq!(identity.culture.as_deref(), Some("de-DE"));
        let identity = AssemblyIdentity::parse("Lib, Culture=NEUTRAL").unwrap();
        assert!(identity.is_culture_neutral());
    }

    #[test]
    fn test_parse_public_key() {
        let identity = AssemblyIdentity::parse(
            "Lib, PublicKey=00000000000000000400000000000000, PublicKeyToken=b77a5c561934e089",
        )
        .unwrap();
        assert!(identity.has_public_key());
        assert_eq!(
            identity.public_key_token().unwrap().to_string(),
            "b77a5c561934e089"
        );

        assert!(AssemblyIdentity::parse(
            "Lib, PublicKey=00000000000000000400000000000000, PublicKeyToken=0000000000000000",
        )
        .is_err());
    }

    #[test]
    fn test_parse_errors() {
        assert!(AssemblyIdentity::parse("").is_err());
        assert!(AssemblyIdentity::parse("   ").is_err());
        assert!(AssemblyIdentity::parse(", Version=1.0.0.0").is_err());
        assert!(AssemblyIdentity::parse("Lib, Version").is_err());
        assert!(AssemblyIdentity::parse("Lib, Version=1.0, Version=2.0").is_err());
        assert!(AssemblyIdentity::parse("Lib, PublicKeyToken=xyz").is_err());
        assert!(AssemblyIdentity::parse("Lib, PublicKeyToken=b77a5c56").is_err());
        assert!(AssemblyIdentity::parse("Lib, Retargetable=maybe").is_err());
        assert!(AssemblyIdentity::parse("Lib, ContentType=Native").is_err());
        assert!(AssemblyIdentity::parse("Lib, Version=1.2.99999.4").is_err());
    }

    #[test]
    fn test_parse_unknown_attribute_recorded() {
        let (identity, parts) =
            AssemblyIdentity::parse_display_name("Lib, ProcessorArchitecture=MSIL").unwrap();
        assert_eq!(identity.name, "Lib");
        assert!(parts.contains(AssemblyIdentityParts::UNKNOWN));
    }

    #[test]
    fn test_display_name_roundtrip() {
        let text = "System, Version=2.0.5.0, Culture=neutral, PublicKeyToken=7cec85d7bea7798e, Retargetable=Yes";
        let identity = AssemblyIdentity::parse(text).unwrap();
        assert_eq!(identity.display_name(), text);
        assert_eq!(identity.to_string(), text);

        let winmd = AssemblyIdentity::new("Windows", AssemblyVersion::new(255, 255, 255, 255), None, None)
            .with_content_type(ContentType::WindowsRuntime);
        assert_eq!(
            winmd.display_name(),
            "Windows, Version=255.255.255.255, Culture=neutral, PublicKeyToken=null, ContentType=WindowsRuntime"
        );
    }

    #[test]
    fn test_try_new_validation() {
        assert!(matches!(
            AssemblyIdentity::try_new("", AssemblyVersion::ZERO, None, None),
            Err(Error::InvalidArgument(_))
        ));
        assert!(matches!(
            AssemblyIdentity::try_new("a\0b", AssemblyVersion::ZERO, None, None),
            Err(Error::InvalidArgument(_))
        ));
        let identity =
            AssemblyIdentity::try_new("Lib", AssemblyVersion::ZERO, Some(String::new()), None)
                .unwrap();
        assert!(identity.is_culture_neutral());
    }

    #[test]
    fn test_equality_is_case_insensitive_on_names() {
        let a = AssemblyIdentity::parse(MSCORLIB).unwrap();
        let b = AssemblyIdentity::parse(
            "MSCORLIB, Version=4.0.0.0, Culture=Neutral, PublicKeyToken=B77A5C561934E089",
        )
        .unwrap();
        assert_eq!(a, b);

        use std::collections::HashSet;
        let set: HashSet<_> = [a.clone()].into_iter().collect();
        assert!(set.contains(&b));
    }

    #[test]
    fn test_equality_considers_flags_and_token() {
        let a = AssemblyIdentity::parse(MSCORLIB).unwrap();
        assert_ne!(a, a.clone().with_retargetable(true));
        assert_ne!(a, a.clone().with_content_type(ContentType::WindowsRuntime));

        let other_token = AssemblyIdentity::parse(
            "mscorlib, Version=4.0.0.0, Culture=neutral, PublicKeyToken=7cec85d7bea7798e",
        )
        .unwrap();
        assert_ne!(a, other_token);
    }

    #[test]
    fn test_keys_equal_between_key_and_token() {
        let with_key =
            AssemblyIdentity::parse("Lib, PublicKey=00000000000000000400000000000000").unwrap();
        let with_token = AssemblyIdentity::parse("Lib, PublicKeyToken=b77a5c561934e089").unwrap();
        let weak = AssemblyIdentity::parse("Lib").unwrap();

        assert!(with_key.keys_equal(&with_token));
        assert!(with_token.keys_equal(&with_key));
        assert!(!with_key.keys_equal(&weak));
        assert!(weak.keys_equal(&weak.clone()));
        assert_eq!(with_key, with_token);
    }

    #[test]
    fn test_simple_names_equal() {
        assert!(simple_names_equal("System.Core", "system.core"));
        assert!(!simple_names_equal("System", "System.Core"));
        assert!(simple_names_equal("Äpfel.Lib", "äPFEL.LIB"));
        assert_eq!(simple_name_key("System.Xml"), "SYSTEM.XML");
    }

    #[test]
    fn test_simple_names_do_not_expand() {
        assert!(!simple_names_equal("Straße", "STRASSE"));
        assert!(simple_names_equal("straße", "STRAßE"));
        assert_eq!(simple_name_key("Straße"), "STRAßE");
        assert_ne!(simple_name_key("Straße"), simple_name_key("Strasse"));
    }
}
