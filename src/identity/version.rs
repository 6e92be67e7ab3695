//! Four-part assembly versions.
//!
//! Assembly versions consist of four 16-bit components. The binder compares them as a single
//! packed 64-bit integer (`major<<48 | minor<<32 | build<<16 | revision`), which gives a total
//! order that agrees with lexicographic component order and makes comparison and hashing O(1).
//!
//! Metadata tables store the components as 32-bit values ([`RawVersion`]). Converting such a
//! value into an [`AssemblyVersion`] is checked: a component above 65535 is reported as
//! [`Error::VersionComponentOutOfRange`] rather than truncated or saturated.
//!
//! # Examples
//!
//! ```rust
//! use dotbind::identity::{AssemblyVersion, RawVersion};
//!
//! let v = AssemblyVersion::parse("2.0.5.0")?;
//! assert!(v < AssemblyVersion::new(4, 0, 0, 0));
//! assert_eq!(v.to_u64(), 0x0002_0000_0005_0000);
//!
//! assert!(AssemblyVersion::try_from(RawVersion::new(1, 0, 65536, 0)).is_err());
//! # Ok::<(), dotbind::Error>(())
//! ```

use std::{cmp::Ordering, fmt, hash::Hash, str::FromStr};

use crate::{Error, Result};

/// Four-part version numbering for .NET assemblies.
///
/// Components are compared most-significant first through [`AssemblyVersion::to_u64`]. Values
/// are immutable once constructed; use [`AssemblyVersion::from_components`] when the source
/// components are wider than 16 bits.
#[derive(Debug, Clone, Copy, Default)]
pub struct AssemblyVersion {
    /// Major version component.
    pub major: u16,
    /// Minor version component.
    pub minor: u16,
    /// Build version component.
    pub build: u16,
    /// Revision version component.
    pub revision: u16,
}

/// A version as stored in the `Assembly` and `AssemblyRef` metadata tables.
///
/// Each component occupies 32 bits on disk even though only 16 bits are meaningful. This is the
/// external representation [`AssemblyVersion`] converts from and to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct RawVersion {
    /// Major version component.
    pub major: u32,
    /// Minor version component.
    pub minor: u32,
    /// Build version component.
    pub build: u32,
    /// Revision version component.
    pub revision: u32,
}

impl RawVersion {
    /// Create a raw version from its four components.
    #[must_use]
    pub const fn new(major: u32, minor: u32, build: u32, revision: u32) -> Self {
        Self {
            major,
            minor,
            build,
            revision,
        }
    }
}

impl AssemblyVersion {
    /// The version 0.0.0.0.
    pub const ZERO: Self = Self::new(0, 0, 0, 0);

    /// Create a new assembly version with the specified components.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use dotbind::identity::AssemblyVersion;
    ///
    /// let version = AssemblyVersion::new(1, 2, 3, 4);
    /// assert_eq!(version.major, 1);
    /// assert_eq!(version.revision, 4);
    /// ```
    #[must_use]
    pub const fn new(major: u16, minor: u16, build: u16, revision: u16) -> Self {
        Self {
            major,
            minor,
            build,
            revision,
        }
    }

    /// Create a version from 32-bit components, checking that each fits into 16 bits.
    ///
    /// # Errors
    /// Returns [`Error::VersionComponentOutOfRange`] naming the first component that exceeds
    /// 65535.
    pub fn from_components(major: u32, minor: u32, build: u32, revision: u32) -> Result<Self> {
        Ok(Self::new(
            narrow("major", major)?,
            narrow("minor", minor)?,
            narrow("build", build)?,
            narrow("revision", revision)?,
        ))
    }

    /// Pack the version into a single integer, most significant component first.
    ///
    /// The packed value defines the ordering and hash of [`AssemblyVersion`].
    #[must_use]
    pub const fn to_u64(self) -> u64 {
        (self.major as u64) << 48
            | (self.minor as u64) << 32
            | (self.build as u64) << 16
            | self.revision as u64
    }

    /// Unpack a version previously produced by [`AssemblyVersion::to_u64`].
    #[must_use]
    pub const fn from_u64(packed: u64) -> Self {
        Self::new(
            (packed >> 48) as u16,
            (packed >> 32) as u16,
            (packed >> 16) as u16,
            packed as u16,
        )
    }

    /// Parse assembly version from string representation.
    ///
    /// Accepts one to four dot-separated components; missing trailing components default to 0.
    ///
    /// # Errors
    /// Returns [`Error::Malformed`] if the string is empty, has more than four components, or a
    /// component is not a number in the 16-bit range.
    pub fn parse(version_str: &str) -> Result<Self> {
        let parts: Vec<&str> = version_str.split('.').collect();

        if version_str.is_empty() || parts.len() > 4 {
            return Err(malformed_error!("Invalid version format: {}", version_str));
        }

        let mut components = [0u16; 4];
        for (i, part) in parts.iter().enumerate() {
            components[i] = part
                .trim()
                .parse::<u16>()
                .map_err(|_| malformed_error!("Invalid version component: {}", part))?;
        }

        Ok(Self::new(
            components[0],
            components[1],
            components[2],
            components[3],
        ))
    }
}

fn narrow(component: &'static str, value: u32) -> Result<u16> {
    u16::try_from(value).map_err(|_| Error::VersionComponentOutOfRange { component, value })
}

impl PartialEq for AssemblyVersion {
    fn eq(&self, other: &Self) -> bool {
        self.to_u64() == other.to_u64()
    }
}

impl Eq for AssemblyVersion {}

impl PartialOrd for AssemblyVersion {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for AssemblyVersion {
    fn cmp(&self, other: &Self) -> Ordering {
        self.to_u64().cmp(&other.to_u64())
    }
}

impl Hash for AssemblyVersion {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.to_u64().hash(state);
    }
}

impl TryFrom<RawVersion> for AssemblyVersion {
    type Error = Error;

    fn try_from(raw: RawVersion) -> Result<Self> {
        Self::from_components(raw.major, raw.minor, raw.build, raw.revision)
    }
}

impl From<AssemblyVersion> for RawVersion {
    fn from(version: AssemblyVersion) -> Self {
        RawVersion::new(
            u32::from(version.major),
            u32::from(version.minor),
            u32::from(version.build),
            u32::from(version.revision),
        )
    }
}

impl fmt::Display for AssemblyVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}.{}.{}.{}",
            self.major, self.minor, self.build, self.revision
        )
    }
}

impl fmt::Display for RawVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}.{}.{}.{}",
            self.major, self.minor, self.build, self.revision
        )
    }
}

impl FromStr for AssemblyVersion {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_assembly_version_new() {
        let version = AssemblyVersion::new(1, 2, 3, 4);
        assert_eq!(version.major, 1);
        assert_eq!(version.minor, 2);
        assert_eq!(version.build, 3);
        assert_eq!(version.revision, 4);
    }

    #[test]
    fn test_packing_layout() {
        let version = AssemblyVersion::new(0x1234, 0x5678, 0x9ABC, 0xDEF0);
        assert_eq!(version.to_u64(), 0x1234_5678_9ABC_DEF0);
        assert_eq!(AssemblyVersion::from_u64(version.to_u64()), version);
        assert_eq!(
            AssemblyVersion::new(u16::MAX, u16::MAX, u16::MAX, u16::MAX).to_u64(),
            u64::MAX
        );
    }

    #[test]
    fn test_ordering_agrees_with_component_order() {
        let samples = [0u16, 1, 2, 255, 256, 32767, 32768, 65534, 65535];
        let mut versions = Vec::new();
        for &a in &samples {
            for &b in &samples[..4] {
                for &c in &samples[3..6] {
                    for &d in &[0u16, 65535] {
                        versions.push(AssemblyVersion::new(a, b, c, d));
                    }
                }
            }
        }

        for x in &versions {
            for y in &versions {
                let lexicographic = (x.major, x.minor, x.build, x.revision).cmp(&(
                    y.major, y.minor, y.build, y.revision,
                ));
                assert_eq!(x.cmp(y), lexicographic, "{x} vs {y}");
                assert_eq!(x == y, x.to_u64() == y.to_u64());
            }
        }
    }

    #[test]
    fn test_ordering_component_precedence() {
        // A higher minor outranks any build/revision
        assert!(AssemblyVersion::new(2, 1, 0, 0) > AssemblyVersion::new(2, 0, 65535, 65535));
        assert!(AssemblyVersion::new(3, 0, 0, 0) > AssemblyVersion::new(2, 65535, 0, 0));
        assert!(AssemblyVersion::new(2, 0, 5, 0) < AssemblyVersion::new(2, 0, 5, 1));
    }

    #[test]
    fn test_from_components_in_range() {
        let version = AssemblyVersion::from_components(4, 0, 65535, 0).unwrap();
        assert_eq!(version, AssemblyVersion::new(4, 0, 65535, 0));
    }

    #[test]
    fn test_from_components_rejects_instead_of_truncating() {
        // 65536 would truncate to 0 and 70000 to 4464 with a plain cast
        match AssemblyVersion::from_components(4, 0, 65536, 0) {
            Err(Error::VersionComponentOutOfRange { component, value }) => {
                assert_eq!(component, "build");
                assert_eq!(value, 65536);
            }
            other => panic!("expected out of range error, got {other:?}"),
        }

        assert!(matches!(
            AssemblyVersion::from_components(70000, 0, 0, 0),
            Err(Error::VersionComponentOutOfRange {
                component: "major",
                ..
            })
        ));
        assert!(matches!(
            AssemblyVersion::from_components(0, u32::MAX, 0, 0),
            Err(Error::VersionComponentOutOfRange {
                component: "minor",
                ..
            })
        ));
        assert!(matches!(
            AssemblyVersion::from_components(0, 0, 0, 0x1_0000),
            Err(Error::VersionComponentOutOfRange {
                component: "revision",
                ..
            })
        ));
    }

    #[test]
    fn test_raw_version_roundtrip() {
        for raw in [
            RawVersion::new(0, 0, 0, 0),
            RawVersion::new(2, 0, 5, 0),
            RawVersion::new(65535, 65535, 65535, 65535),
            RawVersion::new(4, 0, 30319, 17929),
        ] {
            let version = AssemblyVersion::try_from(raw).unwrap();
            assert_eq!(RawVersion::from(version), raw);
        }
    }

    #[test]
    fn test_raw_version_out_of_range() {
        let result = AssemblyVersion::try_from(RawVersion::new(1, 2, 3, 65536));
        assert!(matches!(
            result,
            Err(Error::VersionComponentOutOfRange {
                component: "revision",
                value: 65536
            })
        ));
    }

    #[test]
    fn test_assembly_version_parse() {
        assert_eq!(
            AssemblyVersion::parse("4.0.0.0").unwrap(),
            AssemblyVersion::new(4, 0, 0, 0)
        );
        assert_eq!(
            AssemblyVersion::parse("1.2.3").unwrap(),
            AssemblyVersion::new(1, 2, 3, 0)
        );
        assert_eq!(
            AssemblyVersion::parse("1").unwrap(),
            AssemblyVersion::new(1, 0, 0, 0)
        );
        let parsed: AssemblyVersion = "2.0.5.0".parse().unwrap();
        assert_eq!(parsed, AssemblyVersion::new(2, 0, 5, 0));
    }

    #[test]
    fn test_assembly_version_parse_invalid() {
        assert!(AssemblyVersion::parse("").is_err());
        assert!(AssemblyVersion::parse("1.2.3.4.5").is_err());
        assert!(AssemblyVersion::parse("1.2.abc.4").is_err());
        assert!(AssemblyVersion::parse("1.2.99999.4").is_err());
        assert!(AssemblyVersion::parse("1..2").is_err());
    }

    #[test]
    fn test_assembly_version_display() {
        assert_eq!(AssemblyVersion::new(4, 0, 0, 0).to_string(), "4.0.0.0");
        assert_eq!(RawVersion::new(70000, 1, 2, 3).to_string(), "70000.1.2.3");
    }

    #[test]
    fn test_hash_consistent_with_eq() {
        use std::collections::HashSet;

        let mut set = HashSet::new();
        set.insert(AssemblyVersion::new(4, 0, 0, 0));
        assert!(set.contains(&AssemblyVersion::parse("4.0").unwrap()));
        assert!(!set.contains(&AssemblyVersion::new(4, 0, 0, 1)));
    }
}
