//! Assembly identities, versions and strong names.
//!
//! This module provides the value types the unification engine operates on. They mirror the
//! identity concepts defined by ECMA-335:
//! - **Section II.6.1**: Overview of assemblies - defines assembly identity components
//! - **Section II.6.2.1.3**: PublicKeyToken - defines public key token computation
//! - **Section II.22.2**: Assembly table - defines assembly metadata structure
//! - **Section II.22.5**: AssemblyRef table - defines assembly reference structure
//!
//! See: <https://ecma-international.org/publications-and-standards/standards/ecma-335/>
//!
//! # Key Components
//!
//! - [`AssemblyIdentity`] - Name, version, culture, strong name and binding flags
//! - [`AssemblyIdentityParts`] - Which parts of a display name were given explicitly
//! - [`AssemblyVersion`] - Packed, totally ordered four-part version
//! - [`RawVersion`] - The 32-bit-per-component form stored in metadata tables
//! - [`PublicKeyToken`] / [`StrongName`] - Cryptographic identity
//!
//! # Usage Examples
//!
//! ```rust
//! use dotbind::identity::{AssemblyIdentity, AssemblyVersion, PublicKeyToken};
//!
//! let mscorlib = AssemblyIdentity::parse(
//!     "mscorlib, Version=4.0.0.0, Culture=neutral, PublicKeyToken=b77a5c561934e089"
//! )?;
//! assert_eq!(mscorlib.version, AssemblyVersion::new(4, 0, 0, 0));
//! assert_eq!(
//!     mscorlib.public_key_token(),
//!     Some(PublicKeyToken::parse("b77a5c561934e089")?)
//! );
//! # Ok::<(), dotbind::Error>(())
//! ```
//!
//! # Thread Safety
//!
//! All types in this module are plain values and implement [`Send`] and [`Sync`].

pub use assembly::{
    simple_name_key, simple_names_equal, AssemblyIdentity, AssemblyIdentityParts, ContentType,
};
pub use token::{HashAlgorithm, PublicKeyToken, StrongName};
pub use version::{AssemblyVersion, RawVersion};

mod assembly;
mod token;
mod version;
