// Copyright 2025 Johann Kempter
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.
//
// SPDX-License-Identifier: Apache-2.0

#![doc(html_no_source)]
#![deny(missing_docs)]
#![deny(unsafe_code)]

//! # dotbind
//!
//! [![License](https://img.shields.io/badge/license-Apache--2.0-blue.svg)](https://www.apache.org/licenses/LICENSE-2.0)
//!
//! Assembly identity unification for .NET, in pure Rust. `dotbind` answers the question a
//! desktop runtime binder asks for every assembly reference: *is this reference satisfied by
//! that definition?* It implements the binder's version unification for framework assemblies,
//! retargeting of Compact Framework, SQL Mobile and Silverlight references, and porting of
//! portable-library identities, driven by the binder's historical policy tables.
//!
//! ## Features
//!
//! - **🔖 Assembly identities** - Display-name parsing and formatting, strong names, tokens
//! - **🔢 Packed versions** - Totally ordered four-part versions with checked conversion
//! - **🔀 Unification** - Porting, retargeting and framework classification in binder order
//! - **⚙️ Policy** - `supportPortability` switches loaded from `app.config`
//! - **🧵 Thread safe** - Immutable tables, `Copy` comparers, no locking
//!
//! ## Quick Start
//!
//! ### Using the Prelude
//!
//! ```rust
//! use dotbind::prelude::*;
//!
//! let comparer = DesktopComparer::default();
//! let reference = AssemblyIdentity::parse(
//!     "System.Core, Version=2.0.5.0, Culture=neutral, PublicKeyToken=7cec85d7bea7798e",
//! )?;
//! let definition = AssemblyIdentity::parse(
//!     "System.Core, Version=4.0.0.0, Culture=neutral, PublicKeyToken=b77a5c561934e089",
//! )?;
//!
//! let comparison = comparer.compare(&reference, &definition, false);
//! assert_eq!(comparison.result, ComparisonResult::Equivalent);
//! # Ok::<(), dotbind::Error>(())
//! ```
//!
//! ### Inspecting Individual Policies
//!
//! ```rust
//! use dotbind::prelude::*;
//!
//! let comparer = DesktopComparer::default();
//! let reference = AssemblyIdentity::parse(
//!     "System.Data.SqlClient, Version=2.0.0.0, Culture=neutral, PublicKeyToken=969db8053d3322ac, Retargetable=Yes",
//! )?;
//!
//! let retargeted = comparer.retarget(&reference);
//! assert_eq!(
//!     retargeted.display_name(),
//!     "System.Data, Version=4.0.0.0, Culture=neutral, PublicKeyToken=b77a5c561934e089, Retargetable=Yes"
//! );
//! assert!(comparer.is_framework_assembly(&retargeted));
//! # Ok::<(), dotbind::Error>(())
//! ```
//!
//! ## Architecture
//!
//! - [`prelude`] - Convenient re-exports of commonly used types and traits
//! - [`identity`] - Assembly identities, versions, public keys and tokens
//! - [`unification`] - Comparers, portability policy and the binder policy tables
//! - [`Error`] and [`Result`] - Error handling
//!
//! ## Standards Compliance
//!
//! Identity components follow **ECMA-335** (6th edition), Partition II sections 6.1 and 22.2.
//!
//! ### References
//!
//! - [ECMA-335 Standard](https://ecma-international.org/wp-content/uploads/ECMA-335_6th_edition_june_2012.pdf) - Official CLI specification
//! - [.NET Runtime](https://github.com/dotnet/runtime) - Microsoft's reference implementation
//!
//! ## Error Handling
//!
//! Comparisons never fail; a reference that does not bind is an ordinary
//! [`unification::ComparisonResult::NotEquivalent`]. Parsing and policy loading return
//! [`Result<T, Error>`](Result):
//!
//! ```rust
//! use dotbind::{identity::AssemblyIdentity, Error};
//!
//! match AssemblyIdentity::parse("System, Version=4.0.0.0.0") {
//!     Ok(identity) => println!("{identity}"),
//!     Err(Error::Malformed { message, .. }) => println!("Malformed: {}", message),
//!     Err(e) => println!("Error: {}", e),
//! }
//! ```
//!
//! ## Development and Testing
//!
//! ### Fuzzing
//!
//! ```bash
//! # Install fuzzing tools
//! cargo install cargo-fuzz
//!
//! # Run fuzzers
//! cargo +nightly fuzz run display_name --release
//! cargo +nightly fuzz run policy_xml --release
//! ```
//!
//! ### Testing
//!
//! ```bash
//! cargo test
//! cargo bench
//! ```
#[macro_use]
pub(crate) mod error;

/// Convenient re-exports of the most commonly used types and traits.
///
/// This module provides a curated selection of the most frequently used types
/// from across the dotbind library, allowing for convenient glob imports.
///
/// # Example
///
/// ```rust
/// use dotbind::prelude::*;
///
/// let identity = AssemblyIdentity::parse("MyLibrary, Version=1.0.0.0")?;
/// assert!(StrictComparer.reference_matches_definition(&identity, &identity));
/// # Ok::<(), dotbind::Error>(())
/// ```
pub mod prelude;

/// Assembly identities, versions and strong names.
///
/// # Key Types
///
/// - [`identity::AssemblyIdentity`] - Complete identity of an assembly
/// - [`identity::AssemblyVersion`] - Packed four-part version
/// - [`identity::PublicKeyToken`] - 8-byte public key token
pub mod identity;

/// Reference-to-definition unification.
///
/// # Key Types
///
/// - [`unification::IdentityComparer`] - Comparison trait
/// - [`unification::DesktopComparer`] - Desktop binder rules
/// - [`unification::PortabilityPolicy`] - `supportPortability` switches
pub mod unification;

/// `dotbind` Result type
///
/// A type alias for [`std::result::Result<T, Error>`] where the error type is always [`Error`].
/// This is used consistently throughout the crate for all fallible operations.
///
/// # Examples
///
/// ```rust
/// use dotbind::{identity::AssemblyVersion, Result};
///
/// fn parse_version(text: &str) -> Result<AssemblyVersion> {
///     AssemblyVersion::parse(text)
/// }
/// assert!(parse_version("4.0.0.0").is_ok());
/// ```
pub type Result<T> = std::result::Result<T, Error>;

/// `dotbind` Error type
///
/// The main error type for all fallible operations in this crate: display name and version
/// parsing, version conversion and policy document loading.
///
/// # Examples
///
/// ```rust
/// use dotbind::{unification::PortabilityPolicy, Error};
///
/// match PortabilityPolicy::from_xml_str("<configuration><runtime>") {
///     Ok(policy) => println!("{policy:?}"),
///     Err(Error::MalformedPolicyDocument(message)) => println!("Malformed: {}", message),
///     Err(e) => println!("Error: {}", e),
/// }
/// ```
pub use error::Error;
