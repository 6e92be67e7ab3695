//! Assembly identity unification.
//!
//! This module decides whether an assembly reference is satisfied by a candidate definition
//! under the desktop binder's rules: version unification of framework assemblies, retargeting
//! of Compact Framework and Silverlight references, and porting of portable-library identities.
//!
//! # Key Components
//!
//! - [`IdentityComparer`] - The comparison trait, with [`StrictComparer`] and [`DesktopComparer`]
//! - [`PortabilityPolicy`] - Per-application switches that disable porting, loadable from
//!   `app.config`
//! - [`tables`] - The framework-assembly and retargeting tables plus well-known tokens
//!
//! # Usage Examples
//!
//! ```rust
//! use dotbind::prelude::*;
//!
//! let policy = PortabilityPolicy::from_xml_str(r#"
//!     <configuration>
//!       <runtime>
//!         <assemblyBinding xmlns="urn:schemas-microsoft-com:asm.v1">
//!           <supportPortability PKT="7cec85d7bea7798e" enable="false"/>
//!         </assemblyBinding>
//!       </runtime>
//!     </configuration>"#)?;
//! let comparer = DesktopComparer::with_policy(policy);
//!
//! let reference = AssemblyIdentity::parse(
//!     "System, Version=3.0.0.0, Culture=neutral, PublicKeyToken=7cec85d7bea7798e",
//! )?;
//! let definition = AssemblyIdentity::parse(
//!     "System, Version=4.0.0.0, Culture=neutral, PublicKeyToken=b77a5c561934e089",
//! )?;
//! assert!(!comparer.reference_matches_definition(&reference, &definition));
//! assert!(DesktopComparer::default().reference_matches_definition(&reference, &definition));
//! # Ok::<(), dotbind::Error>(())
//! ```
//!
//! # Thread Safety
//!
//! The tables are initialized once and never modified. Comparers hold only their
//! [`PortabilityPolicy`] and are [`Copy`], [`Send`] and [`Sync`].

pub use comparer::{
    Comparison, ComparisonResult, DesktopComparer, IdentityComparer, NotEquivalent,
    StrictComparer, UnifiedIdentities,
};
pub use policy::{PortabilityPolicy, ASSEMBLY_BINDING_NAMESPACE};

mod comparer;
mod policy;
pub mod tables;
