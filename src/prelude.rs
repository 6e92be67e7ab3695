//! # dotbind Prelude
//!
//! This module provides a convenient prelude for the most commonly used types and traits
//! from the dotbind library. Import this module to get quick access to the essential
//! types for assembly identity comparison.

// ================================================================================================
// Core Types and Error Handling
// ================================================================================================

/// The main error type for all dotbind operations
pub use crate::Error;

/// The result type used throughout dotbind
pub use crate::Result;

// ================================================================================================
// Identities
// ================================================================================================

/// Assembly identity, display name parts and content type
pub use crate::identity::{AssemblyIdentity, AssemblyIdentityParts, ContentType};

/// Versions in packed and metadata form
pub use crate::identity::{AssemblyVersion, RawVersion};

/// Strong names and tokens
pub use crate::identity::{HashAlgorithm, PublicKeyToken, StrongName};

// ================================================================================================
// Unification
// ================================================================================================

/// Comparison trait and its implementations
pub use crate::unification::{DesktopComparer, IdentityComparer, StrictComparer};

/// Comparison outcomes
pub use crate::unification::{Comparison, ComparisonResult, NotEquivalent, UnifiedIdentities};

/// Portability policy
pub use crate::unification::PortabilityPolicy;
