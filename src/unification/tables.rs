//! Binder policy tables.
//!
//! Two read-only tables drive unification:
//!
//! - The **framework-assembly table** maps a simple name to the public key token and version
//!   ceiling of the framework assembly with that name. References to such assemblies unify
//!   across versions.
//! - The **retargeting table** maps `(simple name, public key token)` to an ordered list of
//!   version ranges, each naming the identity a retargetable reference in that range is
//!   redirected to. Lookups return the *first* matching range in table order.
//!
//! Both tables are transcribed from the desktop binder's historical redirect data (Compact
//! Framework, SQL Mobile, Silverlight and RIA Services) and are built once on first use.

use std::{collections::HashMap, sync::LazyLock};

use crate::identity::{simple_name_key, AssemblyVersion, PublicKeyToken};

/// ECMA standard token, `b77a5c561934e089`.
pub const ECMA_TOKEN: PublicKeyToken =
    PublicKeyToken::new([0xb7, 0x7a, 0x5c, 0x56, 0x19, 0x34, 0xe0, 0x89]);
/// Microsoft token, `b03f5f7f11d50a3a`.
pub const MICROSOFT_TOKEN: PublicKeyToken =
    PublicKeyToken::new([0xb0, 0x3f, 0x5f, 0x7f, 0x11, 0xd5, 0x0a, 0x3a]);
/// Shared library token, `31bf3856ad364e35`. Also used by Silverlight library assemblies.
pub const SHARED_LIBRARY_TOKEN: PublicKeyToken =
    PublicKeyToken::new([0x31, 0xbf, 0x38, 0x56, 0xad, 0x36, 0x4e, 0x35]);
/// Silverlight library token, `31bf3856ad364e35`.
pub const SILVERLIGHT_LIBRARY_TOKEN: PublicKeyToken = SHARED_LIBRARY_TOKEN;
/// Silverlight platform token, `7cec85d7bea7798e`.
pub const SILVERLIGHT_PLATFORM_TOKEN: PublicKeyToken =
    PublicKeyToken::new([0x7c, 0xec, 0x85, 0xd7, 0xbe, 0xa7, 0x79, 0x8e]);
/// .NET Compact Framework 1.0 token, `1c9e259686f921e0`.
pub const NETCF_TOKEN_1: PublicKeyToken =
    PublicKeyToken::new([0x1c, 0x9e, 0x25, 0x96, 0x86, 0xf9, 0x21, 0xe0]);
/// .NET Compact Framework compat token, `5fd57c543a9c0247`.
pub const NETCF_TOKEN_2: PublicKeyToken =
    PublicKeyToken::new([0x5f, 0xd5, 0x7c, 0x54, 0x3a, 0x9c, 0x02, 0x47]);
/// .NET Compact Framework 2.0+ token, `969db8053d3322ac`.
pub const NETCF_TOKEN_3: PublicKeyToken =
    PublicKeyToken::new([0x96, 0x9d, 0xb8, 0x05, 0x3d, 0x33, 0x22, 0xac]);
/// SQL Server token, `89845dcd8080cc91`.
pub const SQL_TOKEN: PublicKeyToken =
    PublicKeyToken::new([0x89, 0x84, 0x5d, 0xcd, 0x80, 0x80, 0xcc, 0x91]);
/// SQL Server Mobile token, `3be235df1c8d2ad3`.
pub const SQL_MOBILE_TOKEN: PublicKeyToken =
    PublicKeyToken::new([0x3b, 0xe2, 0x35, 0xdf, 0x1c, 0x8d, 0x2a, 0xd3]);
/// WCF RIA Services token, `ddd0da4d3e678217`.
pub const RIA_SERVICES_TOKEN: PublicKeyToken =
    PublicKeyToken::new([0xdd, 0xd0, 0xda, 0x4d, 0x3e, 0x67, 0x82, 0x17]);

/// Desktop framework assembly version, 4.0.0.0.
pub const FX_VERSION: AssemblyVersion = AssemblyVersion::new(4, 0, 0, 0);
/// Visual Studio runtime assembly version, 10.0.0.0.
pub const VS_VERSION: AssemblyVersion = AssemblyVersion::new(10, 0, 0, 0);
/// Visual Studio compatibility assembly version, 8.0.0.0.
pub const VS_COMPATIBILITY_VERSION: AssemblyVersion = AssemblyVersion::new(8, 0, 0, 0);
/// SQL Server assembly version, 9.0.242.0.
pub const SQL_VERSION: AssemblyVersion = AssemblyVersion::new(9, 0, 242, 0);
/// SQL Server Compact (Orcas) assembly version, 3.5.0.0.
pub const SQL_ORCAS_VERSION: AssemblyVersion = AssemblyVersion::new(3, 5, 0, 0);
/// .NET Framework 3.5 tool assembly version, 3.5.0.0.
pub const LINQ_VERSION_2: AssemblyVersion = AssemblyVersion::new(3, 5, 0, 0);
/// Visual C++ STL/CLR assembly version, 2.0.0.0.
pub const VC_STLCLR_VERSION: AssemblyVersion = AssemblyVersion::new(2, 0, 0, 0);

/// Framework-assembly table entry: the token and version ceiling of a framework assembly.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FrameworkAssemblyEntry {
    /// Public key token the framework assembly is signed with.
    pub public_key_token: PublicKeyToken,
    /// Highest major.minor version known to be part of the framework.
    pub version: AssemblyVersion,
}

impl FrameworkAssemblyEntry {
    /// Whether `version` is at or below this entry's ceiling, comparing only major and minor.
    #[must_use]
    pub fn covers(&self, version: AssemblyVersion) -> bool {
        let major_minor = |v: AssemblyVersion| (u32::from(v.major) << 16) | u32::from(v.minor);
        major_minor(version) <= major_minor(self.version)
    }
}

/// Retargeting table entry: one version range of a `(name, token)` key and its replacement.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetargetEntry {
    /// Lowest version (inclusive) covered by the entry.
    pub version_low: AssemblyVersion,
    /// Highest version (inclusive); `None` means only `version_low` itself matches.
    pub version_high: Option<AssemblyVersion>,
    /// Replacement simple name; `None` keeps the original name.
    pub new_name: Option<&'static str>,
    /// Replacement public key token.
    pub new_public_key_token: PublicKeyToken,
    /// Replacement version.
    pub new_version: AssemblyVersion,
    /// Whether the assembly is portable, i.e. retargeting may be skipped when the definition
    /// already carries the same key.
    pub is_portable: bool,
}

impl RetargetEntry {
    /// Whether `version` falls into this entry's range.
    #[must_use]
    pub fn contains(&self, version: AssemblyVersion) -> bool {
        match self.version_high {
            None => version == self.version_low,
            Some(high) => self.version_low <= version && version <= high,
        }
    }
}

/// One row of the declarative retargeting data.
#[derive(Debug, Clone, Copy)]
pub struct RetargetRecord {
    /// Simple name of the retargetable assembly.
    pub name: &'static str,
    /// Token of the retargetable assembly.
    pub public_key_token: PublicKeyToken,
    /// Range and replacement.
    pub entry: RetargetEntry,
}

impl RetargetRecord {
    /// A record matching exactly `version`.
    #[must_use]
    pub const fn exact(
        name: &'static str,
        public_key_token: PublicKeyToken,
        version: AssemblyVersion,
        new_public_key_token: PublicKeyToken,
        new_version: AssemblyVersion,
    ) -> Self {
        Self {
            name,
            public_key_token,
            entry: RetargetEntry {
                version_low: version,
                version_high: None,
                new_name: None,
                new_public_key_token,
                new_version,
                is_portable: false,
            },
        }
    }

    /// A record matching the inclusive range `[low, high]`.
    #[must_use]
    pub const fn range(
        name: &'static str,
        public_key_token: PublicKeyToken,
        low: AssemblyVersion,
        high: AssemblyVersion,
        new_public_key_token: PublicKeyToken,
        new_version: AssemblyVersion,
    ) -> Self {
        let mut record = Self::exact(name, public_key_token, low, new_public_key_token, new_version);
        record.entry.version_high = Some(high);
        record
    }

    /// Redirect to a different simple name.
    #[must_use]
    pub const fn renamed(mut self, new_name: &'static str) -> Self {
        self.entry.new_name = Some(new_name);
        self
    }

    /// Mark the record as portable.
    #[must_use]
    pub const fn portable(mut self) -> Self {
        self.entry.is_portable = true;
        self
    }
}

/// Name (case-insensitive) → framework assembly entry.
#[derive(Debug, Default)]
pub struct FrameworkAssemblyTable {
    entries: HashMap<String, FrameworkAssemblyEntry>,
}

impl FrameworkAssemblyTable {
    /// Build a table from `(name, token, version)` rows.
    #[must_use]
    pub fn from_records(records: &[(&str, PublicKeyToken, AssemblyVersion)]) -> Self {
        let entries = records
            .iter()
            .map(|&(name, public_key_token, version)| {
                (
                    simple_name_key(name),
                    FrameworkAssemblyEntry {
                        public_key_token,
                        version,
                    },
                )
            })
            .collect();
        Self { entries }
    }

    /// Look up a framework assembly by simple name.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&FrameworkAssemblyEntry> {
        self.entries.get(&simple_name_key(name))
    }

    /// Number of framework assemblies.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the table is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
struct RetargetKey {
    name: String,
    public_key_token: PublicKeyToken,
}

/// `(name, token)` → ordered list of retargeting entries.
#[derive(Debug, Default)]
pub struct RetargetingTable {
    entries: HashMap<RetargetKey, Vec<RetargetEntry>>,
}

impl RetargetingTable {
    /// Build a table from records, keeping the record order within each key.
    #[must_use]
    pub fn from_records(records: &[RetargetRecord]) -> Self {
        let mut entries: HashMap<RetargetKey, Vec<RetargetEntry>> = HashMap::new();
        for record in records {
            entries
                .entry(RetargetKey {
                    name: simple_name_key(record.name),
                    public_key_token: record.public_key_token,
                })
                .or_default()
                .push(record.entry);
        }
        Self { entries }
    }

    /// All entries for a key, in table order.
    #[must_use]
    pub fn entries(&self, name: &str, public_key_token: &PublicKeyToken) -> &[RetargetEntry] {
        let key = RetargetKey {
            name: simple_name_key(name),
            public_key_token: *public_key_token,
        };
        self.entries.get(&key).map_or(&[], Vec::as_slice)
    }

    /// The first entry for a key whose range contains `version`.
    #[must_use]
    pub fn find(
        &self,
        name: &str,
        public_key_token: &PublicKeyToken,
        version: AssemblyVersion,
    ) -> Option<&RetargetEntry> {
        self.entries(name, public_key_token)
            .iter()
            .find(|entry| entry.contains(version))
    }

    /// Number of distinct `(name, token)` keys.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the table is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// The framework-assembly table, built on first use.
pub static FRAMEWORK_ASSEMBLIES: LazyLock<FrameworkAssemblyTable> =
    LazyLock::new(|| FrameworkAssemblyTable::from_records(FRAMEWORK_ASSEMBLY_RECORDS));

/// The retargeting table, built on first use.
pub static RETARGETING: LazyLock<RetargetingTable> =
    LazyLock::new(|| RetargetingTable::from_records(RETARGET_RECORDS));

const fn v(major: u16, minor: u16, build: u16, revision: u16) -> AssemblyVersion {
    AssemblyVersion::new(major, minor, build, revision)
}

const SILVERLIGHT_LOW: AssemblyVersion = v(2, 0, 5, 0);
const SILVERLIGHT_HIGH: AssemblyVersion = v(99, 0, 0, 0);

const NETCF_V2_LOW: AssemblyVersion = v(2, 0, 0, 0);
const NETCF_V2_HIGH: AssemblyVersion = v(2, 0, 10, 0);
const NETCF_V35_LOW: AssemblyVersion = v(3, 5, 0, 0);
const NETCF_V35_HIGH: AssemblyVersion = v(3, 9, 0, 0);

/// Framework assemblies: simple name, token, version ceiling.
#[rustfmt::skip]
pub static FRAMEWORK_ASSEMBLY_RECORDS: &[(&str, PublicKeyToken, AssemblyVersion)] = &[
    // Base class libraries
    ("Accessibility", MICROSOFT_TOKEN, FX_VERSION),
    ("cscompmgd", MICROSOFT_TOKEN, VS_VERSION),
    ("CustomMarshalers", MICROSOFT_TOKEN, FX_VERSION),
    ("IEExecRemote", MICROSOFT_TOKEN, FX_VERSION),
    ("IEHost", MICROSOFT_TOKEN, FX_VERSION),
    ("IIEHost", MICROSOFT_TOKEN, FX_VERSION),
    ("ISymWrapper", MICROSOFT_TOKEN, FX_VERSION),
    ("Microsoft.JScript", MICROSOFT_TOKEN, VS_VERSION),
    ("Microsoft.VisualBasic", MICROSOFT_TOKEN, VS_VERSION),
    ("Microsoft.VisualBasic.Compatibility", MICROSOFT_TOKEN, VS_COMPATIBILITY_VERSION),
    ("Microsoft.VisualBasic.Compatibility.Data", MICROSOFT_TOKEN, VS_COMPATIBILITY_VERSION),
    ("Microsoft.VisualBasic.Vsa", MICROSOFT_TOKEN, VS_VERSION),
    ("Microsoft.VisualC", MICROSOFT_TOKEN, VS_VERSION),
    ("Microsoft.Vsa", MICROSOFT_TOKEN, VS_VERSION),
    ("Microsoft.Vsa.Vb.CodeDOMProcessor", MICROSOFT_TOKEN, VS_VERSION),
    ("Microsoft_VsaVb", MICROSOFT_TOKEN, VS_VERSION),
    ("mscorcfg", MICROSOFT_TOKEN, FX_VERSION),
    ("mscorlib", ECMA_TOKEN, FX_VERSION),
    ("sysglobl", MICROSOFT_TOKEN, FX_VERSION),
    ("System", ECMA_TOKEN, FX_VERSION),
    ("System.Configuration", MICROSOFT_TOKEN, FX_VERSION),
    ("System.Configuration.Install", MICROSOFT_TOKEN, FX_VERSION),
    ("System.Data", ECMA_TOKEN, FX_VERSION),
    ("System.Data.OracleClient", ECMA_TOKEN, FX_VERSION),
    ("System.Data.SqlXml", ECMA_TOKEN, FX_VERSION),
    ("System.Deployment", MICROSOFT_TOKEN, FX_VERSION),
    ("System.Design", MICROSOFT_TOKEN, FX_VERSION),
    ("System.DirectoryServices", MICROSOFT_TOKEN, FX_VERSION),
    ("System.DirectoryServices.Protocols", MICROSOFT_TOKEN, FX_VERSION),
    ("System.Drawing", MICROSOFT_TOKEN, FX_VERSION),
    ("System.Drawing.Design", MICROSOFT_TOKEN, FX_VERSION),
    ("System.EnterpriseServices", MICROSOFT_TOKEN, FX_VERSION),
    ("System.Management", MICROSOFT_TOKEN, FX_VERSION),
    ("System.Messaging", MICROSOFT_TOKEN, FX_VERSION),
    ("System.Runtime.Remoting", ECMA_TOKEN, FX_VERSION),
    ("System.Runtime.Serialization.Formatters.Soap", MICROSOFT_TOKEN, FX_VERSION),
    ("System.Security", MICROSOFT_TOKEN, FX_VERSION),
    ("System.ServiceProcess", MICROSOFT_TOKEN, FX_VERSION),
    ("System.Transactions", ECMA_TOKEN, FX_VERSION),
    ("System.Web", MICROSOFT_TOKEN, FX_VERSION),
    ("System.Web.Mobile", MICROSOFT_TOKEN, FX_VERSION),
    ("System.Web.RegularExpressions", MICROSOFT_TOKEN, FX_VERSION),
    ("System.Web.Services", MICROSOFT_TOKEN, FX_VERSION),
    ("System.Windows.Forms", ECMA_TOKEN, FX_VERSION),
    ("System.Xml", ECMA_TOKEN, FX_VERSION),

    // MSBuild
    ("Microsoft.Build", MICROSOFT_TOKEN, FX_VERSION),
    ("Microsoft.Build.Conversion.v3.5", MICROSOFT_TOKEN, LINQ_VERSION_2),
    ("Microsoft.Build.Conversion.v4.0", MICROSOFT_TOKEN, FX_VERSION),
    ("Microsoft.Build.Engine", MICROSOFT_TOKEN, FX_VERSION),
    ("Microsoft.Build.Framework", MICROSOFT_TOKEN, FX_VERSION),
    ("Microsoft.Build.Tasks.v3.5", MICROSOFT_TOKEN, LINQ_VERSION_2),
    ("Microsoft.Build.Tasks.v4.0", MICROSOFT_TOKEN, FX_VERSION),
    ("Microsoft.Build.Utilities.v3.5", MICROSOFT_TOKEN, LINQ_VERSION_2),
    ("Microsoft.Build.Utilities.v4.0", MICROSOFT_TOKEN, FX_VERSION),

    // WPF
    ("PresentationBuildTasks", SHARED_LIBRARY_TOKEN, FX_VERSION),
    ("PresentationCFFRasterizer", SHARED_LIBRARY_TOKEN, FX_VERSION),
    ("PresentationCore", SHARED_LIBRARY_TOKEN, FX_VERSION),
    ("PresentationFramework", SHARED_LIBRARY_TOKEN, FX_VERSION),
    ("PresentationFramework.Aero", SHARED_LIBRARY_TOKEN, FX_VERSION),
    ("PresentationFramework.Classic", SHARED_LIBRARY_TOKEN, FX_VERSION),
    ("PresentationFramework.Luna", SHARED_LIBRARY_TOKEN, FX_VERSION),
    ("PresentationFramework.Royale", SHARED_LIBRARY_TOKEN, FX_VERSION),
    ("PresentationUI", SHARED_LIBRARY_TOKEN, FX_VERSION),
    ("ReachFramework", SHARED_LIBRARY_TOKEN, FX_VERSION),
    ("System.Printing", SHARED_LIBRARY_TOKEN, FX_VERSION),
    ("System.Speech", SHARED_LIBRARY_TOKEN, FX_VERSION),
    ("System.Windows.Presentation", ECMA_TOKEN, FX_VERSION),
    ("System.Xaml", ECMA_TOKEN, FX_VERSION),
    ("UIAutomationClient", SHARED_LIBRARY_TOKEN, FX_VERSION),
    ("UIAutomationClientsideProviders", SHARED_LIBRARY_TOKEN, FX_VERSION),
    ("UIAutomationProvider", SHARED_LIBRARY_TOKEN, FX_VERSION),
    ("UIAutomationTypes", SHARED_LIBRARY_TOKEN, FX_VERSION),
    ("WindowsBase", SHARED_LIBRARY_TOKEN, FX_VERSION),
    ("WindowsFormsIntegration", SHARED_LIBRARY_TOKEN, FX_VERSION),
    ("XamlBuildTask", SHARED_LIBRARY_TOKEN, FX_VERSION),

    // WCF
    ("Microsoft.Transactions.Bridge", MICROSOFT_TOKEN, FX_VERSION),
    ("Microsoft.Transactions.Bridge.Dtc", MICROSOFT_TOKEN, FX_VERSION),
    ("SMDiagnostics", ECMA_TOKEN, FX_VERSION),
    ("System.IdentityModel", ECMA_TOKEN, FX_VERSION),
    ("System.IdentityModel.Selectors", ECMA_TOKEN, FX_VERSION),
    ("System.IO.Log", MICROSOFT_TOKEN, FX_VERSION),
    ("System.Runtime.Serialization", ECMA_TOKEN, FX_VERSION),
    ("System.ServiceModel", ECMA_TOKEN, FX_VERSION),
    ("System.ServiceModel.Activation", SHARED_LIBRARY_TOKEN, FX_VERSION),
    ("System.ServiceModel.Activities", SHARED_LIBRARY_TOKEN, FX_VERSION),
    ("System.ServiceModel.Channels", SHARED_LIBRARY_TOKEN, FX_VERSION),
    ("System.ServiceModel.Discovery", SHARED_LIBRARY_TOKEN, FX_VERSION),
    ("System.ServiceModel.Install", SHARED_LIBRARY_TOKEN, FX_VERSION),
    ("System.ServiceModel.Routing", SHARED_LIBRARY_TOKEN, FX_VERSION),
    ("System.ServiceModel.WasHosting", SHARED_LIBRARY_TOKEN, FX_VERSION),
    ("System.ServiceModel.Web", SHARED_LIBRARY_TOKEN, FX_VERSION),

    // WF
    ("System.Activities", SHARED_LIBRARY_TOKEN, FX_VERSION),
    ("System.Activities.Core.Presentation", SHARED_LIBRARY_TOKEN, FX_VERSION),
    ("System.Activities.DurableInstancing", SHARED_LIBRARY_TOKEN, FX_VERSION),
    ("System.Activities.Presentation", SHARED_LIBRARY_TOKEN, FX_VERSION),
    ("System.Runtime.DurableInstancing", SHARED_LIBRARY_TOKEN, FX_VERSION),
    ("System.Workflow.Activities", SHARED_LIBRARY_TOKEN, FX_VERSION),
    ("System.Workflow.ComponentModel", SHARED_LIBRARY_TOKEN, FX_VERSION),
    ("System.Workflow.Runtime", SHARED_LIBRARY_TOKEN, FX_VERSION),
    ("System.WorkflowServices", SHARED_LIBRARY_TOKEN, FX_VERSION),

    // LINQ and Add-In
    ("System.AddIn", ECMA_TOKEN, FX_VERSION),
    ("System.AddIn.Contract", MICROSOFT_TOKEN, FX_VERSION),
    ("System.Core", ECMA_TOKEN, FX_VERSION),
    ("System.Data.DataSetExtensions", ECMA_TOKEN, FX_VERSION),
    ("System.Data.Linq", ECMA_TOKEN, FX_VERSION),
    ("System.DirectoryServices.AccountManagement", ECMA_TOKEN, FX_VERSION),
    ("System.Management.Instrumentation", ECMA_TOKEN, FX_VERSION),
    ("System.Net", MICROSOFT_TOKEN, FX_VERSION),
    ("System.Xml.Linq", ECMA_TOKEN, FX_VERSION),

    // Entity Framework and Data Services
    ("Microsoft.Data.Entity.Build.Tasks", MICROSOFT_TOKEN, FX_VERSION),
    ("System.Data.Entity", ECMA_TOKEN, FX_VERSION),
    ("System.Data.Entity.Design", ECMA_TOKEN, FX_VERSION),
    ("System.Data.Services", ECMA_TOKEN, FX_VERSION),
    ("System.Data.Services.Client", ECMA_TOKEN, FX_VERSION),
    ("System.Data.Services.Design", ECMA_TOKEN, FX_VERSION),
    ("System.Data.SqlServerCe", SQL_TOKEN, SQL_ORCAS_VERSION),

    // ASP.NET
    ("AspNetMMCExt", SHARED_LIBRARY_TOKEN, FX_VERSION),
    ("System.ComponentModel.DataAnnotations", SHARED_LIBRARY_TOKEN, FX_VERSION),
    ("System.Web.Abstractions", SHARED_LIBRARY_TOKEN, FX_VERSION),
    ("System.Web.ApplicationServices", SHARED_LIBRARY_TOKEN, FX_VERSION),
    ("System.Web.DataVisualization", SHARED_LIBRARY_TOKEN, FX_VERSION),
    ("System.Web.DataVisualization.Design", SHARED_LIBRARY_TOKEN, FX_VERSION),
    ("System.Web.DynamicData", SHARED_LIBRARY_TOKEN, FX_VERSION),
    ("System.Web.DynamicData.Design", SHARED_LIBRARY_TOKEN, FX_VERSION),
    ("System.Web.Entity", ECMA_TOKEN, FX_VERSION),
    ("System.Web.Entity.Design", ECMA_TOKEN, FX_VERSION),
    ("System.Web.Extensions", SHARED_LIBRARY_TOKEN, FX_VERSION),
    ("System.Web.Extensions.Design", SHARED_LIBRARY_TOKEN, FX_VERSION),
    ("System.Web.Routing", SHARED_LIBRARY_TOKEN, FX_VERSION),

    // .NET Framework 4
    ("Microsoft.CSharp", MICROSOFT_TOKEN, FX_VERSION),
    ("Microsoft.VisualC.STLCLR", MICROSOFT_TOKEN, VC_STLCLR_VERSION),
    ("System.ComponentModel.Composition", ECMA_TOKEN, FX_VERSION),
    ("System.Device", ECMA_TOKEN, FX_VERSION),
    ("System.Dynamic", MICROSOFT_TOKEN, FX_VERSION),
    ("System.Net.Http", MICROSOFT_TOKEN, FX_VERSION),
    ("System.Net.Http.WebRequest", MICROSOFT_TOKEN, FX_VERSION),
    ("System.Numerics", ECMA_TOKEN, FX_VERSION),
    ("System.Runtime.Caching", MICROSOFT_TOKEN, FX_VERSION),
    ("System.Windows.Forms.DataVisualization", SHARED_LIBRARY_TOKEN, FX_VERSION),
    ("System.Windows.Forms.DataVisualization.Design", SHARED_LIBRARY_TOKEN, FX_VERSION),
    ("System.Xaml.Hosting", SHARED_LIBRARY_TOKEN, FX_VERSION),
];

/// Retargeting data in lookup order.
#[rustfmt::skip]
pub static RETARGET_RECORDS: &[RetargetRecord] = &[
    // ECMA v1.0
    RetargetRecord::exact("mscorlib", NETCF_TOKEN_1, v(1, 0, 0, 0), ECMA_TOKEN, FX_VERSION),
    RetargetRecord::exact("System", NETCF_TOKEN_1, v(1, 0, 0, 0), ECMA_TOKEN, FX_VERSION),
    RetargetRecord::exact("System.Xml", NETCF_TOKEN_1, v(1, 0, 0, 0), ECMA_TOKEN, FX_VERSION),

    // Compact Framework compat
    RetargetRecord::exact("mscorlib", NETCF_TOKEN_2, v(1, 0, 5000, 0), ECMA_TOKEN, FX_VERSION),
    RetargetRecord::exact("System", NETCF_TOKEN_2, v(1, 0, 5000, 0), ECMA_TOKEN, FX_VERSION),
    RetargetRecord::exact("System.Drawing", NETCF_TOKEN_2, v(1, 0, 5000, 0), MICROSOFT_TOKEN, FX_VERSION),
    RetargetRecord::exact("System.Web.Services", NETCF_TOKEN_2, v(1, 0, 5000, 0), MICROSOFT_TOKEN, FX_VERSION),
    RetargetRecord::exact("System.Windows.Forms", NETCF_TOKEN_2, v(1, 0, 5000, 0), ECMA_TOKEN, FX_VERSION),
    RetargetRecord::exact("System.Xml", NETCF_TOKEN_2, v(1, 0, 5000, 0), ECMA_TOKEN, FX_VERSION),
    RetargetRecord::exact("System.Data", NETCF_TOKEN_2, v(1, 0, 5000, 0), ECMA_TOKEN, FX_VERSION),
    RetargetRecord::exact("Microsoft.VisualBasic", NETCF_TOKEN_2, v(7, 0, 5000, 0), MICROSOFT_TOKEN, VS_VERSION),

    // Compact Framework compat, renamed
    RetargetRecord::exact("System.Data.SqlClient", NETCF_TOKEN_2, v(1, 0, 5000, 0), ECMA_TOKEN, FX_VERSION).renamed("System.Data"),
    RetargetRecord::exact("System.Data.Common", NETCF_TOKEN_2, v(1, 0, 5000, 0), ECMA_TOKEN, FX_VERSION).renamed("System.Data"),
    RetargetRecord::exact("System.Windows.Forms.DataGrid", NETCF_TOKEN_2, v(1, 0, 5000, 0), ECMA_TOKEN, FX_VERSION).renamed("System.Windows.Forms"),

    // Compact Framework 2.0
    RetargetRecord::range("mscorlib", NETCF_TOKEN_3, NETCF_V2_LOW, NETCF_V2_HIGH, ECMA_TOKEN, FX_VERSION),
    RetargetRecord::range("System", NETCF_TOKEN_3, NETCF_V2_LOW, NETCF_V2_HIGH, ECMA_TOKEN, FX_VERSION),
    RetargetRecord::range("System.Xml", NETCF_TOKEN_3, NETCF_V2_LOW, NETCF_V2_HIGH, ECMA_TOKEN, FX_VERSION),
    RetargetRecord::range("System.Drawing", NETCF_TOKEN_3, NETCF_V2_LOW, NETCF_V2_HIGH, MICROSOFT_TOKEN, FX_VERSION),
    RetargetRecord::range("System.Web.Services", NETCF_TOKEN_3, NETCF_V2_LOW, NETCF_V2_HIGH, MICROSOFT_TOKEN, FX_VERSION),
    RetargetRecord::range("System.Windows.Forms", NETCF_TOKEN_3, NETCF_V2_LOW, NETCF_V2_HIGH, ECMA_TOKEN, FX_VERSION),
    RetargetRecord::range("System.Data", NETCF_TOKEN_3, NETCF_V2_LOW, NETCF_V2_HIGH, ECMA_TOKEN, FX_VERSION),
    RetargetRecord::range("System.Messaging", NETCF_TOKEN_3, NETCF_V2_LOW, NETCF_V2_HIGH, MICROSOFT_TOKEN, FX_VERSION),
    RetargetRecord::range("Microsoft.VisualBasic", NETCF_TOKEN_3, v(8, 0, 0, 0), v(8, 0, 10, 0), MICROSOFT_TOKEN, VS_VERSION),

    // Compact Framework 2.0, renamed
    RetargetRecord::range("System.Data.SqlClient", NETCF_TOKEN_3, NETCF_V2_LOW, NETCF_V2_HIGH, ECMA_TOKEN, FX_VERSION).renamed("System.Data"),
    RetargetRecord::range("System.Data.Common", NETCF_TOKEN_3, NETCF_V2_LOW, NETCF_V2_HIGH, ECMA_TOKEN, FX_VERSION).renamed("System.Data"),
    RetargetRecord::range("System.Windows.Forms.DataGrid", NETCF_TOKEN_3, NETCF_V2_LOW, NETCF_V2_HIGH, ECMA_TOKEN, FX_VERSION).renamed("System.Windows.Forms"),
    RetargetRecord::range("Microsoft.WindowsCE.Forms", NETCF_TOKEN_3, NETCF_V2_LOW, NETCF_V2_HIGH, ECMA_TOKEN, FX_VERSION).renamed("System.Windows.Forms"),

    // Compact Framework 3.5
    RetargetRecord::range("mscorlib", NETCF_TOKEN_3, NETCF_V35_LOW, NETCF_V35_HIGH, ECMA_TOKEN, FX_VERSION),
    RetargetRecord::range("System", NETCF_TOKEN_3, NETCF_V35_LOW, NETCF_V35_HIGH, ECMA_TOKEN, FX_VERSION),
    RetargetRecord::range("System.Xml", NETCF_TOKEN_3, NETCF_V35_LOW, NETCF_V35_HIGH, ECMA_TOKEN, FX_VERSION),
    RetargetRecord::range("System.Drawing", NETCF_TOKEN_3, NETCF_V35_LOW, NETCF_V35_HIGH, MICROSOFT_TOKEN, FX_VERSION),
    RetargetRecord::range("System.Web.Services", NETCF_TOKEN_3, NETCF_V35_LOW, NETCF_V35_HIGH, MICROSOFT_TOKEN, FX_VERSION),
    RetargetRecord::range("System.Windows.Forms", NETCF_TOKEN_3, NETCF_V35_LOW, NETCF_V35_HIGH, ECMA_TOKEN, FX_VERSION),
    RetargetRecord::range("System.Data", NETCF_TOKEN_3, NETCF_V35_LOW, NETCF_V35_HIGH, ECMA_TOKEN, FX_VERSION),
    RetargetRecord::range("System.Messaging", NETCF_TOKEN_3, NETCF_V35_LOW, NETCF_V35_HIGH, MICROSOFT_TOKEN, FX_VERSION),
    RetargetRecord::range("System.Core", NETCF_TOKEN_3, NETCF_V35_LOW, NETCF_V35_HIGH, ECMA_TOKEN, FX_VERSION),
    RetargetRecord::range("System.Xml.Linq", NETCF_TOKEN_3, NETCF_V35_LOW, NETCF_V35_HIGH, ECMA_TOKEN, FX_VERSION),
    RetargetRecord::range("System.Data.DataSetExtensions", NETCF_TOKEN_3, NETCF_V35_LOW, NETCF_V35_HIGH, ECMA_TOKEN, FX_VERSION),
    RetargetRecord::range("System.Runtime.Serialization", NETCF_TOKEN_3, NETCF_V35_LOW, NETCF_V35_HIGH, ECMA_TOKEN, FX_VERSION),
    RetargetRecord::range("System.ServiceModel", NETCF_TOKEN_3, NETCF_V35_LOW, NETCF_V35_HIGH, ECMA_TOKEN, FX_VERSION),
    RetargetRecord::range("Microsoft.VisualBasic", NETCF_TOKEN_3, v(8, 1, 0, 0), v(8, 1, 10, 0), MICROSOFT_TOKEN, VS_VERSION),

    // Compact Framework 3.5, renamed
    RetargetRecord::range("System.Data.SqlClient", NETCF_TOKEN_3, NETCF_V35_LOW, NETCF_V35_HIGH, ECMA_TOKEN, FX_VERSION).renamed("System.Data"),
    RetargetRecord::range("System.Data.Common", NETCF_TOKEN_3, NETCF_V35_LOW, NETCF_V35_HIGH, ECMA_TOKEN, FX_VERSION).renamed("System.Data"),
    RetargetRecord::range("System.Windows.Forms.DataGrid", NETCF_TOKEN_3, NETCF_V35_LOW, NETCF_V35_HIGH, ECMA_TOKEN, FX_VERSION).renamed("System.Windows.Forms"),
    RetargetRecord::range("Microsoft.WindowsCE.Forms", NETCF_TOKEN_3, NETCF_V35_LOW, NETCF_V35_HIGH, ECMA_TOKEN, FX_VERSION).renamed("System.Windows.Forms"),

    // SQL Server Mobile / Compact
    RetargetRecord::exact("System.Data.SqlClient", SQL_MOBILE_TOKEN, v(3, 0, 3600, 0), ECMA_TOKEN, FX_VERSION).renamed("System.Data"),
    RetargetRecord::exact("System.Data.SqlServerCe", SQL_MOBILE_TOKEN, v(3, 0, 3600, 0), SQL_TOKEN, SQL_VERSION),
    RetargetRecord::range("System.Data.SqlServerCe", SQL_MOBILE_TOKEN, v(3, 5, 0, 0), v(3, 5, 200, 999), SQL_TOKEN, SQL_ORCAS_VERSION),

    // Silverlight platform
    RetargetRecord::range("mscorlib", SILVERLIGHT_PLATFORM_TOKEN, SILVERLIGHT_LOW, SILVERLIGHT_HIGH, ECMA_TOKEN, FX_VERSION).portable(),
    RetargetRecord::range("System", SILVERLIGHT_PLATFORM_TOKEN, SILVERLIGHT_LOW, SILVERLIGHT_HIGH, ECMA_TOKEN, FX_VERSION).portable(),
    RetargetRecord::range("System.Core", SILVERLIGHT_PLATFORM_TOKEN, SILVERLIGHT_LOW, SILVERLIGHT_HIGH, ECMA_TOKEN, FX_VERSION).portable(),
    RetargetRecord::range("System.Xml", SILVERLIGHT_PLATFORM_TOKEN, SILVERLIGHT_LOW, SILVERLIGHT_HIGH, ECMA_TOKEN, FX_VERSION).portable(),
    RetargetRecord::range("System.Runtime.Serialization", SILVERLIGHT_PLATFORM_TOKEN, SILVERLIGHT_LOW, SILVERLIGHT_HIGH, ECMA_TOKEN, FX_VERSION).portable(),
    RetargetRecord::range("System.Numerics", SILVERLIGHT_PLATFORM_TOKEN, SILVERLIGHT_LOW, SILVERLIGHT_HIGH, ECMA_TOKEN, FX_VERSION).portable(),
    RetargetRecord::range("System.Net", SILVERLIGHT_PLATFORM_TOKEN, SILVERLIGHT_LOW, v(5, 0, 5, 0), ECMA_TOKEN, FX_VERSION).renamed("System"),
    RetargetRecord::range("System.Windows", SILVERLIGHT_PLATFORM_TOKEN, SILVERLIGHT_LOW, SILVERLIGHT_HIGH, SHARED_LIBRARY_TOKEN, FX_VERSION).renamed("WindowsBase"),

    // Silverlight libraries
    RetargetRecord::range("Microsoft.CSharp", SILVERLIGHT_LIBRARY_TOKEN, SILVERLIGHT_LOW, SILVERLIGHT_HIGH, MICROSOFT_TOKEN, FX_VERSION).portable(),
    RetargetRecord::range("Microsoft.VisualBasic", SILVERLIGHT_LIBRARY_TOKEN, SILVERLIGHT_LOW, SILVERLIGHT_HIGH, MICROSOFT_TOKEN, VS_VERSION).portable(),
    RetargetRecord::range("System.ComponentModel.Composition", SILVERLIGHT_LIBRARY_TOKEN, SILVERLIGHT_LOW, SILVERLIGHT_HIGH, ECMA_TOKEN, FX_VERSION).portable(),
    RetargetRecord::range("System.ComponentModel.DataAnnotations", SILVERLIGHT_LIBRARY_TOKEN, SILVERLIGHT_LOW, SILVERLIGHT_HIGH, SHARED_LIBRARY_TOKEN, FX_VERSION).portable(),
    RetargetRecord::range("System.Data.Services.Client", SILVERLIGHT_LIBRARY_TOKEN, SILVERLIGHT_LOW, SILVERLIGHT_HIGH, ECMA_TOKEN, FX_VERSION).portable(),
    RetargetRecord::range("System.ServiceModel", SILVERLIGHT_LIBRARY_TOKEN, SILVERLIGHT_LOW, SILVERLIGHT_HIGH, ECMA_TOKEN, FX_VERSION).portable(),
    RetargetRecord::range("System.ServiceModel.Web", SILVERLIGHT_LIBRARY_TOKEN, SILVERLIGHT_LOW, SILVERLIGHT_HIGH, SHARED_LIBRARY_TOKEN, FX_VERSION).portable(),
    RetargetRecord::range("System.Xml.Linq", SILVERLIGHT_LIBRARY_TOKEN, SILVERLIGHT_LOW, SILVERLIGHT_HIGH, ECMA_TOKEN, FX_VERSION).portable(),
    RetargetRecord::range("System.Xml.Serialization", SILVERLIGHT_LIBRARY_TOKEN, SILVERLIGHT_LOW, SILVERLIGHT_HIGH, ECMA_TOKEN, FX_VERSION).renamed("System.Xml").portable(),

    // WCF RIA Services
    RetargetRecord::range("System.ComponentModel.DataAnnotations", RIA_SERVICES_TOKEN, SILVERLIGHT_LOW, SILVERLIGHT_HIGH, SHARED_LIBRARY_TOKEN, FX_VERSION),
    RetargetRecord::range("System.Runtime.Serialization", RIA_SERVICES_TOKEN, SILVERLIGHT_LOW, SILVERLIGHT_HIGH, ECMA_TOKEN, FX_VERSION),
];
