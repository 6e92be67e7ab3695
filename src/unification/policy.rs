//! Portability policy and its app.config loader.
//!
//! Silverlight and portable class library assemblies are *ported* onto their desktop framework
//! counterparts unless an application configuration file opts out:
//!
//! ```xml
//! <configuration>
//!   <runtime>
//!     <assemblyBinding xmlns="urn:schemas-microsoft-com:asm.v1">
//!       <supportPortability PKT="7cec85d7bea7798e" enable="false"/>
//!       <supportPortability PKT="31bf3856ad364e35" enable="false"/>
//!     </assemblyBinding>
//!   </runtime>
//! </configuration>
//! ```
//!
//! # Loading Rules
//!
//! - Elements are located strictly by depth: `configuration` at 0, `runtime` at 1,
//!   `assemblyBinding` at 2 and `supportPortability` at 3. The first two carry no namespace,
//!   the last two live in `urn:schemas-microsoft-com:asm.v1`.
//! - A document without that shape is not an error; it yields the default policy.
//! - `enable` must be `true` or `false` (ASCII case-insensitive); other values are ignored.
//! - Unrecognized `PKT` values are ignored.
//! - The last element for a given `PKT` wins.
//! - Document type declarations are rejected.

use std::{fs::File, io::BufRead, io::BufReader, path::Path};

use quick_xml::{
    events::{BytesStart, Event},
    name::{Namespace, ResolveResult},
    reader::NsReader,
};

use crate::{
    identity::PublicKeyToken,
    unification::tables::{SILVERLIGHT_LIBRARY_TOKEN, SILVERLIGHT_PLATFORM_TOKEN},
    Error, Result,
};

/// Namespace of the `assemblyBinding` section.
pub const ASSEMBLY_BINDING_NAMESPACE: &str = "urn:schemas-microsoft-com:asm.v1";

/// Switches that disable portability mapping for Silverlight assemblies.
///
/// Both switches default to `false`, meaning portability is enabled.
///
/// # Examples
///
/// ```rust
/// use dotbind::unification::PortabilityPolicy;
///
/// let policy = PortabilityPolicy::from_xml_str(r#"
///     <configuration>
///       <runtime>
///         <assemblyBinding xmlns="urn:schemas-microsoft-com:asm.v1">
///           <supportPortability PKT="7cec85d7bea7798e" enable="false"/>
///         </assemblyBinding>
///       </runtime>
///     </configuration>"#)?;
///
/// assert!(policy.suppress_platform_portability());
/// assert!(!policy.suppress_library_portability());
/// # Ok::<(), dotbind::Error>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct PortabilityPolicy {
    suppress_platform_portability: bool,
    suppress_library_portability: bool,
}

impl PortabilityPolicy {
    /// Create a policy from explicit switches.
    #[must_use]
    pub const fn new(suppress_platform_portability: bool, suppress_library_portability: bool) -> Self {
        Self {
            suppress_platform_portability,
            suppress_library_portability,
        }
    }

    /// Whether porting of Silverlight platform assemblies (`7cec85d7bea7798e`) is disabled.
    #[must_use]
    pub const fn suppress_platform_portability(&self) -> bool {
        self.suppress_platform_portability
    }

    /// Whether porting of Silverlight library assemblies (`31bf3856ad364e35`) is disabled.
    #[must_use]
    pub const fn suppress_library_portability(&self) -> bool {
        self.suppress_library_portability
    }

    /// Load a policy from an app.config document.
    ///
    /// The document is read only as far as needed to locate the `supportPortability` elements.
    ///
    /// # Errors
    /// Returns [`Error::MalformedPolicyDocument`] if the XML read so far is not well-formed,
    /// contains a document type declaration, or ends with open elements, and
    /// [`Error::FileError`] if reading fails.
    pub fn load_from_xml<R: BufRead>(input: R) -> Result<Self> {
        let mut document = PolicyDocument::new(input);

        let Some(configuration) = document.read_to_child(None, 0, "configuration", false)? else {
            return Ok(Self::default());
        };
        let Some(runtime) = document.read_to_child(Some(&configuration), 1, "runtime", false)?
        else {
            return Ok(Self::default());
        };
        let Some(binding) =
            document.read_to_child(Some(&runtime), 2, "assemblyBinding", true)?
        else {
            return Ok(Self::default());
        };
        let Some(mut element) =
            document.read_to_child(Some(&binding), 3, "supportPortability", true)?
        else {
            return Ok(Self::default());
        };

        let mut policy = Self::default();
        loop {
            policy.apply_support_portability(&element);

            match document.read_to_next_sibling(&element, "supportPortability", true)? {
                Some(next) => element = next,
                None => break,
            }
        }

        log::debug!(
            "loaded portability policy: suppress platform = {}, suppress library = {}",
            policy.suppress_platform_portability,
            policy.suppress_library_portability
        );
        Ok(policy)
    }

    /// Load a policy from an in-memory app.config document.
    ///
    /// # Errors
    /// See [`load_from_xml`](Self::load_from_xml).
    pub fn from_xml_str(xml: &str) -> Result<Self> {
        Self::load_from_xml(xml.as_bytes())
    }

    /// Load a policy from an app.config file.
    ///
    /// # Errors
    /// Returns [`Error::FileError`] if the file cannot be opened or read, otherwise see
    /// [`load_from_xml`](Self::load_from_xml).
    pub fn from_xml_file(path: &Path) -> Result<Self> {
        let file = File::open(path)?;
        Self::load_from_xml(BufReader::new(file))
    }

    fn apply_support_portability(&mut self, element: &Element) {
        let enable = match element.enable.as_deref() {
            Some(value) if value.eq_ignore_ascii_case("true") => true,
            Some(value) if value.eq_ignore_ascii_case("false") => false,
            other => {
                log::debug!("ignoring supportPortability with enable={other:?}");
                return;
            }
        };

        let token = element
            .pkt
            .as_deref()
            .and_then(|pkt| PublicKeyToken::parse(pkt).ok());
        match token {
            Some(token) if token == SILVERLIGHT_LIBRARY_TOKEN => {
                self.suppress_library_portability = !enable;
            }
            Some(token) if token == SILVERLIGHT_PLATFORM_TOKEN => {
                self.suppress_platform_portability = !enable;
            }
            _ => log::debug!("ignoring supportPortability for PKT={:?}", element.pkt),
        }
    }
}

/// An element start as seen by the policy loader.
#[derive(Debug)]
struct Element {
    depth: usize,
    qualified_name: Vec<u8>,
    local_name: Vec<u8>,
    in_binding_namespace: bool,
    is_empty: bool,
    pkt: Option<String>,
    enable: Option<String>,
}

impl Element {
    /// Binding elements match on local name and namespace; others on the qualified name alone,
    /// whatever default namespace is in scope.
    fn matches(&self, name: &str, in_binding_namespace: bool) -> bool {
        if in_binding_namespace {
            self.in_binding_namespace && self.local_name == name.as_bytes()
        } else {
            self.qualified_name == name.as_bytes()
        }
    }
}

enum Node {
    Element(Element),
    /// Closing tag of the element at the given depth.
    End(usize),
    Eof,
}

/// Forward-only cursor over an app.config document that tracks element depth.
struct PolicyDocument<R> {
    reader: NsReader<R>,
    buf: Vec<u8>,
    depth: usize,
    seen_root: bool,
}

impl<R: BufRead> PolicyDocument<R> {
    fn new(input: R) -> Self {
        Self {
            reader: NsReader::from_reader(input),
            buf: Vec::new(),
            depth: 0,
            seen_root: false,
        }
    }

    fn next_node(&mut self) -> Result<Node> {
        loop {
            self.buf.clear();
            let (namespace, event) = self
                .reader
                .read_resolved_event_into(&mut self.buf)
                .map_err(|e| Error::MalformedPolicyDocument(e.to_string()))?;

            let (start, is_empty) = match event {
                Event::Start(start) => (start, false),
                Event::Empty(start) => (start, true),
                Event::End(_) => {
                    self.depth = self.depth.saturating_sub(1);
                    return Ok(Node::End(self.depth));
                }
                Event::DocType(_) => {
                    return Err(Error::MalformedPolicyDocument(
                        "document type declarations are prohibited".to_string(),
                    ));
                }
                Event::Eof => {
                    if !self.seen_root {
                        return Err(Error::MalformedPolicyDocument(
                            "root element is missing".to_string(),
                        ));
                    }
                    if self.depth > 0 {
                        return Err(Error::MalformedPolicyDocument(format!(
                            "unexpected end of document with {} open element(s)",
                            self.depth
                        )));
                    }
                    return Ok(Node::Eof);
                }
                _ => continue,
            };

            let element = Self::element(&namespace, &start, self.depth, is_empty)?;
            self.seen_root = true;
            if !is_empty {
                self.depth += 1;
            }
            return Ok(Node::Element(element));
        }
    }

    fn element(
        namespace: &ResolveResult<'_>,
        start: &BytesStart<'_>,
        depth: usize,
        is_empty: bool,
    ) -> Result<Element> {
        let mut pkt = None;
        let mut enable = None;
        for attribute in start.attributes() {
            let attribute =
                attribute.map_err(|e| Error::MalformedPolicyDocument(e.to_string()))?;
            let slot = match attribute.key.as_ref() {
                b"PKT" => &mut pkt,
                b"enable" => &mut enable,
                _ => continue,
            };
            let value = attribute
                .unescape_value()
                .map_err(|e| Error::MalformedPolicyDocument(e.to_string()))?;
            *slot = Some(value.into_owned());
        }

        Ok(Element {
            depth,
            qualified_name: start.name().as_ref().to_vec(),
            local_name: start.local_name().as_ref().to_vec(),
            in_binding_namespace: matches!(
                namespace,
                ResolveResult::Bound(Namespace(ns)) if *ns == ASSEMBLY_BINDING_NAMESPACE.as_bytes()
            ),
            is_empty,
            pkt,
            enable,
        })
    }

    /// Advance to the first descendant of `parent` (or of the document) named `local_name`, and
    /// accept it only if it sits at `depth`.
    fn read_to_child(
        &mut self,
        parent: Option<&Element>,
        depth: usize,
        local_name: &str,
        in_binding_namespace: bool,
    ) -> Result<Option<Element>> {
        if parent.is_some_and(|p| p.is_empty) {
            return Ok(None);
        }

        loop {
            match self.next_node()? {
                Node::Element(element) if element.matches(local_name, in_binding_namespace) => {
                    if element.depth == depth {
                        return Ok(Some(element));
                    }
                    log::debug!(
                        "policy element '{}' found at depth {} instead of {}",
                        local_name,
                        element.depth,
                        depth
                    );
                    return Ok(None);
                }
                Node::End(closed) if parent.is_some_and(|p| p.depth == closed) => return Ok(None),
                Node::Eof => return Ok(None),
                _ => {}
            }
        }
    }

    /// Advance to the next sibling of `current` named `local_name`, skipping nested elements.
    fn read_to_next_sibling(
        &mut self,
        current: &Element,
        local_name: &str,
        in_binding_namespace: bool,
    ) -> Result<Option<Element>> {
        loop {
            match self.next_node()? {
                Node::Element(element)
                    if element.depth == current.depth
                        && element.matches(local_name, in_binding_namespace) =>
                {
                    return Ok(Some(element));
                }
                Node::End(closed) if closed < current.depth => return Ok(None),
                Node::Eof => return Ok(None),
                _ => {}
            }
        }
    }
}
