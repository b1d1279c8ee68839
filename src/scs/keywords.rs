//! Literal tokens of the SCs linear notation.

/// Statement terminator
pub const ELEMENT_END: &str = ";;";

/// Connector tokens
pub struct Arrows;

impl Arrows {
    /// Type declaration: `<- sc_node;;`
    pub const TYPE_OF: &'static str = "<-";
    /// Link content: `-> [text];;`
    pub const CONTENT: &'static str = "->";
    /// Fallback connector designation
    pub const DEFAULT_CONNECTOR: &'static str = "->";
    pub const RELATION_FORWARD: &'static str = "=>";
    pub const RELATION_REVERSE: &'static str = "<=";
}

/// Contour body brackets
pub struct Brackets;

impl Brackets {
    pub const CONTOUR_OPEN: &'static str = "[*";
    pub const CONTOUR_CLOSE: &'static str = "*]";
    pub const CONTENT_OPEN: &'static str = "[";
    pub const CONTENT_CLOSE: &'static str = "]";
}

/// Prefixes used when an identifier has to be made up
pub struct Prefixes;

impl Prefixes {
    pub const NODE: &'static str = "node";
    pub const CONTOUR: &'static str = "contour";
    pub const BUS: &'static str = "bus";
    pub const CONNECTOR: &'static str = "connector";
    pub const ALIAS: &'static str = "##";
    pub const VARIABLE: &'static str = "_";
}

/// Connector types starting with one of these name a relation directly
pub const RELATION_PREFIXES: [&str; 2] = ["nrel_", "rel_"];

/// Type descriptor marker of a variable element
pub const VAR_MARKER: &str = "/var/";

/// Node type keyword used when the lookup has no entry
pub const DEFAULT_NODE_TYPE: &str = "sc_node";

/// Relation linking an element to its natural-language label
pub const NREL_MAIN_IDTF: &str = "nrel_main_idtf";
