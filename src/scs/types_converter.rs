//! SCg type descriptor to SCs keyword tables

use std::collections::HashMap;

use lazy_static::lazy_static;

/// Lookup of SCs keywords and connector designations for SCg types.
///
/// Both lookups may miss; the writer falls back to defaults then.
pub trait TypeConverter {
    /// Keyword for a node or bus type, e.g. `sc_node_class`
    fn node_keyword(&self, scg_type: &str) -> Option<&str>;

    /// Connector designation for a connector type, e.g. `->`
    fn connector_designation(&self, scg_type: &str) -> Option<&str>;
}

lazy_static! {
    static ref NODE_KEYWORDS: HashMap<String, &'static str> = {
        let mut m = HashMap::new();
        for constancy in ["const", "var"] {
            let prefix = format!("node/{}/perm/", constancy);
            for (suffix, keyword) in [
                ("general", "sc_node"),
                ("terminal", "sc_node_superclass"),
                ("struct", "sc_node_structure"),
                ("tuple", "sc_node_tuple"),
                ("role", "sc_node_role_relation"),
                ("relation", "sc_node_non_role_relation"),
                ("group", "sc_node_class"),
                ("material", "sc_node_material"),
            ] {
                m.insert(format!("{}{}", prefix, suffix), keyword);
            }
        }
        m.insert("node/-/not_define".to_string(), "sc_node");
        m.insert("node/const/general_node".to_string(), "sc_node");
        m.insert("node/var/general_node".to_string(), "sc_node");
        m
    };

    static ref CONNECTOR_DESIGNATIONS: HashMap<String, String> = {
        let mut m = HashMap::new();
        for (constancy, var) in [("const", ""), ("var", "_")] {
            for (suffix, designation) in [
                ("pos/perm/orient/membership", "->"),
                ("neg/perm/orient/membership", "-|"),
                ("fuz/perm/orient/membership", "-/"),
                ("pos/temp/orient/membership", "~>"),
                ("neg/temp/orient/membership", "~|"),
                ("fuz/temp/orient/membership", "~/"),
                ("-/-/orient", "=>"),
                ("-/-/noorien", "<=>"),
            ] {
                m.insert(
                    format!("pair/{}/{}", constancy, suffix),
                    format!("{}{}", var, designation),
                );
            }
        }
        m.insert("pair/-/-/-/orient".to_string(), ">".to_string());
        m.insert("pair/-/-/-/noorien".to_string(), "<>".to_string());
        m.insert("arc/-/-".to_string(), ">".to_string());
        m
    };
}

/// Built-in SCg type tables
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultTypeConverter;

impl TypeConverter for DefaultTypeConverter {
    fn node_keyword(&self, scg_type: &str) -> Option<&str> {
        NODE_KEYWORDS.get(scg_type).copied()
    }

    fn connector_designation(&self, scg_type: &str) -> Option<&str> {
        CONNECTOR_DESIGNATIONS.get(scg_type).map(String::as_str)
    }
}
