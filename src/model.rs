use serde::Serialize;
use std::path::PathBuf;

/// Kind of a schema-derived class.
///
/// Template selection dispatches on this tag: enumerations render through the
/// enumeration template, everything else through the ordinary class template.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ClassKind {
    /// An ordinary model class with fields
    Class,
    /// An enumeration rendered as a selection
    Enumeration,
}

/// One field of a schema-derived class, already mapped to an Odoo field type
/// by the host framework.
#[derive(Debug, Clone, Serialize)]
pub struct FieldModel {
    /// Field identifier (without the schema/version prefix)
    pub name: String,
    /// Odoo field constructor name (`Char`, `Integer`, `Many2one`, ...)
    pub odoo_type: String,
    /// Display label
    pub string: String,
    /// Whether the field is required
    pub required: bool,
    /// Target model for relational fields
    pub comodel: Option<String>,
    /// Help text shown in the UI
    pub help: Option<String>,
}

/// One member of an enumeration class.
#[derive(Debug, Clone, Serialize)]
pub struct EnumMember {
    /// Member display name
    pub name: String,
    /// Stored value
    pub value: String,
}

/// A schema-derived class as produced by the host generation framework.
///
/// Read-only input to this crate: the host owns schema parsing and class-model
/// construction, this crate only renders.
#[derive(Debug, Clone, Serialize)]
pub struct ClassModel {
    /// Qualified name, unique across the whole generation run
    pub qname: String,
    /// Short name, used for alphabetical ordering inside a module
    pub name: String,
    /// Target module display name (module file stem)
    pub target_module: String,
    /// Target module path, the grouping key (e.g. `models/sale`)
    pub module_path: PathBuf,
    /// Class vs enumeration
    pub kind: ClassKind,
    /// Documentation string, if the schema carried one
    pub doc: Option<String>,
    /// Fields (empty for enumerations)
    pub fields: Vec<FieldModel>,
    /// Enumeration members (empty for ordinary classes)
    pub members: Vec<EnumMember>,
}

impl ClassModel {
    /// Whether this class renders through the enumeration template.
    pub fn is_enumeration(&self) -> bool {
        matches!(self.kind, ClassKind::Enumeration)
    }
}

/// One rendered output module.
///
/// The host framework performs the actual file write using `path` and `source`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationResult {
    /// Output file path (module path with a `.py` extension)
    pub path: PathBuf,
    /// Human-readable title, the target-module name of the first class
    pub title: String,
    /// Full rendered source text, ending in exactly one newline
    pub source: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    // templates address the model through its serialized shape; keep it stable
    #[test]
    fn test_class_model_template_context_shape() {
        let class = ClassModel {
            qname: "sale.order.state".to_string(),
            name: "OrderState".to_string(),
            target_module: "sale".to_string(),
            module_path: PathBuf::from("models/sale"),
            kind: ClassKind::Enumeration,
            doc: None,
            fields: vec![],
            members: vec![EnumMember {
                name: "Draft".to_string(),
                value: "draft".to_string(),
            }],
        };
        assert!(class.is_enumeration());
        let value = serde_json::to_value(&class).unwrap();
        assert_eq!(value["kind"], json!("enumeration"));
        assert_eq!(value["module_path"], json!("models/sale"));
        assert_eq!(value["members"][0]["value"], json!("draft"));
        assert_eq!(value["doc"], json!(null));
    }
}
