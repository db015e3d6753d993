//! Schema - Define type schemas for resources and data sources
//!
//! Providers declare one schema per resource type. The host validates
//! configuration against it, and the converters in [`crate::convert`] walk it
//! to move values between the generic tree and the backend wire format.

use std::collections::HashMap;
use std::fmt;

use heck::ToLowerCamelCase;

use crate::resource::Value;

/// Attribute type
#[derive(Debug, Clone)]
pub enum AttributeType {
    /// String
    String,
    /// Integer
    Int,
    /// Boolean
    Bool,
    /// Enum (list of allowed values)
    Enum(Vec<String>),
    /// List of primitives
    List(Box<AttributeType>),
    /// Optional nested block, encoded as a list of at most one map
    Block(Box<BlockSchema>),
    /// Repeated nested blocks
    BlockList(Box<BlockSchema>),
}

impl AttributeType {
    pub fn enumeration(variants: &[&str]) -> Self {
        AttributeType::Enum(variants.iter().map(|v| v.to_string()).collect())
    }

    pub fn list(inner: AttributeType) -> Self {
        AttributeType::List(Box::new(inner))
    }

    pub fn block(block: BlockSchema) -> Self {
        AttributeType::Block(Box::new(block))
    }

    pub fn block_list(block: BlockSchema) -> Self {
        AttributeType::BlockList(Box::new(block))
    }

    /// Nested block schema, if this is a block or block list
    pub fn nested(&self) -> Option<&BlockSchema> {
        match self {
            AttributeType::Block(block) | AttributeType::BlockList(block) => Some(block),
            _ => None,
        }
    }

    /// Check if a value conforms to this type
    ///
    /// Nested blocks are validated recursively; every problem found is pushed
    /// onto `errors`, prefixed with the dotted attribute path.
    fn validate(&self, path: &str, value: &Value, errors: &mut Vec<TypeError>) {
        match (self, value) {
            (AttributeType::String, Value::String(_))
            | (AttributeType::Int, Value::Int(_))
            | (AttributeType::Bool, Value::Bool(_)) => {}

            (AttributeType::Enum(variants), Value::String(s)) => {
                if !variants.iter().any(|v| v == s) {
                    errors.push(at_path(
                        path,
                        TypeError::InvalidEnumVariant {
                            value: s.clone(),
                            expected: variants.clone(),
                        },
                    ));
                }
            }

            (AttributeType::List(inner), Value::List(items)) => {
                for (i, item) in items.iter().enumerate() {
                    inner.validate(&format!("{}[{}]", path, i), item, errors);
                }
            }

            (AttributeType::Block(block), Value::List(items)) => {
                if items.len() > 1 {
                    errors.push(TypeError::TooManyBlocks {
                        name: path.to_string(),
                        count: items.len(),
                    });
                }
                validate_block_items(block, path, items, errors);
            }

            (AttributeType::BlockList(block), Value::List(items)) => {
                validate_block_items(block, path, items, errors);
            }

            _ => errors.push(at_path(
                path,
                TypeError::TypeMismatch {
                    expected: self.type_name(),
                    got: value.type_name().to_string(),
                },
            )),
        }
    }

    fn type_name(&self) -> String {
        match self {
            AttributeType::String => "String".to_string(),
            AttributeType::Int => "Int".to_string(),
            AttributeType::Bool => "Bool".to_string(),
            AttributeType::Enum(variants) => format!("Enum({})", variants.join(" | ")),
            AttributeType::List(inner) => format!("List<{}>", inner.type_name()),
            AttributeType::Block(_) => "Block".to_string(),
            AttributeType::BlockList(_) => "List<Block>".to_string(),
        }
    }
}

impl fmt::Display for AttributeType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.type_name())
    }
}

fn validate_block_items(
    block: &BlockSchema,
    path: &str,
    items: &[Value],
    errors: &mut Vec<TypeError>,
) {
    for (i, item) in items.iter().enumerate() {
        let item_path = format!("{}[{}]", path, i);
        match item {
            Value::Map(attrs) => block.validate_at(&item_path, attrs, errors),
            other => errors.push(at_path(
                &item_path,
                TypeError::TypeMismatch {
                    expected: "Map".to_string(),
                    got: other.type_name().to_string(),
                },
            )),
        }
    }
}

fn at_path(path: &str, inner: TypeError) -> TypeError {
    TypeError::AttributeError {
        path: path.to_string(),
        inner: Box::new(inner),
    }
}

fn join_path(prefix: &str, name: &str) -> String {
    if prefix.is_empty() {
        name.to_string()
    } else {
        format!("{}.{}", prefix, name)
    }
}

/// Type error
#[derive(Debug, Clone, thiserror::Error)]
pub enum TypeError {
    #[error("Type mismatch: expected {expected}, got {got}")]
    TypeMismatch { expected: String, got: String },

    #[error("Invalid enum variant '{value}', expected one of: {}", expected.join(", "))]
    InvalidEnumVariant {
        value: String,
        expected: Vec<String>,
    },

    #[error("Required attribute '{name}' is missing")]
    MissingRequired { name: String },

    #[error("Attribute '{name}' is computed and cannot be set")]
    ComputedNotAllowed { name: String },

    #[error("Unknown attribute '{name}'")]
    UnknownAttribute { name: String },

    #[error("Block '{name}' accepts at most one element, got {count}")]
    TooManyBlocks { name: String, count: usize },

    #[error("{path}: {inner}")]
    AttributeError { path: String, inner: Box<TypeError> },
}

/// Who supplies an attribute's value
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mutability {
    /// Must be supplied in configuration
    Required,
    /// May be supplied in configuration
    Optional,
    /// Determined by the backend; rejected in configuration
    Computed,
    /// May be supplied; the backend fills it in otherwise
    OptionalComputed,
}

impl Mutability {
    pub fn accepts_input(&self) -> bool {
        !matches!(self, Mutability::Computed)
    }
}

impl fmt::Display for Mutability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Mutability::Required => "required",
            Mutability::Optional => "optional",
            Mutability::Computed => "computed",
            Mutability::OptionalComputed => "optional, computed",
        };
        write!(f, "{}", s)
    }
}

/// Attribute schema
#[derive(Debug, Clone)]
pub struct AttributeSchema {
    pub name: String,
    pub attr_type: AttributeType,
    pub mutability: Mutability,
    pub description: Option<String>,
    /// Backend wire name (e.g., "logicalSizeBytes")
    ///
    /// Attributes without one are request inputs (headers, path or query
    /// parameters) and are skipped by flatten and expand.
    pub provider_name: Option<String>,
    pub sensitive: bool,
}

impl AttributeSchema {
    pub fn new(name: impl Into<String>, attr_type: AttributeType) -> Self {
        Self {
            name: name.into(),
            attr_type,
            mutability: Mutability::Optional,
            description: None,
            provider_name: None,
            sensitive: false,
        }
    }

    /// Attribute that maps to a body field, wire name derived as lowerCamelCase
    pub fn field(name: impl Into<String>, attr_type: AttributeType) -> Self {
        let name = name.into();
        let provider_name = name.to_lower_camel_case();
        Self::new(name, attr_type).with_provider_name(provider_name)
    }

    pub fn required(mut self) -> Self {
        self.mutability = Mutability::Required;
        self
    }

    pub fn computed(mut self) -> Self {
        self.mutability = Mutability::Computed;
        self
    }

    pub fn optional_computed(mut self) -> Self {
        self.mutability = Mutability::OptionalComputed;
        self
    }

    pub fn sensitive(mut self) -> Self {
        self.sensitive = true;
        self
    }

    pub fn with_description(mut self, desc: impl Into<String>) -> Self {
        self.description = Some(desc.into());
        self
    }

    pub fn with_provider_name(mut self, name: impl Into<String>) -> Self {
        self.provider_name = Some(name.into());
        self
    }

    pub fn is_required(&self) -> bool {
        self.mutability == Mutability::Required
    }
}

/// Attributes of a nested block
#[derive(Debug, Clone, Default)]
pub struct BlockSchema {
    pub attributes: HashMap<String, AttributeSchema>,
}

impl BlockSchema {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn attribute(mut self, schema: AttributeSchema) -> Self {
        self.attributes.insert(schema.name.clone(), schema);
        self
    }

    /// Turn every attribute computed (and their nested blocks too)
    ///
    /// Used when a block type shared with a resource is reported back by a
    /// data source.
    pub fn into_computed(mut self) -> Self {
        for attr in self.attributes.values_mut() {
            attr.mutability = Mutability::Computed;
            match &mut attr.attr_type {
                AttributeType::Block(block) | AttributeType::BlockList(block) => {
                    let inner = std::mem::take(block.as_mut());
                    **block = inner.into_computed();
                }
                _ => {}
            }
        }
        self
    }

    fn validate_at(&self, path: &str, attributes: &HashMap<String, Value>, errors: &mut Vec<TypeError>) {
        validate_attributes(&self.attributes, path, attributes, errors);
    }
}

fn validate_attributes(
    schema: &HashMap<String, AttributeSchema>,
    path: &str,
    attributes: &HashMap<String, Value>,
    errors: &mut Vec<TypeError>,
) {
    for (name, attr) in schema {
        if attr.is_required() && !attributes.contains_key(name) {
            errors.push(TypeError::MissingRequired {
                name: join_path(path, name),
            });
        }
    }

    for (name, value) in attributes {
        let attr_path = join_path(path, name);
        match schema.get(name) {
            None => errors.push(TypeError::UnknownAttribute { name: attr_path }),
            Some(attr) if !attr.mutability.accepts_input() => {
                errors.push(TypeError::ComputedNotAllowed { name: attr_path })
            }
            Some(attr) => attr.attr_type.validate(&attr_path, value, errors),
        }
    }
}

fn normalize_attributes(
    schema: &HashMap<String, AttributeSchema>,
    attributes: &mut HashMap<String, Value>,
) {
    for (name, value) in attributes.iter_mut() {
        let Some(block) = schema.get(name).and_then(|a| a.attr_type.nested()) else {
            continue;
        };
        if let Value::Map(_) = value {
            let single = std::mem::replace(value, Value::List(Vec::new()));
            *value = Value::List(vec![single]);
        }
        if let Value::List(items) = value {
            for item in items {
                if let Value::Map(inner) = item {
                    normalize_attributes(&block.attributes, inner);
                }
            }
        }
    }
}

/// Whether a schema describes a managed resource or a read-only data source
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SchemaKind {
    Resource,
    DataSource,
}

/// Resource schema
#[derive(Debug, Clone)]
pub struct ResourceSchema {
    pub resource_type: String,
    pub kind: SchemaKind,
    pub attributes: HashMap<String, AttributeSchema>,
    pub description: Option<String>,
}

impl ResourceSchema {
    pub fn new(resource_type: impl Into<String>) -> Self {
        Self {
            resource_type: resource_type.into(),
            kind: SchemaKind::Resource,
            attributes: HashMap::new(),
            description: None,
        }
    }

    pub fn data_source(mut self) -> Self {
        self.kind = SchemaKind::DataSource;
        self
    }

    pub fn attribute(mut self, schema: AttributeSchema) -> Self {
        self.attributes.insert(schema.name.clone(), schema);
        self
    }

    /// Add every attribute of a block at the top level
    pub fn attributes_from(mut self, block: BlockSchema) -> Self {
        self.attributes.extend(block.attributes);
        self
    }

    pub fn with_description(mut self, desc: impl Into<String>) -> Self {
        self.description = Some(desc.into());
        self
    }

    pub fn is_data_source(&self) -> bool {
        self.kind == SchemaKind::DataSource
    }

    /// Attribute names in lexical order
    pub fn sorted_attribute_names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.attributes.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    /// Wrap bare maps given for block attributes into one-element lists
    pub fn normalize(&self, attributes: &mut HashMap<String, Value>) {
        normalize_attributes(&self.attributes, attributes);
    }

    /// Validate configuration attributes
    pub fn validate(&self, attributes: &HashMap<String, Value>) -> Result<(), Vec<TypeError>> {
        let mut errors = Vec::new();
        validate_attributes(&self.attributes, "", attributes, &mut errors);

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}
