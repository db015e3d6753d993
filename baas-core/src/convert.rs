//! Convert - Schema-driven conversion between domain objects and value trees
//!
//! Domain objects are plain serde structs whose field names are the
//! camelCase wire names of the backend. Conversion goes through
//! `serde_json::Value` and is steered by the schema: only attributes that
//! carry a `provider_name` are mapped, and the attribute type decides how
//! each wire value is represented in the tree.
//!
//! - **flatten**: domain object → tree. Absent scalars are omitted, a present
//!   nested object becomes a one-element list, repeated blocks keep their
//!   order. At the top level of a resource, absent block attributes are
//!   emitted as empty lists.
//! - **expand**: tree → domain object. Missing keys stay unset, a
//!   one-element list becomes the nested object, an empty list is treated as
//!   absent, computed attributes are never sent.

use std::collections::HashMap;

use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::{Map, Number};

use crate::resource::Value;
use crate::schema::{AttributeSchema, AttributeType, ResourceSchema};

/// Conversion error
#[derive(Debug, thiserror::Error)]
pub enum ConvertError {
    #[error("{path}: expected {expected}, got {got}")]
    TypeMismatch {
        path: String,
        expected: String,
        got: String,
    },

    #[error("{path}: integer {value} does not fit in a signed 64-bit integer")]
    IntegerOutOfRange { path: String, value: String },

    #[error("{path}: block accepts at most one element, got {count}")]
    TooManyBlocks { path: String, count: usize },

    #[error("Failed to encode {type_name}: {source}")]
    Encode {
        type_name: &'static str,
        #[source]
        source: serde_json::Error,
    },

    #[error("Failed to decode {type_name}: {source}")]
    Decode {
        type_name: &'static str,
        #[source]
        source: serde_json::Error,
    },
}

pub type ConvertResult<T> = Result<T, ConvertError>;

// =============================================================================
// Flatten
// =============================================================================

/// Flatten a domain object into the state tree of a resource or data source
pub fn flatten_state<T: Serialize>(
    schema: &ResourceSchema,
    object: &T,
) -> ConvertResult<HashMap<String, Value>> {
    let json = encode(object)?;
    flatten_json(&schema.attributes, &json, true)
}

/// Flatten a wire JSON object
///
/// With `top_level` set, block attributes missing from the object are
/// emitted as empty lists instead of being omitted.
pub fn flatten_json(
    attributes: &HashMap<String, AttributeSchema>,
    json: &serde_json::Value,
    top_level: bool,
) -> ConvertResult<HashMap<String, Value>> {
    let object = json.as_object().ok_or_else(|| ConvertError::TypeMismatch {
        path: "<root>".to_string(),
        expected: "Object".to_string(),
        got: json_type_name(json).to_string(),
    })?;
    flatten_object(attributes, object, "", top_level)
}

fn flatten_object(
    attributes: &HashMap<String, AttributeSchema>,
    object: &Map<String, serde_json::Value>,
    prefix: &str,
    top_level: bool,
) -> ConvertResult<HashMap<String, Value>> {
    let mut out = HashMap::new();

    for (name, attr) in attributes {
        let Some(wire_name) = &attr.provider_name else {
            continue;
        };
        let path = join_path(prefix, name);

        match object.get(wire_name.as_str()) {
            None | Some(serde_json::Value::Null) => {
                if top_level && attr.attr_type.nested().is_some() {
                    out.insert(name.clone(), Value::List(Vec::new()));
                }
            }
            Some(json) => {
                out.insert(name.clone(), flatten_value(&attr.attr_type, json, &path)?);
            }
        }
    }

    Ok(out)
}

fn flatten_value(
    attr_type: &AttributeType,
    json: &serde_json::Value,
    path: &str,
) -> ConvertResult<Value> {
    match (attr_type, json) {
        (AttributeType::String | AttributeType::Enum(_), serde_json::Value::String(s)) => {
            Ok(Value::String(s.clone()))
        }
        (AttributeType::Bool, serde_json::Value::Bool(b)) => Ok(Value::Bool(*b)),
        (AttributeType::Int, serde_json::Value::Number(n)) => narrow(n, path).map(Value::Int),
        (AttributeType::List(inner), serde_json::Value::Array(items)) => items
            .iter()
            .enumerate()
            .map(|(i, item)| flatten_value(inner, item, &format!("{}[{}]", path, i)))
            .collect::<ConvertResult<Vec<_>>>()
            .map(Value::List),
        (AttributeType::Block(block), serde_json::Value::Object(object)) => {
            let map = flatten_object(&block.attributes, object, &format!("{}[0]", path), false)?;
            Ok(Value::List(vec![Value::Map(map)]))
        }
        (AttributeType::BlockList(block), serde_json::Value::Array(items)) => {
            let mut out = Vec::with_capacity(items.len());
            for (i, item) in items.iter().enumerate() {
                let item_path = format!("{}[{}]", path, i);
                let object = item.as_object().ok_or_else(|| ConvertError::TypeMismatch {
                    path: item_path.clone(),
                    expected: "Object".to_string(),
                    got: json_type_name(item).to_string(),
                })?;
                out.push(Value::Map(flatten_object(
                    &block.attributes,
                    object,
                    &item_path,
                    false,
                )?));
            }
            Ok(Value::List(out))
        }
        _ => Err(ConvertError::TypeMismatch {
            path: path.to_string(),
            expected: attr_type.to_string(),
            got: json_type_name(json).to_string(),
        }),
    }
}

fn narrow(n: &Number, path: &str) -> ConvertResult<i64> {
    if let Some(i) = n.as_i64() {
        Ok(i)
    } else if n.is_u64() {
        Err(ConvertError::IntegerOutOfRange {
            path: path.to_string(),
            value: n.to_string(),
        })
    } else {
        Err(ConvertError::TypeMismatch {
            path: path.to_string(),
            expected: "Int".to_string(),
            got: "Float".to_string(),
        })
    }
}

// =============================================================================
// Expand
// =============================================================================

/// Expand configuration attributes into a domain object
pub fn expand<T: DeserializeOwned>(
    attributes: &HashMap<String, AttributeSchema>,
    config: &HashMap<String, Value>,
) -> ConvertResult<T> {
    let object = expand_json(attributes, config)?;
    serde_json::from_value(serde_json::Value::Object(object)).map_err(|source| {
        ConvertError::Decode {
            type_name: std::any::type_name::<T>(),
            source,
        }
    })
}

/// Expand configuration attributes into a wire JSON object
pub fn expand_json(
    attributes: &HashMap<String, AttributeSchema>,
    config: &HashMap<String, Value>,
) -> ConvertResult<Map<String, serde_json::Value>> {
    expand_object(attributes, config, "")
}

fn expand_object(
    attributes: &HashMap<String, AttributeSchema>,
    config: &HashMap<String, Value>,
    prefix: &str,
) -> ConvertResult<Map<String, serde_json::Value>> {
    let mut out = Map::new();

    for (name, attr) in attributes {
        let Some(wire_name) = &attr.provider_name else {
            continue;
        };
        if !attr.mutability.accepts_input() {
            continue;
        }
        if let Some(value) = config.get(name)
            && let Some(json) = expand_value(&attr.attr_type, value, &join_path(prefix, name))?
        {
            out.insert(wire_name.clone(), json);
        }
    }

    Ok(out)
}

fn expand_value(
    attr_type: &AttributeType,
    value: &Value,
    path: &str,
) -> ConvertResult<Option<serde_json::Value>> {
    let json = match (attr_type, value) {
        (AttributeType::String | AttributeType::Enum(_), Value::String(s)) => {
            serde_json::Value::String(s.clone())
        }
        (AttributeType::Int, Value::Int(i)) => serde_json::Value::from(*i),
        (AttributeType::Bool, Value::Bool(b)) => serde_json::Value::Bool(*b),
        (AttributeType::List(inner), Value::List(items)) => {
            let mut out = Vec::with_capacity(items.len());
            for (i, item) in items.iter().enumerate() {
                if let Some(json) = expand_value(inner, item, &format!("{}[{}]", path, i))? {
                    out.push(json);
                }
            }
            serde_json::Value::Array(out)
        }
        (AttributeType::Block(block), Value::List(items)) => match items.as_slice() {
            [] => return Ok(None),
            [item] => {
                let item_path = format!("{}[0]", path);
                let map = as_map(item, &item_path)?;
                serde_json::Value::Object(expand_object(&block.attributes, map, &item_path)?)
            }
            _ => {
                return Err(ConvertError::TooManyBlocks {
                    path: path.to_string(),
                    count: items.len(),
                });
            }
        },
        (AttributeType::BlockList(block), Value::List(items)) => {
            let mut out = Vec::with_capacity(items.len());
            for (i, item) in items.iter().enumerate() {
                let item_path = format!("{}[{}]", path, i);
                let map = as_map(item, &item_path)?;
                out.push(serde_json::Value::Object(expand_object(
                    &block.attributes,
                    map,
                    &item_path,
                )?));
            }
            serde_json::Value::Array(out)
        }
        _ => {
            return Err(ConvertError::TypeMismatch {
                path: path.to_string(),
                expected: attr_type.to_string(),
                got: value.type_name().to_string(),
            });
        }
    };

    Ok(Some(json))
}

fn as_map<'a>(value: &'a Value, path: &str) -> ConvertResult<&'a HashMap<String, Value>> {
    match value {
        Value::Map(map) => Ok(map),
        other => Err(ConvertError::TypeMismatch {
            path: path.to_string(),
            expected: "Map".to_string(),
            got: other.type_name().to_string(),
        }),
    }
}

// =============================================================================
// Helpers
// =============================================================================

fn encode<T: Serialize>(object: &T) -> ConvertResult<serde_json::Value> {
    serde_json::to_value(object).map_err(|source| ConvertError::Encode {
        type_name: std::any::type_name::<T>(),
        source,
    })
}

fn join_path(prefix: &str, name: &str) -> String {
    if prefix.is_empty() {
        name.to_string()
    } else {
        format!("{}.{}", prefix, name)
    }
}

fn json_type_name(json: &serde_json::Value) -> &'static str {
    match json {
        serde_json::Value::Null => "Null",
        serde_json::Value::Bool(_) => "Bool",
        serde_json::Value::Number(_) => "Number",
        serde_json::Value::String(_) => "String",
        serde_json::Value::Array(_) => "Array",
        serde_json::Value::Object(_) => "Object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::BlockSchema;
    use serde::Deserialize;

    #[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
    #[serde(rename_all = "camelCase")]
    struct TimeOfDay {
        hour: i64,
        minute: i64,
        #[serde(skip_serializing_if = "Option::is_none")]
        time_zone: Option<String>,
    }

    #[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
    #[serde(rename_all = "camelCase")]
    struct Filter {
        #[serde(skip_serializing_if = "Option::is_none")]
        filter_string: Option<String>,
        #[serde(skip_serializing_if = "Option::is_none")]
        is_regular_expression: Option<bool>,
    }

    #[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
    #[serde(rename_all = "camelCase")]
    struct Tier {
        tier_type: String,
        #[serde(skip_serializing_if = "Option::is_none")]
        move_after: Option<i64>,
    }

    #[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
    #[serde(rename_all = "camelCase")]
    struct Group {
        #[serde(skip_serializing_if = "Option::is_none")]
        name: Option<String>,
        #[serde(skip_serializing_if = "Option::is_none")]
        start_time: Option<TimeOfDay>,
        #[serde(skip_serializing_if = "Option::is_none")]
        tiers: Option<Vec<Tier>>,
        #[serde(skip_serializing_if = "Option::is_none")]
        warnings: Option<Vec<String>>,
        #[serde(skip_serializing_if = "Option::is_none")]
        is_active: Option<bool>,
    }

    fn time_of_day_block() -> BlockSchema {
        BlockSchema::new()
            .attribute(AttributeSchema::field("hour", AttributeType::Int).required())
            .attribute(AttributeSchema::field("minute", AttributeType::Int).required())
            .attribute(AttributeSchema::field("time_zone", AttributeType::String))
    }

    fn filter_block() -> BlockSchema {
        BlockSchema::new()
            .attribute(AttributeSchema::field("filter_string", AttributeType::String))
            .attribute(AttributeSchema::field("is_regular_expression", AttributeType::Bool))
    }

    fn group_schema() -> ResourceSchema {
        let tier = BlockSchema::new()
            .attribute(AttributeSchema::field("tier_type", AttributeType::String).required())
            .attribute(AttributeSchema::field("move_after", AttributeType::Int));
        ResourceSchema::new("group")
            .attribute(AttributeSchema::new("tenant_id", AttributeType::String).required())
            .attribute(AttributeSchema::field("name", AttributeType::String))
            .attribute(AttributeSchema::field(
                "start_time",
                AttributeType::block(time_of_day_block()),
            ))
            .attribute(AttributeSchema::field("tiers", AttributeType::block_list(tier)))
            .attribute(AttributeSchema::field(
                "warnings",
                AttributeType::list(AttributeType::String),
            ))
            .attribute(AttributeSchema::field("is_active", AttributeType::Bool).computed())
    }

    fn flatten_block<T: Serialize>(
        attributes: &HashMap<String, AttributeSchema>,
        object: &T,
    ) -> ConvertResult<HashMap<String, Value>> {
        flatten_json(attributes, &serde_json::to_value(object).unwrap(), false)
    }

    fn map(entries: Vec<(&str, Value)>) -> HashMap<String, Value> {
        entries
            .into_iter()
            .map(|(k, v)| (k.to_string(), v))
            .collect()
    }

    #[test]
    fn time_of_day_flattens_to_exact_map() {
        let tod = TimeOfDay {
            hour: 0,
            minute: 0,
            time_zone: Some("America/Los_Angeles".to_string()),
        };
        let block = time_of_day_block();

        let flat = flatten_block(&block.attributes, &tod).unwrap();
        let expected = map(vec![
            ("hour", Value::Int(0)),
            ("minute", Value::Int(0)),
            ("time_zone", Value::String("America/Los_Angeles".to_string())),
        ]);
        assert_eq!(flat, expected);

        let back: TimeOfDay = expand(&block.attributes, &expected).unwrap();
        assert_eq!(back, tod);
    }

    #[test]
    fn filter_keeps_explicit_false() {
        let filter = Filter {
            filter_string: Some("testString".to_string()),
            is_regular_expression: Some(false),
        };
        let block = filter_block();

        let flat = flatten_block(&block.attributes, &filter).unwrap();
        assert_eq!(flat.get("is_regular_expression"), Some(&Value::Bool(false)));
        assert_eq!(
            flat.get("filter_string"),
            Some(&Value::String("testString".to_string()))
        );

        let empty = flatten_block(&block.attributes, &Filter {
            filter_string: None,
            is_regular_expression: None,
        })
        .unwrap();
        assert!(empty.is_empty());
    }

    #[test]
    fn top_level_blocks_always_present() {
        let schema = group_schema();
        let state = flatten_state(&schema, &Group::default()).unwrap();

        assert_eq!(state.get("start_time"), Some(&Value::List(vec![])));
        assert_eq!(state.get("tiers"), Some(&Value::List(vec![])));
        assert!(!state.contains_key("name"));
        assert!(!state.contains_key("warnings"));
        assert!(!state.contains_key("tenant_id"));
    }

    #[test]
    fn nested_absent_blocks_are_omitted() {
        let mut attrs = HashMap::new();
        attrs.insert(
            "inner".to_string(),
            AttributeSchema::field("inner", AttributeType::block(time_of_day_block())),
        );
        let flat = flatten_json(&attrs, &serde_json::json!({}), false).unwrap();
        assert!(flat.is_empty());
    }

    #[test]
    fn present_block_becomes_one_element_list() {
        let schema = group_schema();
        let group = Group {
            start_time: Some(TimeOfDay {
                hour: 23,
                minute: 30,
                time_zone: None,
            }),
            ..Default::default()
        };
        let state = flatten_state(&schema, &group).unwrap();
        let Some(Value::List(items)) = state.get("start_time") else {
            panic!("start_time missing");
        };
        assert_eq!(items.len(), 1);
        assert_eq!(
            items[0],
            Value::Map(map(vec![("hour", Value::Int(23)), ("minute", Value::Int(30))]))
        );
    }

    #[test]
    fn repeated_fields_keep_order() {
        let schema = group_schema();
        let group = Group {
            tiers: Some(vec![
                Tier {
                    tier_type: "kOracleTierStandard".to_string(),
                    move_after: Some(26),
                },
                Tier {
                    tier_type: "kOracleTierArchive".to_string(),
                    move_after: None,
                },
            ]),
            warnings: Some(vec!["b".to_string(), "a".to_string()]),
            ..Default::default()
        };

        let state = flatten_state(&schema, &group).unwrap();
        let Some(Value::List(tiers)) = state.get("tiers") else {
            panic!("tiers missing");
        };
        let types: Vec<_> = tiers
            .iter()
            .map(|t| match t {
                Value::Map(m) => m["tier_type"].clone(),
                _ => panic!("expected map"),
            })
            .collect();
        assert_eq!(
            types,
            vec![
                Value::String("kOracleTierStandard".to_string()),
                Value::String("kOracleTierArchive".to_string()),
            ]
        );
        assert_eq!(
            state.get("warnings"),
            Some(&Value::List(vec![
                Value::String("b".to_string()),
                Value::String("a".to_string()),
            ]))
        );

        let back: Group = expand(&schema.attributes, &state).unwrap();
        assert_eq!(back.tiers, group.tiers);
        assert_eq!(back.warnings, group.warnings);
    }

    #[test]
    fn empty_collection_flattens_to_empty_list() {
        let schema = group_schema();
        let group = Group {
            tiers: Some(vec![]),
            warnings: Some(vec![]),
            ..Default::default()
        };
        let state = flatten_state(&schema, &group).unwrap();
        assert_eq!(state.get("tiers"), Some(&Value::List(vec![])));
        assert_eq!(state.get("warnings"), Some(&Value::List(vec![])));
    }

    #[test]
    fn expand_skips_computed_and_input_only_attributes() {
        let schema = group_schema();
        let config = map(vec![
            ("tenant_id", Value::String("tenant/".to_string())),
            ("name", Value::String("daily".to_string())),
            ("is_active", Value::Bool(true)),
        ]);
        let json = expand_json(&schema.attributes, &config).unwrap();
        assert_eq!(json.len(), 1);
        assert_eq!(json["name"], serde_json::json!("daily"));
    }

    #[test]
    fn expand_treats_empty_block_list_as_absent() {
        let schema = group_schema();
        let config = map(vec![("start_time", Value::List(vec![]))]);
        let group: Group = expand(&schema.attributes, &config).unwrap();
        assert_eq!(group.start_time, None);
    }

    #[test]
    fn integer_beyond_i64_is_an_error() {
        let attrs = time_of_day_block().attributes;
        let json = serde_json::json!({"hour": u64::MAX, "minute": 1});
        let err = flatten_json(&attrs, &json, false).unwrap_err();
        assert!(matches!(err, ConvertError::IntegerOutOfRange { ref path, .. } if path == "hour"));
    }

    #[test]
    fn large_i64_round_trips() {
        let attrs = time_of_day_block().attributes;
        let tod = TimeOfDay {
            hour: i64::MAX,
            minute: i64::MIN,
            time_zone: None,
        };
        let flat = flatten_block(&attrs, &tod).unwrap();
        let back: TimeOfDay = expand(&attrs, &flat).unwrap();
        assert_eq!(back, tod);
    }

    #[test]
    fn wire_type_mismatch_reports_path() {
        let schema = group_schema();
        let json = serde_json::json!({"startTime": {"hour": "noon", "minute": 0}});
        let err = flatten_json(&schema.attributes, &json, true).unwrap_err();
        assert_eq!(
            err.to_string(),
            "start_time[0].hour: expected Int, got String"
        );
    }

    #[test]
    fn missing_required_struct_field_fails_decode() {
        let attrs = time_of_day_block().attributes;
        let config = map(vec![("hour", Value::Int(1))]);
        let err = expand::<TimeOfDay>(&attrs, &config).unwrap_err();
        assert!(matches!(err, ConvertError::Decode { .. }));
    }

    #[test]
    fn expand_rejects_two_elements_for_single_block() {
        let schema = group_schema();
        let tod = Value::Map(map(vec![("hour", Value::Int(1)), ("minute", Value::Int(2))]));
        let config = map(vec![("start_time", Value::List(vec![tod.clone(), tod]))]);
        let err = expand_json(&schema.attributes, &config).unwrap_err();
        assert!(matches!(err, ConvertError::TooManyBlocks { count: 2, .. }));
    }
}
