//! JSON codec for logs pipelines and their processor trees.
//!
//! Responsibilities:
//! - Decode a pipeline document into [`Pipeline`], dispatching each processor
//!   on its `type` before reading any variant field.
//! - Encode the tree back into the flat wire shape.
//! - Report shape errors with the full path of the offending field
//!   (`processors[0].processors[1].categories`).
//!
//! Invariants:
//! - Each variant reads only the fields of its own schema, so a field shared by
//!   several variants (`sources`, `target`) can never leak between them.
//! - An unrecognized `type` becomes [`ProcessorDefinition::Unknown`] holding the
//!   raw fields. It is never an error.
//! - Processor and category order is kept as received.
//! - `null` reads the same as an absent field.

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::{Map, Value};

use crate::error::DecodeError;
use crate::id::normalize_id_value;
use crate::models::logs_pipelines::*;
use crate::serde_helpers::json_type_name;

const ENVELOPE_FIELDS: [&str; 3] = ["name", "is_enabled", "type"];

/// Decode a pipeline from raw JSON bytes.
pub fn decode_pipeline(bytes: &[u8]) -> Result<Pipeline, DecodeError> {
    let value: Value = serde_json::from_slice(bytes)?;
    pipeline_from_value(&value)
}

/// Encode a pipeline to JSON bytes.
pub fn encode_pipeline(pipeline: &Pipeline) -> Result<Vec<u8>, DecodeError> {
    Ok(serde_json::to_vec(&pipeline_to_value(pipeline))?)
}

/// Decode the array returned by the pipeline list endpoint.
///
/// Error paths are prefixed with the element index (`[1].processors[0].type`).
pub fn decode_pipelines(bytes: &[u8]) -> Result<Vec<Pipeline>, DecodeError> {
    let value: Value = serde_json::from_slice(bytes)?;
    let items = value
        .as_array()
        .ok_or_else(|| mismatch("(root)", "an array", &value))?;
    items
        .iter()
        .enumerate()
        .map(|(index, item)| decode_pipeline_at(item, format!("[{index}]")))
        .collect()
}

/// Decode a standalone processor array.
pub fn decode_processors(value: &Value) -> Result<Vec<Processor>, DecodeError> {
    let items = value
        .as_array()
        .ok_or_else(|| mismatch("processors", "an array", value))?;
    decode_processor_list(items, "processors")
}

pub fn pipeline_from_value(value: &Value) -> Result<Pipeline, DecodeError> {
    decode_pipeline_at(value, String::new())
}

fn decode_pipeline_at(value: &Value, path: String) -> Result<Pipeline, DecodeError> {
    let fields = Fields::new(value, path)?;
    Ok(Pipeline {
        id: fields.id("id")?,
        pipeline_type: fields.string("type")?,
        name: fields.string("name")?,
        is_enabled: fields.boolean("is_enabled")?,
        is_read_only: fields.boolean("is_read_only")?,
        filter: fields.filter("filter")?,
        processors: fields.processors("processors")?,
    })
}

pub fn pipeline_to_value(pipeline: &Pipeline) -> Value {
    let mut map = Map::new();
    put(&mut map, "id", &pipeline.id);
    put(&mut map, "type", &pipeline.pipeline_type);
    put(&mut map, "name", &pipeline.name);
    put(&mut map, "is_enabled", &pipeline.is_enabled);
    put(&mut map, "is_read_only", &pipeline.is_read_only);
    if let Some(filter) = &pipeline.filter {
        map.insert("filter".to_string(), filter_to_value(filter));
    }
    map.insert(
        "processors".to_string(),
        processors_to_value(&pipeline.processors),
    );
    Value::Object(map)
}

pub fn processor_from_value(value: &Value) -> Result<Processor, DecodeError> {
    decode_processor(value, String::new())
}

/// Build a definition from a `type` name and its raw fields.
///
/// A known `type` yields its typed variant, so the result survives an
/// encode/decode cycle unchanged. Only unrecognized types become
/// [`ProcessorDefinition::Unknown`]. Envelope keys in `fields` are ignored.
pub fn definition_from_raw(
    type_name: &str,
    mut fields: Map<String, Value>,
) -> Result<ProcessorDefinition, DecodeError> {
    for key in ENVELOPE_FIELDS {
        fields.remove(key);
    }
    fields.insert("type".to_string(), Value::String(type_name.to_string()));
    let processor = decode_processor(&Value::Object(fields), String::new())?;
    Ok(processor.definition)
}

pub fn processor_to_value(processor: &Processor) -> Value {
    let mut map = Map::new();
    match &processor.definition {
        ProcessorDefinition::Arithmetic(p) => {
            put(&mut map, "expression", &p.expression);
            put(&mut map, "target", &p.target);
            put(&mut map, "is_replace_missing", &p.is_replace_missing);
        }
        ProcessorDefinition::GrokParser(p) => {
            put(&mut map, "source", &p.source);
            if !p.samples.is_empty() {
                map.insert("samples".to_string(), Value::from(p.samples.clone()));
            }
            if let Some(grok) = &p.grok {
                let mut rule = Map::new();
                put(&mut rule, "support_rules", &grok.support_rules);
                put(&mut rule, "match_rules", &grok.match_rules);
                map.insert("grok".to_string(), Value::Object(rule));
            }
        }
        ProcessorDefinition::AttributeRemapper(p) => {
            map.insert("sources".to_string(), Value::from(p.sources.clone()));
            put(&mut map, "source_type", &p.source_type);
            put(&mut map, "target", &p.target);
            put(&mut map, "target_type", &p.target_type);
            put(&mut map, "preserve_source", &p.preserve_source);
            put(&mut map, "override_on_conflict", &p.override_on_conflict);
        }
        ProcessorDefinition::UserAgentParser(p) => {
            map.insert("sources".to_string(), Value::from(p.sources.clone()));
            put(&mut map, "target", &p.target);
            put(&mut map, "is_encoded", &p.is_encoded);
        }
        ProcessorDefinition::UrlParser(p) => {
            map.insert("sources".to_string(), Value::from(p.sources.clone()));
            put(&mut map, "target", &p.target);
            put(&mut map, "normalize_ending_slashes", &p.normalize_ending_slashes);
        }
        ProcessorDefinition::DateRemapper(p)
        | ProcessorDefinition::MessageRemapper(p)
        | ProcessorDefinition::StatusRemapper(p)
        | ProcessorDefinition::ServiceRemapper(p)
        | ProcessorDefinition::TraceIdRemapper(p) => {
            map.insert("sources".to_string(), Value::from(p.sources.clone()));
        }
        ProcessorDefinition::CategoryProcessor(p) => {
            put(&mut map, "target", &p.target);
            let categories = p
                .categories
                .iter()
                .map(|category| {
                    let mut entry = Map::new();
                    put(&mut entry, "name", &category.name);
                    if let Some(filter) = &category.filter {
                        entry.insert("filter".to_string(), filter_to_value(filter));
                    }
                    Value::Object(entry)
                })
                .collect();
            map.insert("categories".to_string(), Value::Array(categories));
        }
        ProcessorDefinition::NestedPipeline(p) => {
            if let Some(filter) = &p.filter {
                map.insert("filter".to_string(), filter_to_value(filter));
            }
            map.insert("processors".to_string(), processors_to_value(&p.processors));
        }
        ProcessorDefinition::Unknown { definition, .. } => {
            map.extend(definition.clone());
        }
    }

    put(&mut map, "name", &processor.name);
    put(&mut map, "is_enabled", &processor.is_enabled);
    map.insert(
        "type".to_string(),
        Value::String(processor.type_name().to_string()),
    );
    Value::Object(map)
}

fn processors_to_value(processors: &[Processor]) -> Value {
    Value::Array(processors.iter().map(processor_to_value).collect())
}

fn filter_to_value(filter: &Filter) -> Value {
    let mut map = Map::new();
    put(&mut map, "query", &filter.query);
    Value::Object(map)
}

fn put<T>(map: &mut Map<String, Value>, key: &str, value: &Option<T>)
where
    T: Clone + Into<Value>,
{
    if let Some(value) = value {
        map.insert(key.to_string(), value.clone().into());
    }
}

fn decode_processor_list(items: &[Value], path: &str) -> Result<Vec<Processor>, DecodeError> {
    items
        .iter()
        .enumerate()
        .map(|(index, item)| decode_processor(item, format!("{path}[{index}]")))
        .collect()
}

fn decode_processor(value: &Value, path: String) -> Result<Processor, DecodeError> {
    let fields = Fields::new(value, path)?;
    let name = fields.string("name")?;
    let is_enabled = fields.boolean("is_enabled")?;
    let type_name = fields
        .string("type")?
        .ok_or_else(|| DecodeError::malformed(fields.at("type"), "missing required field"))?;

    let definition = match type_name.as_str() {
        ARITHMETIC_PROCESSOR => ProcessorDefinition::Arithmetic(ArithmeticProcessor {
            expression: fields.string("expression")?,
            target: fields.string("target")?,
            is_replace_missing: fields.boolean("is_replace_missing")?,
        }),
        GROK_PARSER => ProcessorDefinition::GrokParser(GrokParser {
            source: fields.string("source")?,
            samples: fields.strings("samples")?,
            grok: fields
                .object("grok")?
                .map(|grok| -> Result<GrokRule, DecodeError> {
                    Ok(GrokRule {
                        support_rules: grok.string("support_rules")?,
                        match_rules: grok.string("match_rules")?,
                    })
                })
                .transpose()?,
        }),
        ATTRIBUTE_REMAPPER => ProcessorDefinition::AttributeRemapper(AttributeRemapper {
            sources: fields.strings("sources")?,
            source_type: fields.string("source_type")?,
            target: fields.string("target")?,
            target_type: fields.string("target_type")?,
            preserve_source: fields.boolean("preserve_source")?,
            override_on_conflict: fields.boolean("override_on_conflict")?,
        }),
        USER_AGENT_PARSER => ProcessorDefinition::UserAgentParser(UserAgentParser {
            sources: fields.strings("sources")?,
            target: fields.string("target")?,
            is_encoded: fields.boolean("is_encoded")?,
        }),
        URL_PARSER => ProcessorDefinition::UrlParser(UrlParser {
            sources: fields.strings("sources")?,
            target: fields.string("target")?,
            normalize_ending_slashes: fields.boolean("normalize_ending_slashes")?,
        }),
        DATE_REMAPPER => ProcessorDefinition::DateRemapper(fields.source_remapper()?),
        MESSAGE_REMAPPER => ProcessorDefinition::MessageRemapper(fields.source_remapper()?),
        STATUS_REMAPPER => ProcessorDefinition::StatusRemapper(fields.source_remapper()?),
        SERVICE_REMAPPER => ProcessorDefinition::ServiceRemapper(fields.source_remapper()?),
        TRACE_ID_REMAPPER => ProcessorDefinition::TraceIdRemapper(fields.source_remapper()?),
        CATEGORY_PROCESSOR => ProcessorDefinition::CategoryProcessor(CategoryProcessor {
            target: fields.string("target")?,
            categories: fields.categories("categories")?,
        }),
        NESTED_PIPELINE => ProcessorDefinition::NestedPipeline(NestedPipeline {
            filter: fields.filter("filter")?,
            processors: fields.processors("processors")?,
        }),
        _ => ProcessorDefinition::Unknown {
            definition: fields
                .map
                .iter()
                .filter(|(key, _)| !ENVELOPE_FIELDS.contains(&key.as_str()))
                .map(|(key, value)| (key.clone(), value.clone()))
                .collect(),
            type_name,
        },
    };

    Ok(Processor {
        name,
        is_enabled,
        definition,
    })
}

fn mismatch(path: &str, expected: &str, found: &Value) -> DecodeError {
    DecodeError::malformed(
        path,
        format!("expected {expected}, found {}", json_type_name(found)),
    )
}

/// Typed field access over one JSON object, tracking its path for errors.
struct Fields<'a> {
    map: &'a Map<String, Value>,
    path: String,
}

impl<'a> Fields<'a> {
    fn new(value: &'a Value, path: String) -> Result<Self, DecodeError> {
        match value {
            Value::Object(map) => Ok(Self { map, path }),
            other => {
                let shown = if path.is_empty() { "(root)" } else { path.as_str() };
                Err(mismatch(shown, "an object", other))
            }
        }
    }

    fn at(&self, key: &str) -> String {
        if self.path.is_empty() {
            key.to_string()
        } else {
            format!("{}.{}", self.path, key)
        }
    }

    fn get(&self, key: &str) -> Option<&'a Value> {
        self.map.get(key).filter(|value| !value.is_null())
    }

    fn string(&self, key: &str) -> Result<Option<String>, DecodeError> {
        match self.get(key) {
            None => Ok(None),
            Some(Value::String(s)) => Ok(Some(s.clone())),
            Some(other) => Err(mismatch(&self.at(key), "a string", other)),
        }
    }

    fn boolean(&self, key: &str) -> Result<Option<bool>, DecodeError> {
        match self.get(key) {
            None => Ok(None),
            Some(Value::Bool(b)) => Ok(Some(*b)),
            Some(other) => Err(mismatch(&self.at(key), "a boolean", other)),
        }
    }

    fn id(&self, key: &str) -> Result<Option<String>, DecodeError> {
        self.get(key)
            .map(|value| {
                normalize_id_value(value)
                    .map_err(|e| DecodeError::malformed(self.at(key), e.to_string()))
            })
            .transpose()
    }

    fn array(&self, key: &str) -> Result<&'a [Value], DecodeError> {
        match self.get(key) {
            None => Ok(&[]),
            Some(Value::Array(items)) => Ok(items.as_slice()),
            Some(other) => Err(mismatch(&self.at(key), "an array", other)),
        }
    }

    fn object(&self, key: &str) -> Result<Option<Fields<'a>>, DecodeError> {
        self.get(key)
            .map(|value| Fields::new(value, self.at(key)))
            .transpose()
    }

    fn strings(&self, key: &str) -> Result<Vec<String>, DecodeError> {
        let path = self.at(key);
        self.array(key)?
            .iter()
            .enumerate()
            .map(|(index, item)| match item {
                Value::String(s) => Ok(s.clone()),
                other => Err(mismatch(&format!("{path}[{index}]"), "a string", other)),
            })
            .collect()
    }

    fn filter(&self, key: &str) -> Result<Option<Filter>, DecodeError> {
        self.object(key)?
            .map(|filter| {
                Ok(Filter {
                    query: filter.string("query")?,
                })
            })
            .transpose()
    }

    fn processors(&self, key: &str) -> Result<Vec<Processor>, DecodeError> {
        decode_processor_list(self.array(key)?, &self.at(key))
    }

    fn categories(&self, key: &str) -> Result<Vec<Category>, DecodeError> {
        let path = self.at(key);
        self.array(key)?
            .iter()
            .enumerate()
            .map(|(index, item)| {
                let category = Fields::new(item, format!("{path}[{index}]"))?;
                Ok(Category {
                    name: category.string("name")?,
                    filter: category.filter("filter")?,
                })
            })
            .collect()
    }

    fn source_remapper(&self) -> Result<SourceRemapper, DecodeError> {
        Ok(SourceRemapper {
            sources: self.strings("sources")?,
        })
    }
}

impl Serialize for Pipeline {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        pipeline_to_value(self).serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for Pipeline {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = Value::deserialize(deserializer)?;
        pipeline_from_value(&value).map_err(D::Error::custom)
    }
}

impl Serialize for Processor {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        processor_to_value(self).serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for Processor {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = Value::deserialize(deserializer)?;
        processor_from_value(&value).map_err(D::Error::custom)
    }
}
