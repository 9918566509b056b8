//! Logs pipeline models.
//!
//! A pipeline is an ordered list of processors. Processors share one JSON
//! object shape on the wire (`name`, `is_enabled`, `type` plus the variant's
//! own fields side by side) and are told apart by `type`. One variant,
//! `pipeline`, nests a whole processor list, so the model is recursive.
//!
//! JSON conversion lives in [`crate::codec`]; `Serialize`/`Deserialize` for
//! [`Pipeline`] and [`Processor`] delegate to it.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

pub const ARITHMETIC_PROCESSOR: &str = "arithmetic-processor";
pub const GROK_PARSER: &str = "grok-parser";
pub const ATTRIBUTE_REMAPPER: &str = "attribute-remapper";
pub const USER_AGENT_PARSER: &str = "user-agent-parser";
pub const URL_PARSER: &str = "url-parser";
pub const DATE_REMAPPER: &str = "date-remapper";
pub const MESSAGE_REMAPPER: &str = "message-remapper";
pub const STATUS_REMAPPER: &str = "status-remapper";
pub const SERVICE_REMAPPER: &str = "service-remapper";
pub const TRACE_ID_REMAPPER: &str = "trace-id-remapper";
pub const CATEGORY_PROCESSOR: &str = "category-processor";
pub const NESTED_PIPELINE: &str = "pipeline";

/// Log query restricting which events a pipeline or category applies to.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Filter {
    pub query: Option<String>,
}

impl Filter {
    pub fn query(query: impl Into<String>) -> Self {
        Self {
            query: Some(query.into()),
        }
    }
}

/// A top-level logs pipeline.
///
/// `id` is assigned by the server and absent until the pipeline is created.
/// Integration pipelines come back with `is_read_only` set.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Pipeline {
    pub id: Option<String>,
    pub pipeline_type: Option<String>,
    pub name: Option<String>,
    pub is_enabled: Option<bool>,
    pub is_read_only: Option<bool>,
    pub filter: Option<Filter>,
    pub processors: Vec<Processor>,
}

/// One processing step. `definition` decides the `type` written on the wire.
#[derive(Debug, Clone, PartialEq)]
pub struct Processor {
    pub name: Option<String>,
    pub is_enabled: Option<bool>,
    pub definition: ProcessorDefinition,
}

impl Processor {
    pub fn new(name: impl Into<String>, definition: ProcessorDefinition) -> Self {
        Self {
            name: Some(name.into()),
            is_enabled: Some(true),
            definition,
        }
    }

    /// The `type` discriminator.
    pub fn type_name(&self) -> &str {
        self.definition.type_name()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum ProcessorDefinition {
    Arithmetic(ArithmeticProcessor),
    GrokParser(GrokParser),
    AttributeRemapper(AttributeRemapper),
    UserAgentParser(UserAgentParser),
    UrlParser(UrlParser),
    DateRemapper(SourceRemapper),
    MessageRemapper(SourceRemapper),
    StatusRemapper(SourceRemapper),
    ServiceRemapper(SourceRemapper),
    TraceIdRemapper(SourceRemapper),
    CategoryProcessor(CategoryProcessor),
    NestedPipeline(NestedPipeline),
    /// A processor type this client does not know yet. Every field other than
    /// the envelope is kept verbatim so it can be sent back unchanged.
    ///
    /// `type_name` must not be one of the known types: such a value decodes
    /// back as the typed variant. Build from raw fields with
    /// [`ProcessorDefinition::from_raw`].
    Unknown {
        type_name: String,
        definition: Map<String, Value>,
    },
}

impl ProcessorDefinition {
    pub fn type_name(&self) -> &str {
        match self {
            Self::Arithmetic(_) => ARITHMETIC_PROCESSOR,
            Self::GrokParser(_) => GROK_PARSER,
            Self::AttributeRemapper(_) => ATTRIBUTE_REMAPPER,
            Self::UserAgentParser(_) => USER_AGENT_PARSER,
            Self::UrlParser(_) => URL_PARSER,
            Self::DateRemapper(_) => DATE_REMAPPER,
            Self::MessageRemapper(_) => MESSAGE_REMAPPER,
            Self::StatusRemapper(_) => STATUS_REMAPPER,
            Self::ServiceRemapper(_) => SERVICE_REMAPPER,
            Self::TraceIdRemapper(_) => TRACE_ID_REMAPPER,
            Self::CategoryProcessor(_) => CATEGORY_PROCESSOR,
            Self::NestedPipeline(_) => NESTED_PIPELINE,
            Self::Unknown { type_name, .. } => type_name,
        }
    }

    /// Definition for `type_name` built from its raw wire fields.
    ///
    /// Known types are parsed into their typed variant; anything else is kept
    /// as [`ProcessorDefinition::Unknown`].
    pub fn from_raw(
        type_name: &str,
        fields: Map<String, Value>,
    ) -> Result<Self, crate::error::DecodeError> {
        crate::codec::definition_from_raw(type_name, fields)
    }

    pub fn is_unknown(&self) -> bool {
        matches!(self, Self::Unknown { .. })
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ArithmeticProcessor {
    pub expression: Option<String>,
    pub target: Option<String>,
    pub is_replace_missing: Option<bool>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GrokParser {
    pub source: Option<String>,
    pub samples: Vec<String>,
    pub grok: Option<GrokRule>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GrokRule {
    pub support_rules: Option<String>,
    pub match_rules: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AttributeRemapper {
    pub sources: Vec<String>,
    pub source_type: Option<String>,
    pub target: Option<String>,
    pub target_type: Option<String>,
    pub preserve_source: Option<bool>,
    pub override_on_conflict: Option<bool>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UserAgentParser {
    pub sources: Vec<String>,
    pub target: Option<String>,
    pub is_encoded: Option<bool>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UrlParser {
    pub sources: Vec<String>,
    pub target: Option<String>,
    pub normalize_ending_slashes: Option<bool>,
}

/// Shared by the date, message, status, service and trace-id remappers.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SourceRemapper {
    pub sources: Vec<String>,
}

impl SourceRemapper {
    pub fn new<I, S>(sources: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            sources: sources.into_iter().map(Into::into).collect(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CategoryProcessor {
    pub target: Option<String>,
    /// Evaluated in order; the first matching category wins.
    pub categories: Vec<Category>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Category {
    pub name: Option<String>,
    pub filter: Option<Filter>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct NestedPipeline {
    pub filter: Option<Filter>,
    pub processors: Vec<Processor>,
}

/// Evaluation order of all pipelines in the organization.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PipelineOrder {
    pub pipeline_ids: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_source_remappers_keep_distinct_types() {
        let sources = SourceRemapper::new(["a", "b"]);
        let kinds = [
            ProcessorDefinition::DateRemapper(sources.clone()),
            ProcessorDefinition::MessageRemapper(sources.clone()),
            ProcessorDefinition::StatusRemapper(sources.clone()),
            ProcessorDefinition::ServiceRemapper(sources.clone()),
            ProcessorDefinition::TraceIdRemapper(sources),
        ];
        let names: Vec<&str> = kinds.iter().map(ProcessorDefinition::type_name).collect();
        assert_eq!(
            names,
            [
                "date-remapper",
                "message-remapper",
                "status-remapper",
                "service-remapper",
                "trace-id-remapper"
            ]
        );
    }

    #[test]
    fn test_unknown_reports_its_own_type() {
        let definition = ProcessorDefinition::Unknown {
            type_name: "geo-ip-parser".to_string(),
            definition: Map::new(),
        };
        assert_eq!(definition.type_name(), "geo-ip-parser");
        assert!(definition.is_unknown());
    }

    #[test]
    fn test_processor_new_is_enabled() {
        let processor = Processor::new(
            "nested",
            ProcessorDefinition::NestedPipeline(NestedPipeline::default()),
        );
        assert_eq!(processor.is_enabled, Some(true));
        assert_eq!(processor.type_name(), "pipeline");
    }

    #[test]
    fn test_pipeline_order_serde() {
        let order: PipelineOrder =
            serde_json::from_str(r#"{"pipeline_ids": ["a", "b", "c"]}"#).unwrap();
        assert_eq!(order.pipeline_ids, ["a", "b", "c"]);
    }
}
