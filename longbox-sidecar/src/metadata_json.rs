//! The native `Metadata.json` sidecar.
//!
//! Layout: `{"content": <Metadata>, "meta": {"date", "tool": {"name", "version"}}}`.
//! The `content` block round-trips every field of the model. Unknown keys are
//! ignored on read.

use chrono::NaiveDate;
use longbox_model::Metadata;
use serde::{Deserialize, Serialize};

use crate::error::SidecarError;
use crate::prompt::FieldPrompt;
use crate::{Sidecar, TOOL_NAME, TOOL_VERSION};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tool {
    pub name: String,
    pub version: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Meta {
    pub date: NaiveDate,
    pub tool: Tool,
}

impl Meta {
    pub fn today() -> Self {
        Self {
            date: chrono::Local::now().date_naive(),
            tool: Tool {
                name: TOOL_NAME.to_string(),
                version: TOOL_VERSION.to_string(),
            },
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
struct Document {
    content: Metadata,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    meta: Option<Meta>,
}

pub struct MetadataJson;

impl Sidecar for MetadataJson {
    fn name(&self) -> &'static str {
        "Metadata JSON"
    }

    fn file_name(&self) -> &'static str {
        "Metadata.json"
    }

    fn parse_with(&self, raw: &[u8], _prompt: &mut dyn FieldPrompt) -> Result<Metadata, SidecarError> {
        let document: Document = serde_json::from_slice(raw)?;
        let mut metadata = document.content;
        metadata.normalize();
        metadata.validate()?;
        Ok(metadata)
    }

    fn serialize(&self, metadata: &Metadata) -> Result<Vec<u8>, SidecarError> {
        let document = Document {
            content: metadata.clone(),
            meta: Some(Meta::today()),
        };
        let mut out = serde_json::to_vec_pretty(&document)?;
        out.push(b'\n');
        Ok(out)
    }
}
