use serde::{Deserialize, Serialize};

use crate::error::{SelectorError, SelectorResult};
use crate::render::Renderer;

use super::{EngineSnapshot, SelectorEngine};

pub const ENGINE_SNAPSHOT_JSON_SCHEMA_V1: u32 = 1;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EngineSnapshotJsonContractV1 {
    pub schema_version: u32,
    pub snapshot: EngineSnapshot,
}

impl EngineSnapshot {
    pub fn to_json_contract_v1_pretty(&self) -> SelectorResult<String> {
        let payload = EngineSnapshotJsonContractV1 {
            schema_version: ENGINE_SNAPSHOT_JSON_SCHEMA_V1,
            snapshot: self.clone(),
        };
        serde_json::to_string_pretty(&payload).map_err(|e| {
            SelectorError::InvalidData(format!("failed to serialize snapshot contract v1: {e}"))
        })
    }

    /// Parses either a bare snapshot or a versioned contract payload.
    pub fn from_json_compat_str(input: &str) -> SelectorResult<Self> {
        if let Ok(snapshot) = serde_json::from_str::<EngineSnapshot>(input) {
            return Ok(snapshot);
        }

        let payload: EngineSnapshotJsonContractV1 = serde_json::from_str(input).map_err(|e| {
            SelectorError::InvalidData(format!("failed to parse snapshot json payload: {e}"))
        })?;
        if payload.schema_version != ENGINE_SNAPSHOT_JSON_SCHEMA_V1 {
            return Err(SelectorError::InvalidData(format!(
                "unsupported snapshot schema version: {}",
                payload.schema_version
            )));
        }

        Ok(payload.snapshot)
    }
}

impl<R: Renderer> SelectorEngine<R> {
    pub fn snapshot_json_contract_v1_pretty(&self) -> SelectorResult<String> {
        self.snapshot().to_json_contract_v1_pretty()
    }
}
