use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::models::analytics::RawSheetRow;

/// Body of the Sheets `values.get` endpoint. With `UNFORMATTED_VALUE`
/// cells come back as JSON numbers, strings or booleans.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SheetValues {
    #[serde(default)]
    pub range: String,
    #[serde(default, rename = "majorDimension")]
    pub major_dimension: String,
    #[serde(default)]
    pub values: Vec<Vec<Value>>,
}

impl SheetValues {
    pub fn into_rows(self) -> Vec<RawSheetRow> {
        self.values
            .into_iter()
            .map(|row| row.iter().map(cell_text).collect())
            .collect()
    }
}

pub fn cell_text(cell: &Value) -> String {
    match cell {
        Value::Null => String::new(),
        Value::String(s) => s.clone(),
        Value::Number(n) => n.to_string(),
        Value::Bool(b) => b.to_string(),
        other => other.to_string(),
    }
}
