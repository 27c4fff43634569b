// Copyright 2024 tison <wander4096@gmail.com>
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use error_stack::ResultExt;
use serde::Serialize;
use skein_kafka_api::BrokerResponseError;
use skein_kafka_api::ErrorCode;
use skein_protos::config::OutputFormat;

use crate::Error;

/// One classified error code as printed by the CLI.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Row {
    pub code: i16,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<&'static str>,
    pub retriable: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<&'static str>,
}

impl Row {
    pub fn success() -> Row {
        Row {
            code: skein_kafka_api::consts::KAFKA_SUCCESS,
            name: Some("NONE"),
            retriable: false,
            description: Some("The request succeeded."),
        }
    }
}

impl From<BrokerResponseError> for Row {
    fn from(error: BrokerResponseError) -> Self {
        Row {
            code: error.code(),
            name: error.name(),
            retriable: error.retriable(),
            description: error.description(),
        }
    }
}

impl From<ErrorCode> for Row {
    fn from(error: ErrorCode) -> Self {
        Row::from(BrokerResponseError::Known(error))
    }
}

#[derive(Serialize)]
struct Rows<'a> {
    errors: &'a [Row],
}

pub fn render(rows: &[Row], format: OutputFormat) -> error_stack::Result<String, Error> {
    match format {
        OutputFormat::Text => Ok(rows.iter().map(render_text).collect::<Vec<_>>().join("\n")),
        OutputFormat::Json => serde_json::to_string_pretty(&Rows { errors: rows })
            .change_context_lazy(|| Error("failed to render rows as JSON".to_string())),
        OutputFormat::Toml => toml::to_string(&Rows { errors: rows })
            .change_context_lazy(|| Error("failed to render rows as TOML".to_string())),
    }
}

fn render_text(row: &Row) -> String {
    format!(
        "{} {} retriable={}: {}",
        row.code,
        row.name.unwrap_or("<unknown>"),
        row.retriable,
        row.description
            .unwrap_or("The error code is unknown to this client version.")
    )
}
