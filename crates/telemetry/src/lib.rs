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


//! Logging setup shared by the `skein` binary and the test harnesses.

use logforth::append;
use logforth::filter::env_filter::EnvFilterBuilder;
use logforth::filter::EnvFilter;
use logforth::layout::TextLayout;
use skein_protos::config::TelemetryConfig;

/// A log filter directive that `env_logger` syntax rejects.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid log filter {directive:?} from {source_name}: {reason}")]
pub struct InvalidFilter {
    pub directive: String,
    pub source_name: &'static str,
    pub reason: String,
}

/// Installs the global logger described by `config`.
///
/// Both the configured filter and `RUST_LOG` are validated before anything is installed; a valid
/// `RUST_LOG` takes precedence. Once a global logger exists, later calls only validate.
pub fn init(config: &TelemetryConfig) -> Result<(), InvalidFilter> {
    let Some(ref stderr) = config.log.stderr else {
        return Ok(());
    };

    let filter = resolve_filter(&stderr.filter, std::env::var("RUST_LOG").ok().as_deref())?;
    let installed = logforth::builder()
        .dispatch(|d| {
            d.filter(filter)
                .append(append::Stderr::default().with_layout(TextLayout::default()))
        })
        .try_apply();

    if installed.is_ok() {
        log::debug!("logger initialized: {config:?}");
    }
    Ok(())
}

fn resolve_filter(configured: &str, rust_log: Option<&str>) -> Result<EnvFilter, InvalidFilter> {
    let configured = parse_filter(configured, "config")?;
    match rust_log {
        Some(directive) => parse_filter(directive, "RUST_LOG"),
        None => Ok(configured),
    }
}

fn parse_filter(directive: &str, source_name: &'static str) -> Result<EnvFilter, InvalidFilter> {
    EnvFilterBuilder::new()
        .try_parse(directive)
        .map(EnvFilter::new)
        .map_err(|err| InvalidFilter {
            directive: directive.to_string(),
            source_name,
            reason: err.to_string(),
        })
}
