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

use serde::Deserialize;
use serde::Serialize;
use skein_protos::config::OutputConfig;
use skein_protos::config::TelemetryConfig;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    #[serde(default)]
    pub telemetry: TelemetryConfig,
    #[serde(default)]
    pub output: OutputConfig,
}

#[cfg(test)]
mod tests {
    use skein_protos::config::OutputFormat;

    use super::*;

    #[test]
    fn test_sample_config() {
        let content = toml::to_string(&Config::default()).unwrap();
        assert!(content.contains(r#"filter = "INFO""#));
        assert!(content.contains(r#"format = "text""#));
        assert_eq!(toml::from_str::<Config>(&content).unwrap(), Config::default());
    }

    #[test]
    fn test_partial_config() {
        let config: Config = toml::from_str(
            r#"
[output]
format = "json"
"#,
        )
        .unwrap();
        assert_eq!(config.output.format, OutputFormat::Json);
        assert_eq!(config.telemetry, TelemetryConfig::default());
    }
}
