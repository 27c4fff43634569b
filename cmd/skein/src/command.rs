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

use std::path::PathBuf;

use clap::Parser;
use clap::Subcommand;
use error_stack::ResultExt;
use skein_kafka_api::classify;
use skein_kafka_api::registry;
use skein_protos::config::OutputFormat;

use crate::config::Config;
use crate::render::render;
use crate::render::Row;
use crate::Error;

#[derive(Debug, Parser)]
#[command(name = "skein", version)]
pub struct Command {
    /// Configure the CLI with the given file; if not specified, the
    /// [default configuration][crate::config::Config::default] is used.
    #[arg(short, long, global = true)]
    config_file: Option<PathBuf>,

    #[command(subcommand)]
    cmd: SubCommand,
}

impl Command {
    pub fn run(self) -> error_stack::Result<(), Error> {
        let config = load_config(self.config_file)?;
        skein_telemetry::init(&config.telemetry)
            .change_context_lazy(|| Error("invalid log filter in telemetry config".to_string()))?;
        log::debug!("loaded config: {config:?}");

        match self.cmd {
            SubCommand::Explain(cmd) => cmd.run(&config),
            SubCommand::Table(cmd) => cmd.run(&config),
            SubCommand::Generate(cmd) => cmd.run(),
        }
    }
}

fn load_config(file: Option<PathBuf>) -> error_stack::Result<Config, Error> {
    let Some(file) = file else {
        return Ok(Config::default());
    };

    let content = std::fs::read_to_string(&file).change_context_lazy(|| {
        Error(format!("failed to read config file: {}", file.display()))
    })?;
    toml::from_str(&content)
        .change_context_lazy(|| Error("failed to parse config content".to_string()))
}

#[derive(Debug, Subcommand)]
pub enum SubCommand {
    /// Classify broker error codes.
    #[command()]
    Explain(CommandExplain),
    /// Print every error code known to this client.
    #[command()]
    Table(CommandTable),
    /// Generate command-line interface utilities.
    #[command(name = "gen")]
    Generate(CommandGenerate),
}

#[derive(Debug, Parser)]
pub struct CommandExplain {
    /// The error codes as found in broker responses.
    #[arg(required = true, allow_negative_numbers = true)]
    codes: Vec<i16>,

    /// Override the output format of the config file.
    #[arg(long, value_enum)]
    format: Option<OutputFormat>,
}

impl CommandExplain {
    pub fn run(self, config: &Config) -> error_stack::Result<(), Error> {
        let rows = self
            .codes
            .iter()
            .map(|&code| match classify(code) {
                None => Row::success(),
                Some(error) => {
                    log::debug!("classified error code {code}: {error:?}");
                    Row::from(error)
                }
            })
            .collect::<Vec<_>>();

        let format = self.format.unwrap_or(config.output.format);
        println!("{}", render(&rows, format)?);
        Ok(())
    }
}

#[derive(Debug, Parser)]
pub struct CommandTable {
    /// Only print retriable error codes.
    #[arg(long)]
    retriable: bool,

    /// Override the output format of the config file.
    #[arg(long, value_enum)]
    format: Option<OutputFormat>,
}

impl CommandTable {
    pub fn run(self, config: &Config) -> error_stack::Result<(), Error> {
        let rows = registry::entries()
            .filter(|error| !self.retriable || error.retriable())
            .map(Row::from)
            .collect::<Vec<_>>();
        log::debug!("rendering {} of {} error codes", rows.len(), registry::len());

        let format = self.format.unwrap_or(config.output.format);
        println!("{}", render(&rows, format)?);
        Ok(())
    }
}

#[derive(Debug, Parser)]
pub struct CommandGenerate {
    #[arg(short, long, global = true)]
    output: Option<PathBuf>,

    #[command(subcommand)]
    cmd: GenerateTarget,
}

#[derive(Debug, Subcommand)]
pub enum GenerateTarget {
    /// Generate the default CLI config.
    #[command()]
    SampleConfig,
}

impl CommandGenerate {
    pub fn run(self) -> error_stack::Result<(), Error> {
        match self.cmd {
            GenerateTarget::SampleConfig => {
                let config = Config::default();
                let content = toml::to_string(&config).change_context_lazy(|| {
                    Error("default config must be always valid".to_string())
                })?;
                if let Some(output) = self.output {
                    std::fs::write(&output, content).change_context_lazy(|| {
                        Error(format!("failed to write config to {}", output.display()))
                    })?;
                } else {
                    println!("{content}");
                }
            }
        }

        Ok(())
    }
}
