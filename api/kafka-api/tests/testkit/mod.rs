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

use std::future::Future;
use std::process::ExitCode;
use std::process::Termination;

use skein_protos::config::LogConfig;
use skein_protos::config::StderrAppenderConfig;
use skein_protos::config::TelemetryConfig;

pub struct Testkit {
    /// A mix of success, known and unknown error codes.
    pub codes: Vec<i16>,
}

pub fn harness<T, Fut>(test: impl Send + FnOnce(Testkit) -> Fut) -> ExitCode
where
    T: Termination,
    Fut: Send + Future<Output = T>,
{
    skein_telemetry::init(&TelemetryConfig {
        log: LogConfig {
            stderr: Some(StderrAppenderConfig {
                filter: "DEBUG".to_string(),
            }),
        },
    })
    .unwrap();

    let test_name = std::any::type_name::<Fut>();
    log::info!("running {test_name}");

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .worker_threads(4)
        .thread_name("test_runtime")
        .enable_all()
        .build()
        .unwrap();

    let mut codes = vec![0, -1, -2, i16::MIN, i16::MAX, 73, 9999];
    codes.extend(1..=72);
    runtime.block_on(async move { test(Testkit { codes }).await.report() })
}
