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

//! The process-wide mapping from numeric code to [`ErrorCode`].
//!
//! The map is built from [`ErrorCode::ALL`] on first use and never changes afterward, so lookups
//! from any number of threads need no synchronization beyond the one-time initialization.

use std::collections::BTreeMap;
use std::sync::OnceLock;

use crate::schemata::error::ErrorCode;

static REGISTRY: OnceLock<BTreeMap<i16, ErrorCode>> = OnceLock::new();

fn registry() -> &'static BTreeMap<i16, ErrorCode> {
    REGISTRY.get_or_init(|| {
        ErrorCode::ALL
            .iter()
            .map(|error| (error.code(), *error))
            .collect()
    })
}

pub fn lookup(code: i16) -> Option<ErrorCode> {
    registry().get(&code).copied()
}

/// All registered error codes in ascending code order.
pub fn entries() -> impl ExactSizeIterator<Item = ErrorCode> {
    registry().values().copied()
}

pub fn len() -> usize {
    registry().len()
}
