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

use crate::schemata::impl_topic_and_partition;
use crate::schemata::message::Message;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProduceRequest {
    pub topic: String,
    pub partition: i32,
    pub messages: Vec<Message>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FetchRequest {
    pub topic: String,
    pub partition: i32,
    /// The offset to begin this fetch from.
    pub offset: i64,
    /// The maximum bytes to include in the message set for this partition.
    pub max_bytes: i32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OffsetRequest {
    pub topic: String,
    pub partition: i32,
    /// Milliseconds since epoch, or one of [`crate::consts::OFFSET_EARLIEST`] and
    /// [`crate::consts::OFFSET_LATEST`].
    pub time: i64,
    pub max_offsets: i32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OffsetCommitRequest {
    pub topic: String,
    pub partition: i32,
    pub offset: i64,
    /// [`crate::consts::TIMESTAMP_INVALID`] lets the broker set the commit time.
    pub timestamp: i64,
    pub metadata: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OffsetFetchRequest {
    pub topic: String,
    pub partition: i32,
}

impl_topic_and_partition!(
    ProduceRequest,
    FetchRequest,
    OffsetRequest,
    OffsetCommitRequest,
    OffsetFetchRequest,
);
