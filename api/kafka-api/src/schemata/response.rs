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

use crate::schemata::impl_has_error_code;
use crate::schemata::impl_topic_and_partition;
use crate::schemata::message::OffsetAndMessage;
use crate::schemata::message::SourcedMessage;
use crate::schemata::metadata::BrokerMetadata;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProduceResponse {
    pub topic: String,
    pub partition: i32,
    /// The error code, or 0 if there was no error.
    pub error: i16,
    /// The offset assigned to the first message in the produced set.
    pub offset: i64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FetchResponse {
    pub topic: String,
    pub partition: i32,
    /// The error code, or 0 if there was no error.
    pub error: i16,
    /// The offset at the end of the log for this partition.
    pub highwater_mark: i64,
    pub messages: Vec<OffsetAndMessage>,
}

impl FetchResponse {
    /// The fetched messages tagged with the topic and partition they were read from.
    pub fn sourced_messages(&self) -> impl Iterator<Item = SourcedMessage> + '_ {
        self.messages
            .iter()
            .map(|m| SourcedMessage::new(self.topic_and_partition(), m.clone()))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OffsetResponse {
    pub topic: String,
    pub partition: i32,
    /// The error code, or 0 if there was no error.
    pub error: i16,
    pub offsets: Vec<i64>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OffsetCommitResponse {
    pub topic: String,
    pub partition: i32,
    /// The error code, or 0 if there was no error.
    pub error: i16,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OffsetFetchResponse {
    pub topic: String,
    pub partition: i32,
    /// The last committed offset, or [`crate::consts::OFFSET_NOT_COMMITTED`].
    pub offset: i64,
    pub metadata: String,
    /// The error code, or 0 if there was no error.
    pub error: i16,
}

/// The answer to a consumer coordinator lookup.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConsumerMetadataResponse {
    /// The error code, or 0 if there was no error.
    pub error: i16,
    pub node_id: i32,
    pub host: String,
    pub port: i32,
}

impl ConsumerMetadataResponse {
    pub fn coordinator(&self) -> BrokerMetadata {
        BrokerMetadata {
            node_id: self.node_id,
            host: self.host.clone(),
            port: self.port,
        }
    }
}

impl_topic_and_partition!(
    ProduceResponse,
    FetchResponse,
    OffsetResponse,
    OffsetCommitResponse,
    OffsetFetchResponse,
);

impl_has_error_code!(
    ProduceResponse => error,
    FetchResponse => error,
    OffsetResponse => error,
    OffsetCommitResponse => error,
    OffsetFetchResponse => error,
    ConsumerMetadataResponse => error,
);
