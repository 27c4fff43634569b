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
use crate::schemata::TopicAndPartition;

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Message {
    /// The message format version.
    pub magic: i8,
    /// The lowest bits carry the compression codec of the message.
    pub attributes: i8,
    pub key: Option<Vec<u8>>,
    pub value: Option<Vec<u8>>,
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct OffsetAndMessage {
    pub offset: i64,
    pub message: Message,
}

/// A consumed message together with where it came from.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SourcedMessage {
    pub topic: String,
    pub partition: i32,
    pub offset: i64,
    pub message: Message,
}

impl SourcedMessage {
    pub fn new(source: TopicAndPartition, message: OffsetAndMessage) -> SourcedMessage {
        SourcedMessage {
            topic: source.topic,
            partition: source.partition,
            offset: message.offset,
            message: message.message,
        }
    }

    pub fn offset_and_message(&self) -> OffsetAndMessage {
        OffsetAndMessage {
            offset: self.offset,
            message: self.message.clone(),
        }
    }
}

impl_topic_and_partition!(SourcedMessage);
