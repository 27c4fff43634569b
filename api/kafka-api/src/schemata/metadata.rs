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

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct BrokerMetadata {
    pub node_id: i32,
    pub host: String,
    pub port: i32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PartitionMetadata {
    pub topic: String,
    pub partition: i32,
    pub partition_error_code: i16,
    /// The node id of the leader, or -1 during a leader election.
    pub leader: i32,
    pub replicas: Vec<i32>,
    /// The in-sync subset of `replicas`.
    pub isr: Vec<i32>,
}

impl PartitionMetadata {
    pub fn has_leader(&self) -> bool {
        self.leader >= 0
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TopicMetadata {
    pub topic: String,
    pub topic_error_code: i16,
    pub partition_metadata: Vec<PartitionMetadata>,
}

impl TopicMetadata {
    pub fn partition(&self, partition: i32) -> Option<&PartitionMetadata> {
        self.partition_metadata
            .iter()
            .find(|p| p.partition == partition)
    }
}

impl_topic_and_partition!(PartitionMetadata);

impl_has_error_code!(
    PartitionMetadata => partition_error_code,
    TopicMetadata => topic_error_code,
);
