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

//! Plain records exchanged with the decoding layer.
//!
//! Every record is produced once from a decoded frame and never mutated afterward. Records that
//! describe a broker answer implement [`HasErrorCode`] so that they can be handed to
//! [`crate::classify`] directly.

use serde::Deserialize;
use serde::Serialize;

pub mod error;
pub mod message;
pub mod metadata;
pub mod request;
pub mod response;

/// A value carrying a raw protocol error code, where `0` means success.
pub trait HasErrorCode {
    fn error_code(&self) -> i16;
}

impl HasErrorCode for i16 {
    fn error_code(&self) -> i16 {
        *self
    }
}

impl<T: HasErrorCode + ?Sized> HasErrorCode for &T {
    fn error_code(&self) -> i16 {
        (**self).error_code()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct TopicAndPartition {
    pub topic: String,
    pub partition: i32,
}

impl TopicAndPartition {
    pub fn new(topic: impl Into<String>, partition: i32) -> TopicAndPartition {
        TopicAndPartition {
            topic: topic.into(),
            partition,
        }
    }
}

impl std::fmt::Display for TopicAndPartition {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}-{}", self.topic, self.partition)
    }
}

// Implements `topic_and_partition` for records that carry `topic` and `partition` fields.
macro_rules! impl_topic_and_partition {
    ($($ty:ty),+ $(,)?) => {
        $(impl $ty {
            pub fn topic_and_partition(&self) -> $crate::schemata::TopicAndPartition {
                $crate::schemata::TopicAndPartition::new(self.topic.clone(), self.partition)
            }
        })+
    };
}

// Implements `HasErrorCode` for records whose error code lives in the named field.
macro_rules! impl_has_error_code {
    ($($ty:ty => $field:ident),+ $(,)?) => {
        $(impl $crate::schemata::HasErrorCode for $ty {
            fn error_code(&self) -> i16 {
                self.$field
            }
        })+
    };
}

pub(crate) use impl_has_error_code;
pub(crate) use impl_topic_and_partition;
