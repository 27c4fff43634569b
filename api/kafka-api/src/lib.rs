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

//! Typed Apache Kafka protocol error codes and the plain records that carry them.
//!
//! The broker reports failures as small integers. [`classify`] and [`check_error`] turn such an
//! integer, or any response implementing [`HasErrorCode`], into a [`BrokerResponseError`] that
//! retry logic can match on and ask whether the request is [retriable].
//!
//! [retriable]: BrokerResponseError::retriable

pub mod consts;
pub mod registry;
pub mod schemata;

mod classify;
mod error;

pub use classify::check_error;
pub use classify::classify;
pub use error::BrokerResponseError;
pub use error::KafkaError;
pub use schemata::error::ErrorCode;
pub use schemata::HasErrorCode;
pub use schemata::TopicAndPartition;
