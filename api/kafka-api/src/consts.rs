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

pub const DEFAULT_KAFKA_PORT: u16 = 9092;

// Special values of `OffsetRequest::time`.
pub const OFFSET_EARLIEST: i64 = -2;
pub const OFFSET_LATEST: i64 = -1;

/// Returned by the broker when no offset is stored for a group.
pub const OFFSET_NOT_COMMITTED: i64 = -1;
/// Reserved by the client; far from any value the broker may return.
pub const OFFSET_COMMITTED: i64 = -101;

/// Asks the broker to assign the timestamp itself.
pub const TIMESTAMP_INVALID: i64 = -1;

/// The error code of a successful response.
pub const KAFKA_SUCCESS: i16 = 0;

pub const PRODUCER_ACK_NOT_REQUIRED: i16 = 0;
/// Respond once the leader has written the messages to its log.
pub const PRODUCER_ACK_LOCAL_WRITE: i16 = 1;
/// Respond once all in-sync replicas have the messages.
pub const PRODUCER_ACK_ALL_REPLICAS: i16 = -1;
