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

use crate::schemata::error::ErrorCode;
use crate::schemata::TopicAndPartition;

/// An error reported by the broker in a response.
///
/// [`crate::classify`] produces `Known` for every code in [`ErrorCode::ALL`] and `Generic` for
/// any other non-zero code, so a broker newer than this client never breaks classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, thiserror::Error)]
pub enum BrokerResponseError {
    #[error("broker responded with {0}")]
    Known(ErrorCode),
    #[error("broker responded with unrecognized error code {0}")]
    Generic(i16),
}

impl BrokerResponseError {
    pub fn code(&self) -> i16 {
        match self {
            BrokerResponseError::Known(error) => error.code(),
            BrokerResponseError::Generic(code) => *code,
        }
    }

    /// The canonical protocol name, or `None` if the code is unknown to this client version.
    pub fn name(&self) -> Option<&'static str> {
        self.known().map(|error| error.name())
    }

    pub fn description(&self) -> Option<&'static str> {
        self.known().map(|error| error.description())
    }

    pub fn retriable(&self) -> bool {
        self.known().is_some_and(|error| error.retriable())
    }

    pub fn known(&self) -> Option<ErrorCode> {
        match self {
            BrokerResponseError::Known(error) => Some(*error),
            BrokerResponseError::Generic(_) => None,
        }
    }
}

impl From<ErrorCode> for BrokerResponseError {
    fn from(error: ErrorCode) -> Self {
        BrokerResponseError::Known(error)
    }
}

/// Failures surfaced by a client, either reported by a broker or detected locally.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum KafkaError {
    #[error(transparent)]
    BrokerResponse(#[from] BrokerResponseError),
    #[error("client error: {0}")]
    Client(String),
    #[error("consumer is already running")]
    Restart,
    #[error("consumer is not running")]
    Restop,
    #[error("duplicate request id {0}")]
    DuplicateRequest(i32),
    #[error("no broker is available: {0}")]
    KafkaUnavailable(String),
    #[error("no leader for {0}")]
    LeaderUnavailable(TopicAndPartition),
    #[error("partition {0} is unavailable")]
    PartitionUnavailable(TopicAndPartition),
    #[error("requests failed for {} partitions", .0.len())]
    FailedPayloads(Vec<TopicAndPartition>),
    #[error("connection error: {0}")]
    Connection(String),
    #[error("not enough data to decode")]
    BufferUnderflow,
    #[error("message checksum mismatch")]
    Checksum,
    #[error("fetch size too small to hold a single message")]
    ConsumerFetchSizeTooSmall,
    #[error("protocol error: {0}")]
    Protocol(String),
    #[error("unsupported compression codec {0}")]
    UnsupportedCodec(i8),
    #[error("request cancelled (request sent: {request_sent})")]
    Cancelled { request_sent: bool },
    #[error("invalid consumer group: {0}")]
    InvalidConsumerGroup(String),
    #[error("no response received")]
    NoResponse,
    #[error("another operation is in progress")]
    OperationInProgress,
}

impl KafkaError {
    /// Only broker response errors are ever retriable; client-detected failures need the caller
    /// to change something first.
    pub fn retriable(&self) -> bool {
        self.broker_response()
            .is_some_and(|error| error.retriable())
    }

    pub fn broker_response(&self) -> Option<BrokerResponseError> {
        match self {
            KafkaError::BrokerResponse(error) => Some(*error),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generic_error_has_no_name() {
        let error = BrokerResponseError::Generic(9999);
        assert_eq!(error.code(), 9999);
        assert_eq!(error.name(), None);
        assert_eq!(error.description(), None);
        assert!(!error.retriable());
        assert_eq!(
            error.to_string(),
            "broker responded with unrecognized error code 9999"
        );
    }

    #[test]
    fn test_known_error_delegates() {
        let error = BrokerResponseError::from(ErrorCode::LEADER_NOT_AVAILABLE);
        assert_eq!(error.code(), 5);
        assert_eq!(error.name(), Some("LEADER_NOT_AVAILABLE"));
        assert!(error.retriable());
        assert_eq!(
            error.to_string(),
            "broker responded with LEADER_NOT_AVAILABLE (5)"
        );
    }

    #[test]
    fn test_kafka_error_retriable() {
        let error = KafkaError::from(BrokerResponseError::Known(ErrorCode::REQUEST_TIMED_OUT));
        assert!(error.retriable());
        assert_eq!(
            error.to_string(),
            "broker responded with REQUEST_TIMED_OUT (7)"
        );

        let error = KafkaError::from(BrokerResponseError::Known(ErrorCode::INVALID_CONFIG));
        assert!(!error.retriable());

        let error = KafkaError::LeaderUnavailable(TopicAndPartition::new("events", 0));
        assert!(!error.retriable());
        assert_eq!(error.broker_response(), None);
        assert_eq!(error.to_string(), "no leader for events-0");

        let error = KafkaError::FailedPayloads(vec![
            TopicAndPartition::new("events", 0),
            TopicAndPartition::new("events", 1),
        ]);
        assert_eq!(error.to_string(), "requests failed for 2 partitions");
    }
}
