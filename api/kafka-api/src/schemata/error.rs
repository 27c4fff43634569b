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

// Derived:
// https://kafka.apache.org/protocol.html#protocol_error_codes

use std::fmt;

/// A protocol error code known to this client.
///
/// Values can only be obtained from the associated constants, so every `ErrorCode` in the
/// program is one row of the table below. Use [`crate::classify`] to turn a raw code from a
/// response into an `ErrorCode` (or a generic error when the code is newer than this table).
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct ErrorCode {
    code: i16,
    name: &'static str,
    description: &'static str,
    retriable: bool,
}

impl ErrorCode {
    const fn new(
        code: i16,
        name: &'static str,
        description: &'static str,
        retriable: bool,
    ) -> ErrorCode {
        ErrorCode {
            code,
            name,
            description,
            retriable,
        }
    }

    pub fn code(&self) -> i16 {
        self.code
    }

    /// The canonical upper-snake name, e.g. `NOT_LEADER_FOR_PARTITION`.
    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn description(&self) -> &'static str {
        self.description
    }

    /// Whether the failed request may be resent as is. Some retriable errors require a
    /// metadata refresh before the retry can succeed.
    pub fn retriable(&self) -> bool {
        self.retriable
    }
}

impl fmt::Debug for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple(self.name).field(&self.code).finish()
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.name, self.code)
    }
}

// Each row declares one constant named after the protocol name of the code. Rows must stay in
// code order since `ALL` is listed in declaration order.
macro_rules! define_error_codes {
    ($($name:ident = ($code:literal, $retriable:literal, $description:literal);)+) => {
        impl ErrorCode {
            $(pub const $name: Self = Self::new($code, stringify!($name), $description, $retriable);)+

            /// Every error code known to this client, in code order.
            pub const ALL: &'static [ErrorCode] = &[$(Self::$name),+];
        }
    };
}

define_error_codes! {
    UNKNOWN_SERVER_ERROR = (-1, false, "The server experienced an unexpected error when processing the request.");
    OFFSET_OUT_OF_RANGE = (1, false, "The requested offset is not within the range of offsets maintained by the server.");
    CORRUPT_MESSAGE = (2, true, "This message has failed its CRC checksum, exceeds the valid size, has a null key for a compacted topic, or is otherwise corrupt.");
    UNKNOWN_TOPIC_OR_PARTITION = (3, true, "This server does not host this topic-partition.");
    INVALID_FETCH_SIZE = (4, false, "The requested fetch size is invalid.");
    LEADER_NOT_AVAILABLE = (5, true, "There is no leader for this topic-partition as we are in the middle of a leadership election.");
    NOT_LEADER_FOR_PARTITION = (6, true, "This server is not the leader for that topic-partition.");
    REQUEST_TIMED_OUT = (7, true, "The request timed out.");
    BROKER_NOT_AVAILABLE = (8, false, "The broker is not available.");
    REPLICA_NOT_AVAILABLE = (9, false, "The replica is not available for the requested topic-partition.");
    MESSAGE_SIZE_TOO_LARGE = (10, false, "The request included a message larger than the max message size the server will accept.");
    STALE_CONTROLLER_EPOCH = (11, false, "The controller moved to another broker.");
    OFFSET_METADATA_TOO_LARGE = (12, false, "The metadata field of the offset request was too large.");
    NETWORK_EXCEPTION = (13, true, "The server disconnected before a response was received.");
    COORDINATOR_LOAD_IN_PROGRESS = (14, true, "The coordinator is loading and hence can't process requests.");
    COORDINATOR_NOT_AVAILABLE = (15, true, "The coordinator is not available.");
    NOT_COORDINATOR = (16, true, "This is not the correct coordinator.");
    INVALID_TOPIC_EXCEPTION = (17, false, "The request attempted to perform an operation on an invalid topic.");
    RECORD_LIST_TOO_LARGE = (18, false, "The request included message batch larger than the configured segment size on the server.");
    NOT_ENOUGH_REPLICAS = (19, true, "Messages are rejected since there are fewer in-sync replicas than required.");
    NOT_ENOUGH_REPLICAS_AFTER_APPEND = (20, true, "Messages are written to the log, but to fewer in-sync replicas than required.");
    INVALID_REQUIRED_ACKS = (21, false, "Produce request specified an invalid value for required acks.");
    ILLEGAL_GENERATION = (22, false, "Specified group generation id is not valid.");
    INCONSISTENT_GROUP_PROTOCOL = (23, false, "The group member's supported protocols are incompatible with those of existing members or first group member tried to join with empty protocol type or empty protocol list.");
    INVALID_GROUP_ID = (24, false, "The configured groupId is invalid.");
    UNKNOWN_MEMBER_ID = (25, false, "The coordinator is not aware of this member.");
    INVALID_SESSION_TIMEOUT = (26, false, "The session timeout is not within the range allowed by the broker (as configured by group.min.session.timeout.ms and group.max.session.timeout.ms).");
    REBALANCE_IN_PROGRESS = (27, false, "The group is rebalancing, so a rejoin is needed.");
    INVALID_COMMIT_OFFSET_SIZE = (28, false, "The committing offset data size is not valid.");
    TOPIC_AUTHORIZATION_FAILED = (29, false, "Topic authorization failed.");
    GROUP_AUTHORIZATION_FAILED = (30, false, "Group authorization failed.");
    CLUSTER_AUTHORIZATION_FAILED = (31, false, "Cluster authorization failed.");
    INVALID_TIMESTAMP = (32, false, "The timestamp of the message is out of acceptable range.");
    UNSUPPORTED_SASL_MECHANISM = (33, false, "The broker does not support the requested SASL mechanism.");
    ILLEGAL_SASL_STATE = (34, false, "Request is not valid given the current SASL state.");
    UNSUPPORTED_VERSION = (35, false, "The version of API is not supported.");
    TOPIC_ALREADY_EXISTS = (36, false, "Topic with this name already exists.");
    INVALID_PARTITIONS = (37, false, "Number of partitions is below 1.");
    INVALID_REPLICATION_FACTOR = (38, false, "Replication factor is below 1 or larger than the number of available brokers.");
    INVALID_REPLICA_ASSIGNMENT = (39, false, "Replica assignment is invalid.");
    INVALID_CONFIG = (40, false, "Configuration is invalid.");
    NOT_CONTROLLER = (41, true, "This is not the correct controller for this cluster.");
    INVALID_REQUEST = (42, false, "This most likely occurs because of a request being malformed by the client library or the message was sent to an incompatible broker. See the broker logs for more details.");
    UNSUPPORTED_FOR_MESSAGE_FORMAT = (43, false, "The message format version on the broker does not support the request.");
    POLICY_VIOLATION = (44, false, "Request parameters do not satisfy the configured policy.");
    OUT_OF_ORDER_SEQUENCE_NUMBER = (45, false, "The broker received an out of order sequence number.");
    DUPLICATE_SEQUENCE_NUMBER = (46, false, "The broker received a duplicate sequence number.");
    INVALID_PRODUCER_EPOCH = (47, false, "Producer attempted to produce with an old epoch.");
    INVALID_TXN_STATE = (48, false, "The producer attempted a transactional operation in an invalid state.");
    INVALID_PRODUCER_ID_MAPPING = (49, false, "The producer attempted to use a producer id which is not currently assigned to its transactional id.");
    INVALID_TRANSACTION_TIMEOUT = (50, false, "The transaction timeout is larger than the maximum value allowed by the broker (as configured by transaction.max.timeout.ms).");
    CONCURRENT_TRANSACTIONS = (51, false, "The producer attempted to update a transaction while another concurrent operation on the same transaction was ongoing.");
    TRANSACTION_COORDINATOR_FENCED = (52, false, "Indicates that the transaction coordinator sending a WriteTxnMarker is no longer the current coordinator for a given producer.");
    TRANSACTIONAL_ID_AUTHORIZATION_FAILED = (53, false, "Transactional Id authorization failed.");
    SECURITY_DISABLED = (54, false, "Security features are disabled.");
    OPERATION_NOT_ATTEMPTED = (55, false, "The broker did not attempt to execute this operation. This may happen for batched RPCs where some operations in the batch failed, causing the broker to respond without trying the rest.");
    KAFKA_STORAGE_ERROR = (56, true, "Disk error when trying to access log file on the disk.");
    LOG_DIR_NOT_FOUND = (57, false, "The user-specified log directory is not found in the broker config.");
    SASL_AUTHENTICATION_FAILED = (58, false, "SASL Authentication failed.");
    UNKNOWN_PRODUCER_ID = (59, false, "The broker could not locate the producer metadata associated with the producer id in question.");
    REASSIGNMENT_IN_PROGRESS = (60, false, "A partition reassignment is in progress.");
    DELEGATION_TOKEN_AUTH_DISABLED = (61, false, "Delegation Token feature is not enabled.");
    DELEGATION_TOKEN_NOT_FOUND = (62, false, "Delegation Token is not found on server.");
    DELEGATION_TOKEN_OWNER_MISMATCH = (63, false, "Specified Principal is not valid Owner/Renewer.");
    DELEGATION_TOKEN_REQUEST_NOT_ALLOWED = (64, false, "Delegation Token requests are not allowed on PLAINTEXT/1-way SSL channels and on delegation token authenticated channels.");
    DELEGATION_TOKEN_AUTHORIZATION_FAILED = (65, false, "Delegation Token authorization failed.");
    DELEGATION_TOKEN_EXPIRED = (66, false, "Delegation Token is expired.");
    INVALID_PRINCIPAL_TYPE = (67, false, "Supplied principalType is not supported.");
    NON_EMPTY_GROUP = (68, false, "The group is not empty.");
    GROUP_ID_NOT_FOUND = (69, false, "The group id does not exist.");
    FETCH_SESSION_ID_NOT_FOUND = (70, true, "The fetch session ID was not found.");
    INVALID_FETCH_SESSION_EPOCH = (71, true, "The fetch session epoch is invalid.");
    LISTENER_NOT_FOUND = (72, true, "There is no listener on the leader broker that matches the listener on which metadata request was processed.");
}

// Names used by older protocol revisions. They are the same values as their canonical
// counterparts, not additional codes.
impl ErrorCode {
    pub const INVALID_MESSAGE: Self = Self::CORRUPT_MESSAGE;
    pub const STALE_LEADER_EPOCH_CODE: Self = Self::NETWORK_EXCEPTION;
    pub const OFFSETS_LOAD_IN_PROGRESS: Self = Self::COORDINATOR_LOAD_IN_PROGRESS;
    pub const CONSUMER_COORDINATOR_NOT_AVAILABLE: Self = Self::COORDINATOR_NOT_AVAILABLE;
    pub const NOT_COORDINATOR_FOR_CONSUMER: Self = Self::NOT_COORDINATOR;
}
