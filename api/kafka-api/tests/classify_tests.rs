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

use insta::assert_compact_debug_snapshot;
use skein_kafka_api::check_error;
use skein_kafka_api::classify;
use skein_kafka_api::registry;
use skein_kafka_api::schemata::metadata::PartitionMetadata;
use skein_kafka_api::schemata::metadata::TopicMetadata;
use skein_kafka_api::schemata::response::ConsumerMetadataResponse;
use skein_kafka_api::schemata::response::FetchResponse;
use skein_kafka_api::schemata::response::OffsetCommitResponse;
use skein_kafka_api::schemata::response::OffsetFetchResponse;
use skein_kafka_api::schemata::response::OffsetResponse;
use skein_kafka_api::schemata::response::ProduceResponse;
use skein_kafka_api::BrokerResponseError;
use skein_kafka_api::ErrorCode;
use skein_kafka_api::KafkaError;

// The wire contract: code, canonical name, retriable.
const PROTOCOL_ERRORS: &[(i16, &str, bool)] = &[
    (-1, "UNKNOWN_SERVER_ERROR", false),
    (1, "OFFSET_OUT_OF_RANGE", false),
    (2, "CORRUPT_MESSAGE", true),
    (3, "UNKNOWN_TOPIC_OR_PARTITION", true),
    (4, "INVALID_FETCH_SIZE", false),
    (5, "LEADER_NOT_AVAILABLE", true),
    (6, "NOT_LEADER_FOR_PARTITION", true),
    (7, "REQUEST_TIMED_OUT", true),
    (8, "BROKER_NOT_AVAILABLE", false),
    (9, "REPLICA_NOT_AVAILABLE", false),
    (10, "MESSAGE_SIZE_TOO_LARGE", false),
    (11, "STALE_CONTROLLER_EPOCH", false),
    (12, "OFFSET_METADATA_TOO_LARGE", false),
    (13, "NETWORK_EXCEPTION", true),
    (14, "COORDINATOR_LOAD_IN_PROGRESS", true),
    (15, "COORDINATOR_NOT_AVAILABLE", true),
    (16, "NOT_COORDINATOR", true),
    (17, "INVALID_TOPIC_EXCEPTION", false),
    (18, "RECORD_LIST_TOO_LARGE", false),
    (19, "NOT_ENOUGH_REPLICAS", true),
    (20, "NOT_ENOUGH_REPLICAS_AFTER_APPEND", true),
    (21, "INVALID_REQUIRED_ACKS", false),
    (22, "ILLEGAL_GENERATION", false),
    (23, "INCONSISTENT_GROUP_PROTOCOL", false),
    (24, "INVALID_GROUP_ID", false),
    (25, "UNKNOWN_MEMBER_ID", false),
    (26, "INVALID_SESSION_TIMEOUT", false),
    (27, "REBALANCE_IN_PROGRESS", false),
    (28, "INVALID_COMMIT_OFFSET_SIZE", false),
    (29, "TOPIC_AUTHORIZATION_FAILED", false),
    (30, "GROUP_AUTHORIZATION_FAILED", false),
    (31, "CLUSTER_AUTHORIZATION_FAILED", false),
    (32, "INVALID_TIMESTAMP", false),
    (33, "UNSUPPORTED_SASL_MECHANISM", false),
    (34, "ILLEGAL_SASL_STATE", false),
    (35, "UNSUPPORTED_VERSION", false),
    (36, "TOPIC_ALREADY_EXISTS", false),
    (37, "INVALID_PARTITIONS", false),
    (38, "INVALID_REPLICATION_FACTOR", false),
    (39, "INVALID_REPLICA_ASSIGNMENT", false),
    (40, "INVALID_CONFIG", false),
    (41, "NOT_CONTROLLER", true),
    (42, "INVALID_REQUEST", false),
    (43, "UNSUPPORTED_FOR_MESSAGE_FORMAT", false),
    (44, "POLICY_VIOLATION", false),
    (45, "OUT_OF_ORDER_SEQUENCE_NUMBER", false),
    (46, "DUPLICATE_SEQUENCE_NUMBER", false),
    (47, "INVALID_PRODUCER_EPOCH", false),
    (48, "INVALID_TXN_STATE", false),
    (49, "INVALID_PRODUCER_ID_MAPPING", false),
    (50, "INVALID_TRANSACTION_TIMEOUT", false),
    (51, "CONCURRENT_TRANSACTIONS", false),
    (52, "TRANSACTION_COORDINATOR_FENCED", false),
    (53, "TRANSACTIONAL_ID_AUTHORIZATION_FAILED", false),
    (54, "SECURITY_DISABLED", false),
    (55, "OPERATION_NOT_ATTEMPTED", false),
    (56, "KAFKA_STORAGE_ERROR", true),
    (57, "LOG_DIR_NOT_FOUND", false),
    (58, "SASL_AUTHENTICATION_FAILED", false),
    (59, "UNKNOWN_PRODUCER_ID", false),
    (60, "REASSIGNMENT_IN_PROGRESS", false),
    (61, "DELEGATION_TOKEN_AUTH_DISABLED", false),
    (62, "DELEGATION_TOKEN_NOT_FOUND", false),
    (63, "DELEGATION_TOKEN_OWNER_MISMATCH", false),
    (64, "DELEGATION_TOKEN_REQUEST_NOT_ALLOWED", false),
    (65, "DELEGATION_TOKEN_AUTHORIZATION_FAILED", false),
    (66, "DELEGATION_TOKEN_EXPIRED", false),
    (67, "INVALID_PRINCIPAL_TYPE", false),
    (68, "NON_EMPTY_GROUP", false),
    (69, "GROUP_ID_NOT_FOUND", false),
    (70, "FETCH_SESSION_ID_NOT_FOUND", true),
    (71, "INVALID_FETCH_SESSION_EPOCH", true),
    (72, "LISTENER_NOT_FOUND", true),
];

#[test]
fn test_protocol_error_table() {
    assert_eq!(registry::len(), PROTOCOL_ERRORS.len());

    for &(code, name, retriable) in PROTOCOL_ERRORS {
        let error = classify(code).unwrap();
        assert_eq!(error.code(), code, "{name}");
        assert_eq!(error.name(), Some(name), "{code}");
        assert_eq!(error.retriable(), retriable, "{name}");
        assert!(matches!(error, BrokerResponseError::Known(_)), "{name}");
    }
}

#[test]
fn test_success() {
    assert_eq!(classify(0_i16), None);
    assert_eq!(check_error(0_i16), Ok(()));
}

#[test]
fn test_unknown_codes_are_preserved() {
    for code in [-2_i16, -101, 73, 119, 9999, i16::MIN, i16::MAX] {
        let error = classify(code).unwrap();
        assert_eq!(error, BrokerResponseError::Generic(code));
        assert_eq!(error.code(), code);
        assert_eq!(error.name(), None);
        assert!(!error.retriable());
        assert_eq!(check_error(code), Err(error));
    }
}

#[test]
fn test_snapshots() {
    assert_compact_debug_snapshot!(classify(3_i16), @"Some(Known(UNKNOWN_TOPIC_OR_PARTITION(3)))");
    assert_compact_debug_snapshot!(classify(18_i16), @"Some(Known(RECORD_LIST_TOO_LARGE(18)))");
    assert_compact_debug_snapshot!(classify(-2_i16), @"Some(Generic(-2))");
    assert_compact_debug_snapshot!(check_error(0_i16), @"Ok(())");
    assert_compact_debug_snapshot!(check_error(9999_i16), @"Err(Generic(9999))");
}

#[test]
fn test_legacy_aliases() {
    let cases = [
        (ErrorCode::STALE_LEADER_EPOCH_CODE, ErrorCode::NETWORK_EXCEPTION),
        (
            ErrorCode::OFFSETS_LOAD_IN_PROGRESS,
            ErrorCode::COORDINATOR_LOAD_IN_PROGRESS,
        ),
        (ErrorCode::INVALID_MESSAGE, ErrorCode::CORRUPT_MESSAGE),
        (
            ErrorCode::CONSUMER_COORDINATOR_NOT_AVAILABLE,
            ErrorCode::COORDINATOR_NOT_AVAILABLE,
        ),
        (
            ErrorCode::NOT_COORDINATOR_FOR_CONSUMER,
            ErrorCode::NOT_COORDINATOR,
        ),
    ];

    for (alias, canonical) in cases {
        assert_eq!(alias, canonical);
        assert_eq!(alias.code(), canonical.code());
        assert_eq!(alias.name(), canonical.name());
        assert_eq!(alias.retriable(), canonical.retriable());
        assert_eq!(classify(alias.code()), Some(BrokerResponseError::Known(alias)));
    }
}

#[test]
fn test_match_on_known_errors() {
    fn needs_metadata_refresh(error: &BrokerResponseError) -> bool {
        matches!(
            error,
            BrokerResponseError::Known(
                ErrorCode::UNKNOWN_TOPIC_OR_PARTITION
                    | ErrorCode::LEADER_NOT_AVAILABLE
                    | ErrorCode::NOT_LEADER_FOR_PARTITION
            )
        )
    }

    assert!(needs_metadata_refresh(&classify(6_i16).unwrap()));
    assert!(!needs_metadata_refresh(&classify(7_i16).unwrap()));
    assert!(!needs_metadata_refresh(&classify(9999_i16).unwrap()));
}

#[test]
fn test_response_shapes() {
    let produce = ProduceResponse {
        topic: "events".to_string(),
        partition: 0,
        error: 0,
        offset: 100,
    };
    assert_eq!(classify(&produce), classify(0_i16));
    assert_eq!(check_error(&produce), Ok(()));

    let fetch = FetchResponse {
        topic: "events".to_string(),
        partition: 0,
        error: 1,
        highwater_mark: -1,
        messages: vec![],
    };
    assert_eq!(
        classify(&fetch),
        Some(BrokerResponseError::Known(ErrorCode::OFFSET_OUT_OF_RANGE))
    );

    let offset = OffsetResponse {
        topic: "events".to_string(),
        partition: 0,
        error: 0,
        offsets: vec![42],
    };
    assert_eq!(classify(&offset), None);

    let commit = OffsetCommitResponse {
        topic: "events".to_string(),
        partition: 0,
        error: 9999,
    };
    assert_eq!(classify(&commit), Some(BrokerResponseError::Generic(9999)));

    let fetch_offset = OffsetFetchResponse {
        topic: "events".to_string(),
        partition: 0,
        offset: -1,
        metadata: String::new(),
        error: 15,
    };
    assert!(classify(&fetch_offset).unwrap().retriable());

    let coordinator = ConsumerMetadataResponse {
        error: 0,
        node_id: 1,
        host: "localhost".to_string(),
        port: 9092,
    };
    assert_eq!(classify(&coordinator), None);

    let partition = PartitionMetadata {
        topic: "events".to_string(),
        partition: 0,
        partition_error_code: 5,
        leader: -1,
        replicas: vec![1, 2],
        isr: vec![],
    };
    assert_eq!(
        classify(&partition),
        Some(BrokerResponseError::Known(ErrorCode::LEADER_NOT_AVAILABLE))
    );

    let topic = TopicMetadata {
        topic: "events".to_string(),
        topic_error_code: 3,
        partition_metadata: vec![partition],
    };
    assert_eq!(classify(&topic).and_then(|e| e.name()), Some("UNKNOWN_TOPIC_OR_PARTITION"));
}

#[test]
fn test_idempotent() {
    let before = registry::entries().collect::<Vec<_>>();
    for code in [-2_i16, -1, 0, 3, 18, 72, 9999] {
        assert_eq!(classify(code), classify(code));
        assert_eq!(check_error(code), check_error(code));
    }
    assert_eq!(registry::entries().collect::<Vec<_>>(), before);
}

#[test]
fn test_propagate_into_kafka_error() {
    fn commit(response: &OffsetCommitResponse) -> Result<i32, KafkaError> {
        check_error(response)?;
        Ok(response.partition)
    }

    let mut response = OffsetCommitResponse {
        topic: "events".to_string(),
        partition: 4,
        error: 0,
    };
    assert_eq!(commit(&response), Ok(4));

    response.error = 16;
    let err = commit(&response).unwrap_err();
    assert!(err.retriable());
    assert_eq!(
        err.broker_response(),
        Some(BrokerResponseError::Known(ErrorCode::NOT_COORDINATOR))
    );
}
