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

use crate::consts::KAFKA_SUCCESS;
use crate::error::BrokerResponseError;
use crate::registry;
use crate::schemata::HasErrorCode;

/// Classifies the error code of a response, or a bare code.
///
/// Returns `None` on success. Codes missing from the registry, including negative codes other
/// than `-1`, become [`BrokerResponseError::Generic`] with the code preserved.
///
/// ```
/// use skein_kafka_api::classify;
/// use skein_kafka_api::ErrorCode;
///
/// assert_eq!(classify(0_i16), None);
/// let error = classify(6_i16).unwrap();
/// assert_eq!(error.known(), Some(ErrorCode::NOT_LEADER_FOR_PARTITION));
/// assert!(error.retriable());
/// assert_eq!(classify(9999_i16).unwrap().name(), None);
/// ```
pub fn classify<T: HasErrorCode>(source: T) -> Option<BrokerResponseError> {
    let code = source.error_code();
    if code == KAFKA_SUCCESS {
        return None;
    }

    Some(match registry::lookup(code) {
        Some(error) => BrokerResponseError::Known(error),
        None => BrokerResponseError::Generic(code),
    })
}

/// Same as [`classify`], but signals the error so that callers can propagate it with `?`.
pub fn check_error<T: HasErrorCode>(source: T) -> Result<(), BrokerResponseError> {
    match classify(source) {
        Some(error) => Err(error),
        None => Ok(()),
    }
}
