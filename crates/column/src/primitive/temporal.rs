// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use std::time::{Duration, SystemTime, UNIX_EPOCH};

use rowbind_type::Value;

use super::Primitive;

/// Timestamps are stored with millisecond precision; anything finer is
/// truncated toward the epoch.
impl Primitive for SystemTime {
	fn to_wire(&self) -> Value {
		let millis = match self.duration_since(UNIX_EPOCH) {
			Ok(after) => i64::try_from(after.as_millis()).unwrap_or(i64::MAX),
			Err(before) => i64::try_from(before.duration().as_millis()).map(|m| -m).unwrap_or(i64::MIN),
		};
		Value::Timestamp(millis)
	}

	fn from_wire(value: &Value) -> Option<Self> {
		match value {
			Value::Timestamp(millis) if *millis >= 0 => {
				UNIX_EPOCH.checked_add(Duration::from_millis(millis.unsigned_abs()))
			}
			Value::Timestamp(millis) => UNIX_EPOCH.checked_sub(Duration::from_millis(millis.unsigned_abs())),
			_ => None,
		}
	}
}

#[cfg(test)]
mod tests {
	use std::time::{Duration, SystemTime, UNIX_EPOCH};

	use rowbind_type::Value;

	use super::Primitive;
	use crate::primitive::tests::round_trip;

	#[test]
	fn test_round_trip() {
		let after = UNIX_EPOCH + Duration::from_millis(1_700_000_000_123);
		let before = UNIX_EPOCH - Duration::from_millis(86_400_000);
		assert_eq!(round_trip(&after), Some(after));
		assert_eq!(round_trip(&before), Some(before));
		assert_eq!(round_trip(&UNIX_EPOCH), Some(UNIX_EPOCH));
	}

	#[test]
	fn test_wire_is_millis() {
		let at = UNIX_EPOCH + Duration::from_millis(42);
		assert_eq!(at.to_wire(), Value::Timestamp(42));
		assert_eq!((UNIX_EPOCH - Duration::from_millis(42)).to_wire(), Value::Timestamp(-42));
	}

	#[test]
	fn test_sub_millisecond_truncated() {
		let at = UNIX_EPOCH + Duration::from_micros(1_500);
		assert_eq!(SystemTime::from_wire(&at.to_wire()), Some(UNIX_EPOCH + Duration::from_millis(1)));
	}
}
