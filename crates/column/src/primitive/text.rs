// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use rowbind_type::Value;

use super::Primitive;

impl Primitive for String {
	fn to_wire(&self) -> Value {
		Value::Utf8(self.clone())
	}

	fn from_wire(value: &Value) -> Option<Self> {
		match value {
			Value::Utf8(v) => Some(v.clone()),
			_ => None,
		}
	}
}

impl Primitive for Vec<u8> {
	fn to_wire(&self) -> Value {
		Value::Blob(self.clone())
	}

	fn from_wire(value: &Value) -> Option<Self> {
		match value {
			Value::Blob(v) => Some(v.clone()),
			_ => None,
		}
	}
}

#[cfg(test)]
mod tests {
	use rowbind_type::Value;

	use super::Primitive;
	use crate::primitive::tests::round_trip;

	#[test]
	fn test_round_trip() {
		assert_eq!(round_trip(&"héllo".to_string()), Some("héllo".to_string()));
		assert_eq!(round_trip(&String::new()), Some(String::new()));
		assert_eq!(round_trip(&vec![0u8, 1, 255]), Some(vec![0u8, 1, 255]));
	}

	#[test]
	fn test_text_is_not_blob() {
		assert_eq!(Vec::<u8>::from_wire(&Value::utf8("abc")), None);
		assert_eq!(String::from_wire(&Value::blob(b"abc".to_vec())), None);
	}
}
