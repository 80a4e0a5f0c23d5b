// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use rowbind_type::Value;
use uuid::Uuid;

use super::Primitive;

impl Primitive for Uuid {
	fn to_wire(&self) -> Value {
		Value::Uuid(*self)
	}

	fn from_wire(value: &Value) -> Option<Self> {
		match value {
			Value::Uuid(v) => Some(*v),
			_ => None,
		}
	}
}
