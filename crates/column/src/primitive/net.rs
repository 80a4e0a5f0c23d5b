// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use std::net::IpAddr;

use rowbind_type::Value;

use super::Primitive;

impl Primitive for IpAddr {
	fn to_wire(&self) -> Value {
		Value::Inet(*self)
	}

	fn from_wire(value: &Value) -> Option<Self> {
		match value {
			Value::Inet(v) => Some(*v),
			_ => None,
		}
	}
}
