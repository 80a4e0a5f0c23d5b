// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use std::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};

mod get;

pub use get::GetType;

/// The wire kind of a [`Value`](crate::Value).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Type {
	Undefined,
	Boolean,
	Float4,
	Float8,
	Int1,
	Int2,
	Int4,
	Int8,
	Int16,
	Uint1,
	Uint2,
	Uint4,
	Uint8,
	Uint16,
	Utf8,
	Blob,
	Uuid,
	Timestamp,
	Inet,
	Decimal,
	VarInt,
	Set,
	List,
	Map,
}

impl Display for Type {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		match self {
			Type::Undefined => f.write_str("UNDEFINED"),
			Type::Boolean => f.write_str("BOOLEAN"),
			Type::Float4 => f.write_str("FLOAT4"),
			Type::Float8 => f.write_str("FLOAT8"),
			Type::Int1 => f.write_str("INT1"),
			Type::Int2 => f.write_str("INT2"),
			Type::Int4 => f.write_str("INT4"),
			Type::Int8 => f.write_str("INT8"),
			Type::Int16 => f.write_str("INT16"),
			Type::Uint1 => f.write_str("UINT1"),
			Type::Uint2 => f.write_str("UINT2"),
			Type::Uint4 => f.write_str("UINT4"),
			Type::Uint8 => f.write_str("UINT8"),
			Type::Uint16 => f.write_str("UINT16"),
			Type::Utf8 => f.write_str("UTF8"),
			Type::Blob => f.write_str("BLOB"),
			Type::Uuid => f.write_str("UUID"),
			Type::Timestamp => f.write_str("TIMESTAMP"),
			Type::Inet => f.write_str("INET"),
			Type::Decimal => f.write_str("DECIMAL"),
			Type::VarInt => f.write_str("VARINT"),
			Type::Set => f.write_str("SET"),
			Type::List => f.write_str("LIST"),
			Type::Map => f.write_str("MAP"),
		}
	}
}
