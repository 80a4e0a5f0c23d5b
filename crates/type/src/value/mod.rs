// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use std::{
	fmt::{Display, Formatter},
	net::IpAddr,
};

use bigdecimal::BigDecimal;
use num_bigint::BigInt;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

mod into;
pub mod ordered_float;
pub mod r#type;

pub use ordered_float::{OrderedF32, OrderedF64};
pub use r#type::{GetType, Type};

/// A column value in the store's native wire representation.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Value {
	/// The store's null
	Undefined,
	/// `BOOLEAN`
	Boolean(bool),
	/// `FLOAT4`; NaN is stored as `Undefined`
	Float4(OrderedF32),
	/// `FLOAT8`; NaN is stored as `Undefined`
	Float8(OrderedF64),
	/// `INT1`
	Int1(i8),
	/// `INT2`
	Int2(i16),
	/// `INT4`
	Int4(i32),
	/// `INT8`
	Int8(i64),
	/// `INT16`
	Int16(i128),
	/// `UINT1`
	Uint1(u8),
	/// `UINT2`
	Uint2(u16),
	/// `UINT4`
	Uint4(u32),
	/// `UINT8`
	Uint8(u64),
	/// `UINT16`
	Uint16(u128),
	/// `UTF8` text; also carries JSON and enumeration names
	Utf8(String),
	/// `BLOB`
	Blob(Vec<u8>),
	/// `UUID`, any version
	Uuid(Uuid),
	/// Milliseconds since the Unix epoch
	Timestamp(i64),
	/// An IPv4 or IPv6 address
	Inet(IpAddr),
	/// An arbitrary-precision decimal
	Decimal(BigDecimal),
	/// An arbitrary-precision signed integer
	VarInt(BigInt),
	/// A native set; elements are unique
	Set(Vec<Value>),
	/// A native ordered list
	List(Vec<Value>),
	/// A native map of key/value pairs
	Map(Vec<(Value, Value)>),
}

impl Value {
	pub fn undefined() -> Self {
		Value::Undefined
	}

	pub fn bool(v: impl Into<bool>) -> Self {
		Value::Boolean(v.into())
	}

	pub fn float4(v: impl Into<f32>) -> Self {
		OrderedF32::try_from(v.into()).map(Value::Float4).unwrap_or(Value::Undefined)
	}

	pub fn float8(v: impl Into<f64>) -> Self {
		OrderedF64::try_from(v.into()).map(Value::Float8).unwrap_or(Value::Undefined)
	}

	pub fn int1(v: impl Into<i8>) -> Self {
		Value::Int1(v.into())
	}

	pub fn int2(v: impl Into<i16>) -> Self {
		Value::Int2(v.into())
	}

	pub fn int4(v: impl Into<i32>) -> Self {
		Value::Int4(v.into())
	}

	pub fn int8(v: impl Into<i64>) -> Self {
		Value::Int8(v.into())
	}

	pub fn int16(v: impl Into<i128>) -> Self {
		Value::Int16(v.into())
	}

	pub fn uint1(v: impl Into<u8>) -> Self {
		Value::Uint1(v.into())
	}

	pub fn uint2(v: impl Into<u16>) -> Self {
		Value::Uint2(v.into())
	}

	pub fn uint4(v: impl Into<u32>) -> Self {
		Value::Uint4(v.into())
	}

	pub fn uint8(v: impl Into<u64>) -> Self {
		Value::Uint8(v.into())
	}

	pub fn uint16(v: impl Into<u128>) -> Self {
		Value::Uint16(v.into())
	}

	pub fn utf8(v: impl Into<String>) -> Self {
		Value::Utf8(v.into())
	}

	pub fn blob(v: impl Into<Vec<u8>>) -> Self {
		Value::Blob(v.into())
	}

	pub fn uuid(v: impl Into<Uuid>) -> Self {
		Value::Uuid(v.into())
	}

	pub fn timestamp(millis: impl Into<i64>) -> Self {
		Value::Timestamp(millis.into())
	}

	pub fn inet(v: impl Into<IpAddr>) -> Self {
		Value::Inet(v.into())
	}

	pub fn decimal(v: impl Into<BigDecimal>) -> Self {
		Value::Decimal(v.into())
	}

	pub fn varint(v: impl Into<BigInt>) -> Self {
		Value::VarInt(v.into())
	}

	pub fn set(elements: impl IntoIterator<Item = Value>) -> Self {
		Value::Set(elements.into_iter().collect())
	}

	pub fn list(elements: impl IntoIterator<Item = Value>) -> Self {
		Value::List(elements.into_iter().collect())
	}

	pub fn map(entries: impl IntoIterator<Item = (Value, Value)>) -> Self {
		Value::Map(entries.into_iter().collect())
	}

	pub fn is_defined(&self) -> bool {
		!matches!(self, Value::Undefined)
	}

	pub fn is_undefined(&self) -> bool {
		matches!(self, Value::Undefined)
	}

	pub fn get_type(&self) -> Type {
		match self {
			Value::Undefined => Type::Undefined,
			Value::Boolean(_) => Type::Boolean,
			Value::Float4(_) => Type::Float4,
			Value::Float8(_) => Type::Float8,
			Value::Int1(_) => Type::Int1,
			Value::Int2(_) => Type::Int2,
			Value::Int4(_) => Type::Int4,
			Value::Int8(_) => Type::Int8,
			Value::Int16(_) => Type::Int16,
			Value::Uint1(_) => Type::Uint1,
			Value::Uint2(_) => Type::Uint2,
			Value::Uint4(_) => Type::Uint4,
			Value::Uint8(_) => Type::Uint8,
			Value::Uint16(_) => Type::Uint16,
			Value::Utf8(_) => Type::Utf8,
			Value::Blob(_) => Type::Blob,
			Value::Uuid(_) => Type::Uuid,
			Value::Timestamp(_) => Type::Timestamp,
			Value::Inet(_) => Type::Inet,
			Value::Decimal(_) => Type::Decimal,
			Value::VarInt(_) => Type::VarInt,
			Value::Set(_) => Type::Set,
			Value::List(_) => Type::List,
			Value::Map(_) => Type::Map,
		}
	}
}

impl Display for Value {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		match self {
			Value::Undefined => f.write_str("undefined"),
			Value::Boolean(true) => f.write_str("true"),
			Value::Boolean(false) => f.write_str("false"),
			Value::Float4(value) => Display::fmt(value, f),
			Value::Float8(value) => Display::fmt(value, f),
			Value::Int1(value) => Display::fmt(value, f),
			Value::Int2(value) => Display::fmt(value, f),
			Value::Int4(value) => Display::fmt(value, f),
			Value::Int8(value) => Display::fmt(value, f),
			Value::Int16(value) => Display::fmt(value, f),
			Value::Uint1(value) => Display::fmt(value, f),
			Value::Uint2(value) => Display::fmt(value, f),
			Value::Uint4(value) => Display::fmt(value, f),
			Value::Uint8(value) => Display::fmt(value, f),
			Value::Uint16(value) => Display::fmt(value, f),
			Value::Utf8(value) => Display::fmt(value, f),
			Value::Blob(value) => {
				f.write_str("0x")?;
				for byte in value {
					write!(f, "{byte:02x}")?;
				}
				Ok(())
			}
			Value::Uuid(value) => Display::fmt(value, f),
			Value::Timestamp(value) => write!(f, "{value}ms"),
			Value::Inet(value) => Display::fmt(value, f),
			Value::Decimal(value) => Display::fmt(value, f),
			Value::VarInt(value) => Display::fmt(value, f),
			Value::Set(elements) => write_elements(f, "{", elements, "}"),
			Value::List(elements) => write_elements(f, "[", elements, "]"),
			Value::Map(entries) => {
				f.write_str("{")?;
				for (idx, (key, value)) in entries.iter().enumerate() {
					if idx > 0 {
						f.write_str(", ")?;
					}
					write!(f, "{key}: {value}")?;
				}
				f.write_str("}")
			}
		}
	}
}

fn write_elements(f: &mut Formatter<'_>, open: &str, elements: &[Value], close: &str) -> std::fmt::Result {
	f.write_str(open)?;
	for (idx, element) in elements.iter().enumerate() {
		if idx > 0 {
			f.write_str(", ")?;
		}
		Display::fmt(element, f)?;
	}
	f.write_str(close)
}
