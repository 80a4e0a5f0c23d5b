// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

//! Floats that are never NaN, so values holding them can be compared, hashed
//! and sorted. `-0.0` is stored as `0.0`.

use std::fmt::{Display, Formatter};

/// Returned when a NaN is offered to an ordered float.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OrderedFloatError;

impl Display for OrderedFloatError {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		f.write_str("NaN is not a valid ordered float")
	}
}

impl std::error::Error for OrderedFloatError {}

macro_rules! ordered_float {
	($name:ident, $float:ty, $repr:literal) => {
		#[repr(transparent)]
		#[derive(Debug, Copy, Clone, Default, serde::Serialize, serde::Deserialize)]
		#[serde(try_from = $repr, into = $repr)]
		pub struct $name($float);

		impl $name {
			pub fn value(&self) -> $float {
				self.0
			}
		}

		impl std::ops::Deref for $name {
			type Target = $float;

			fn deref(&self) -> &$float {
				&self.0
			}
		}

		impl Display for $name {
			fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
				Display::fmt(&self.0, f)
			}
		}

		impl PartialEq for $name {
			fn eq(&self, other: &Self) -> bool {
				self.0.to_bits() == other.0.to_bits()
			}
		}

		impl Eq for $name {}

		impl PartialOrd for $name {
			fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
				Some(self.cmp(other))
			}
		}

		impl Ord for $name {
			fn cmp(&self, other: &Self) -> std::cmp::Ordering {
				self.0.total_cmp(&other.0)
			}
		}

		impl std::hash::Hash for $name {
			fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
				self.0.to_bits().hash(state);
			}
		}

		impl From<$name> for $float {
			fn from(value: $name) -> Self {
				value.0
			}
		}

		impl TryFrom<$float> for $name {
			type Error = OrderedFloatError;

			fn try_from(value: $float) -> Result<Self, OrderedFloatError> {
				if value.is_nan() {
					return Err(OrderedFloatError);
				}
				// 0.0 == -0.0, but their bits differ
				Ok($name(if value == 0.0 { 0.0 } else { value }))
			}
		}
	};
}

ordered_float!(OrderedF32, f32, "f32");
ordered_float!(OrderedF64, f64, "f64");
