use {
	crate::part::{Kind, Part, Separator},
	std::sync::Arc,
};

pub use self::{
	constraint::Constraint,
	parse::{ParseError, is_single_version},
	range::Range,
	scheme::Scheme,
};

pub mod constraint;
pub mod parse;
pub mod part;
pub mod range;
pub mod scheme;

/// The highest rebuild number a version can carry.
pub const MAX_REBUILD_NUMBER: u64 = 99999;

/// A parsed version: an ordered sequence of typed parts. Versions are
/// immutable and safe to share and compare from any thread, provided both
/// sides were parsed under the same scheme configuration.
#[derive(Clone, Debug)]
pub struct Version {
	parts: Vec<Part>,
	is_snapshot: bool,
	rebuild_indicator: String,
	qualifiers: Arc<[String]>,
}

impl Version {
	pub(crate) fn new(
		parts: Vec<Part>,
		is_snapshot: bool,
		rebuild_indicator: String,
		qualifiers: Arc<[String]>,
	) -> Self {
		Self {
			parts,
			is_snapshot,
			rebuild_indicator,
			qualifiers,
		}
	}

	#[must_use]
	pub fn parts(&self) -> &[Part] {
		&self.parts
	}

	#[must_use]
	pub fn is_snapshot(&self) -> bool {
		self.is_snapshot
	}

	#[must_use]
	pub fn rebuild_indicator(&self) -> &str {
		&self.rebuild_indicator
	}

	#[must_use]
	pub fn qualifiers(&self) -> &[String] {
		&self.qualifiers
	}

	/// Whether the version ends in `<rebuild indicator><number>`.
	#[must_use]
	pub fn is_rebuild(&self) -> bool {
		self.parts.len() >= 2 && self.parts[self.parts.len() - 2].kind() == Kind::Rebuild
	}

	/// Derive the version for rebuild `number` of this version. Deriving the
	/// rebuild a version already carries returns it unchanged.
	#[must_use]
	pub fn rebuild(&self, number: u64) -> Self {
		let raw = number.to_string();
		let mut parts = self.parts.clone();
		let ends_in_rebuild = self.is_rebuild()
			&& self.parts[self.parts.len() - 1].kind() == Kind::Int;
		if ends_in_rebuild {
			let last = parts.len() - 1;
			if parts[last].raw() == raw {
				return self.clone();
			}
			parts[last] = parts[last].with_raw(raw);
		} else {
			parts.push(Part::new(
				Kind::Rebuild,
				Separator::Dash,
				Some('-'),
				self.rebuild_indicator.clone(),
				self.qualifiers.clone(),
			));
			parts.push(Part::new(
				Kind::Int,
				Separator::Dash,
				Some('-'),
				raw,
				self.qualifiers.clone(),
			));
		}
		Self {
			parts,
			is_snapshot: self.is_snapshot,
			rebuild_indicator: self.rebuild_indicator.clone(),
			qualifiers: self.qualifiers.clone(),
		}
	}

	/// The upper bound used to autobox this version: its highest rebuild.
	#[must_use]
	pub fn autobox_upper_bound(&self) -> Self {
		self.rebuild(MAX_REBUILD_NUMBER)
	}
}

impl std::fmt::Display for Version {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		for part in &self.parts {
			write!(f, "{part}")?;
		}
		Ok(())
	}
}

impl Ord for Version {
	fn cmp(&self, other: &Self) -> std::cmp::Ordering {
		use std::cmp::Ordering;

		for (left, right) in std::iter::zip(&self.parts, &other.parts) {
			let ordering = left.compare(right);
			if ordering.is_ne() {
				return ordering;
			}
		}

		// Between two snapshots with a common prefix, the longer one is the
		// more qualified, earlier snapshot.
		if self.is_snapshot && other.is_snapshot {
			return other.parts.len().cmp(&self.parts.len());
		}

		match self.parts.len().cmp(&other.parts.len()) {
			Ordering::Greater => {
				if self.is_snapshot {
					return Ordering::Less;
				}
				// Extra trailing parts below the int axis denote a
				// pre-release of the shorter version.
				if self.parts[other.parts.len()..]
					.iter()
					.any(|part| part.kind() < Kind::Int)
				{
					return Ordering::Less;
				}
				Ordering::Greater
			},
			Ordering::Less => {
				if other.is_snapshot {
					return Ordering::Greater;
				}
				if other.parts[self.parts.len()..]
					.iter()
					.any(|part| part.kind() < Kind::Int)
				{
					return Ordering::Greater;
				}
				Ordering::Less
			},
			Ordering::Equal => Ordering::Equal,
		}
	}
}

impl PartialOrd for Version {
	fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
		Some(self.cmp(other))
	}
}

impl PartialEq for Version {
	fn eq(&self, other: &Self) -> bool {
		self.cmp(other).is_eq()
	}
}

impl Eq for Version {}

#[cfg(test)]
mod tests {
	use super::*;

	fn scheme() -> Scheme {
		Scheme::new(
			false,
			scheme::DEFAULT_REBUILD_INDICATOR,
			scheme::DEFAULT_QUALIFIER_ORDER,
		)
	}

	fn version(text: &str) -> Version {
		scheme().parse_version(text).unwrap()
	}

	#[test]
	fn round_trip() {
		for text in [
			"1",
			"1.2",
			"1-2",
			"f1",
			"1_0",
			"1.0RC1",
			"1.0-beta-1-redhat-1",
			"1.0-SNAPSHOT",
			"1.0-20100922.120456-2",
			"1.0-beta-2-SNAPSHOT",
		] {
			assert_eq!(version(text).to_string(), text);
		}
	}

	#[test]
	fn ordering() {
		let versions = [
			"1.0.2",
			"1.0.1-redhat-1",
			"1.0.1",
			"1.0",
			"1.0-rc2",
			"1.0RC1",
			"1.0-beta-2",
			"1.0-beta-1",
			"1.0-a2",
			"1.0-alpha-1",
			"1.0-m1",
			"1.0-SNAPSHOT",
			"1.0-20101122.121415-1",
		]
		.map(version);
		for pair in versions.windows(2) {
			assert!(
				pair[0] > pair[1],
				"{} should sort after {}",
				pair[0],
				pair[1],
			);
		}
	}

	#[test]
	fn snapshot_detection() {
		assert!(version("1.0-SNAPSHOT").is_snapshot());
		assert!(version("1.0-20100924.131415-1").is_snapshot());
		assert!(!version("1.0").is_snapshot());
	}

	#[test]
	fn snapshots_sort_below_release() {
		assert!(version("1.0-SNAPSHOT") < version("1.0"));
		assert!(version("1.0-20101122.121415-1") < version("1.0"));
		assert!(version("1.0-20101122.121415-1") < version("1.0-20101122.121415-2"));
	}

	#[test]
	fn rebuild_detection() {
		assert!(version("1.0-redhat-1").is_rebuild());
		assert!(!version("1.0").is_rebuild());
		assert!(!version("redhat").is_rebuild());
	}

	#[test]
	fn rebuild_derivation() {
		let base = version("1.0");
		let rebuild = base.rebuild(5);
		assert_eq!(rebuild.to_string(), "1.0-redhat-5");
		assert!(rebuild.is_rebuild());
		assert_eq!(base.autobox_upper_bound().to_string(), "1.0-redhat-99999");
	}

	#[test]
	fn rebuild_derivation_replaces_the_number() {
		let rebuild = version("1.0-redhat-1").rebuild(3);
		assert_eq!(rebuild.to_string(), "1.0-redhat-3");
	}

	#[test]
	fn rebuild_derivation_is_idempotent() {
		let first = version("1.0").rebuild(5);
		let second = first.rebuild(5);
		assert_eq!(first, second);
		assert_eq!(first.parts().len(), second.parts().len());
		assert_eq!(first.to_string(), second.to_string());
	}

	#[test]
	fn rebuild_sorts_above_base() {
		assert!(version("1.0-redhat-1") > version("1.0"));
		assert!(version("1.0-redhat-2") > version("1.0-redhat-1"));
		assert!(version("1.0-redhat-99999") < version("1.1"));
	}

	#[test]
	fn comparison_is_case_insensitive() {
		assert_eq!(version("1.0-ALPHA-1"), version("1.0-alpha-1"));
		assert_eq!(version("1.0-REDHAT-1"), version("1.0-redhat-1"));
	}
}
