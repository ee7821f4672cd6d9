use crate::{Range, Version};

/// A constraint is a single pinned version, a union of ranges, or nothing,
/// which matches any version.
#[derive(Clone, Debug, Default)]
pub enum Constraint {
	#[default]
	Any,
	Pinned(Version),
	Ranges(Vec<Range>),
}

impl Constraint {
	#[must_use]
	pub fn contains(&self, version: &Version) -> bool {
		match self {
			Self::Any => true,
			Self::Pinned(pinned) => pinned == version,
			Self::Ranges(ranges) => ranges.iter().any(|range| range.contains(version)),
		}
	}

	/// The highest candidate the constraint admits.
	#[must_use]
	pub fn select<'a>(
		&self,
		candidates: impl IntoIterator<Item = &'a Version>,
	) -> Option<&'a Version> {
		candidates
			.into_iter()
			.filter(|version| self.contains(version))
			.max()
	}
}

impl std::fmt::Display for Constraint {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		match self {
			Self::Any => Ok(()),
			Self::Pinned(pinned) => write!(f, "{pinned}"),
			Self::Ranges(ranges) => {
				for range in ranges {
					write!(f, "{range}")?;
				}
				Ok(())
			},
		}
	}
}

#[cfg(test)]
mod tests {
	use {
		super::*,
		crate::{
			Scheme,
			scheme::{DEFAULT_QUALIFIER_ORDER, DEFAULT_REBUILD_INDICATOR},
		},
	};

	fn scheme(autobox: bool) -> Scheme {
		Scheme::new(autobox, DEFAULT_REBUILD_INDICATOR, DEFAULT_QUALIFIER_ORDER)
	}

	fn version(text: &str) -> Version {
		scheme(false).parse_version(text).unwrap()
	}

	#[test]
	fn pinned_without_autobox() {
		let constraint = scheme(false).parse_constraint("2").unwrap();
		assert!(matches!(constraint, Constraint::Pinned(_)));
		assert!(!constraint.contains(&version("1")));
		assert!(constraint.contains(&version("2")));
		assert!(!constraint.contains(&version("3")));
	}

	#[test]
	fn single_version_with_autobox_admits_rebuilds() {
		let constraint = scheme(true).parse_constraint("2").unwrap();
		assert!(!constraint.contains(&version("1")));
		assert!(constraint.contains(&version("2")));
		assert!(constraint.contains(&version("2-REDHAT-9")));
		assert!(!constraint.contains(&version("3")));
	}

	#[test]
	fn single_snapshot_with_autobox() {
		let constraint = scheme(true).parse_constraint("2-SNAPSHOT").unwrap();
		assert!(constraint.contains(&version("2-SNAPSHOT")));
	}

	#[test]
	fn two_inclusive_ranges() {
		let constraint = scheme(false).parse_constraint("[1,2][4,5]").unwrap();
		assert!(constraint.contains(&version("1")));
		assert!(constraint.contains(&version("2")));
		assert!(!constraint.contains(&version("3")));
		assert!(constraint.contains(&version("4")));
		assert!(constraint.contains(&version("5")));
	}

	#[test]
	fn two_ranges_excluding_the_middle_version() {
		let constraint = scheme(false).parse_constraint("[1,3)(3,5]").unwrap();
		assert!(constraint.contains(&version("1")));
		assert!(constraint.contains(&version("2")));
		assert!(!constraint.contains(&version("3")));
		// Non-autoboxed ranges do not account for rebuilds of the excluded
		// boundary.
		assert!(constraint.contains(&version("3-REDHAT-1")));
		assert!(constraint.contains(&version("4")));
		assert!(constraint.contains(&version("5")));
	}

	#[test]
	fn two_autoboxed_ranges_excluding_the_middle_version_and_its_rebuilds() {
		let constraint = scheme(true).parse_constraint("[1,3)(3,5]").unwrap();
		assert!(constraint.contains(&version("1")));
		assert!(constraint.contains(&version("2")));
		assert!(!constraint.contains(&version("3")));
		assert!(!constraint.contains(&version("3-REDHAT-1")));
		assert!(constraint.contains(&version("4")));
		assert!(constraint.contains(&version("5")));
	}

	#[test]
	fn any_contains_everything() {
		let constraint = Constraint::Any;
		assert!(constraint.contains(&version("1")));
		assert!(constraint.contains(&version("1.0-SNAPSHOT")));
	}

	#[test]
	fn select_picks_the_highest_admitted_candidate() {
		let constraint = scheme(false).parse_constraint("[1,3)(3,5]").unwrap();
		let candidates = ["1", "2.5", "3", "5", "6"].map(version);
		let best = constraint.select(&candidates).unwrap();
		assert_eq!(best.to_string(), "5");
	}

	#[test]
	fn select_returns_none_when_nothing_matches() {
		let constraint = scheme(false).parse_constraint("[8,9]").unwrap();
		let candidates = ["1", "2"].map(version);
		assert!(constraint.select(&candidates).is_none());
	}
}
