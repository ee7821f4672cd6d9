use {
	crate::{Constraint, Range, Version, parse, parse::ParseError},
	std::sync::Arc,
};

pub const DEFAULT_REBUILD_INDICATOR: &str = "redhat";

pub const DEFAULT_QUALIFIER_ORDER: [&str; 8] =
	["MILESTONE", "M", "ALPHA", "A", "BETA", "B", "RC", "CR"];

/// A scheme binds the autobox policy, the rebuild indicator, and the
/// qualifier order once. Versions parsed under different schemes are not
/// comparable, since qualifier ties break by the configured order.
#[derive(Clone, Debug)]
pub struct Scheme {
	autobox: bool,
	rebuild_indicator: String,
	qualifiers: Arc<[String]>,
}

impl Scheme {
	#[must_use]
	pub fn new(
		autobox: bool,
		rebuild_indicator: impl Into<String>,
		qualifiers: impl IntoIterator<Item = impl Into<String>>,
	) -> Self {
		Self {
			autobox,
			rebuild_indicator: rebuild_indicator.into(),
			qualifiers: qualifiers.into_iter().map(Into::into).collect(),
		}
	}

	#[must_use]
	pub fn autobox(&self) -> bool {
		self.autobox
	}

	#[must_use]
	pub fn rebuild_indicator(&self) -> &str {
		&self.rebuild_indicator
	}

	#[must_use]
	pub fn qualifiers(&self) -> &[String] {
		&self.qualifiers
	}

	pub fn parse_version(&self, text: &str) -> Result<Version, ParseError> {
		parse::version(text, &self.rebuild_indicator, &self.qualifiers)
	}

	pub fn parse_range(&self, text: &str) -> Result<Range, ParseError> {
		parse::range(text, &self.rebuild_indicator, &self.qualifiers, self.autobox)
	}

	pub fn parse_constraint(&self, text: &str) -> Result<Constraint, ParseError> {
		parse::constraint(text, &self.rebuild_indicator, &self.qualifiers, self.autobox)
	}

	/// Render rebuild `number` of `base`.
	pub fn format_rebuild(&self, base: &str, number: u64) -> Result<String, ParseError> {
		Ok(self.parse_version(base)?.rebuild(number).to_string())
	}

	/// Whether `text` names a rebuild version.
	pub fn is_rebuild(&self, text: &str) -> Result<bool, ParseError> {
		Ok(self.parse_version(text)?.is_rebuild())
	}

	/// Parse the constraint and the candidates and return the highest
	/// candidate the constraint admits.
	pub fn select(
		&self,
		constraint: &str,
		candidates: impl IntoIterator<Item = impl AsRef<str>>,
	) -> Result<Option<Version>, ParseError> {
		let constraint = self.parse_constraint(constraint)?;
		let mut best: Option<Version> = None;
		for candidate in candidates {
			let version = self.parse_version(candidate.as_ref())?;
			if !constraint.contains(&version) {
				continue;
			}
			if best.as_ref().is_none_or(|best| version > *best) {
				best = Some(version);
			}
		}
		Ok(best)
	}
}

impl Default for Scheme {
	fn default() -> Self {
		Self::new(false, DEFAULT_REBUILD_INDICATOR, DEFAULT_QUALIFIER_ORDER)
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn format_rebuild() {
		let scheme = Scheme::default();
		assert_eq!(scheme.format_rebuild("1.0", 4).unwrap(), "1.0-redhat-4");
		assert_eq!(
			scheme.format_rebuild("1.0-redhat-1", 4).unwrap(),
			"1.0-redhat-4",
		);
	}

	#[test]
	fn is_rebuild() {
		let scheme = Scheme::default();
		assert!(scheme.is_rebuild("1.0-redhat-1").unwrap());
		assert!(scheme.is_rebuild("1.0-REDHAT-2").unwrap());
		assert!(!scheme.is_rebuild("1.0").unwrap());
	}

	#[test]
	fn custom_rebuild_indicator() {
		let scheme = Scheme::new(false, "jboss", DEFAULT_QUALIFIER_ORDER);
		assert!(scheme.is_rebuild("1.0-jboss-1").unwrap());
		assert!(!scheme.is_rebuild("1.0-redhat-1").unwrap());
		assert_eq!(scheme.format_rebuild("1.0", 1).unwrap(), "1.0-jboss-1");
	}

	#[test]
	fn select_picks_the_highest_admitted_candidate() {
		let scheme = Scheme::new(true, DEFAULT_REBUILD_INDICATOR, DEFAULT_QUALIFIER_ORDER);
		let best = scheme
			.select("2", ["1", "2", "2-redhat-3", "2-redhat-9", "3"])
			.unwrap()
			.unwrap();
		assert_eq!(best.to_string(), "2-redhat-9");
	}

	#[test]
	fn select_returns_none_when_nothing_matches() {
		let scheme = Scheme::default();
		assert!(scheme.select("[4,5]", ["1", "2"]).unwrap().is_none());
	}
}
