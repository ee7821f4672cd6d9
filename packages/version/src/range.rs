use crate::Version;

/// A range of versions with optional bounds. A missing bound is open-ended.
#[derive(Clone, Debug)]
pub struct Range {
	pub lower: Option<Version>,
	pub lower_inclusive: bool,
	pub upper: Option<Version>,
	pub upper_inclusive: bool,
}

impl Range {
	#[must_use]
	pub fn contains(&self, version: &Version) -> bool {
		if let Some(lower) = &self.lower {
			let ordering = lower.cmp(version);
			if ordering.is_gt() {
				return false;
			}
			if !self.lower_inclusive && ordering.is_eq() {
				return false;
			}
		}
		if let Some(upper) = &self.upper {
			let ordering = upper.cmp(version);
			if ordering.is_lt() {
				return false;
			}
			if !self.upper_inclusive && ordering.is_eq() {
				return false;
			}
		}
		true
	}
}

impl std::fmt::Display for Range {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		write!(f, "{}", if self.lower_inclusive { '[' } else { '(' })?;
		if let Some(lower) = &self.lower {
			write!(f, "{lower}")?;
		}
		write!(f, ",")?;
		if let Some(upper) = &self.upper {
			write!(f, "{upper}")?;
		}
		write!(f, "{}", if self.upper_inclusive { ']' } else { ')' })
	}
}
