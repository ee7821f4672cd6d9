use {
	crate::{
		Version,
		constraint::Constraint,
		part::{Kind, Part, Separator},
		range::Range,
	},
	std::sync::{Arc, LazyLock},
	time::format_description::BorrowedFormatItem,
	winnow::{
		combinator::{alt, repeat},
		prelude::*,
		token::{one_of, take_while},
	},
};

static DATE_FORMAT: LazyLock<Vec<BorrowedFormatItem<'static>>> =
	LazyLock::new(|| time::format_description::parse("[year][month][day]").unwrap());

static TIME_FORMAT: LazyLock<Vec<BorrowedFormatItem<'static>>> =
	LazyLock::new(|| time::format_description::parse("[hour][minute][second]").unwrap());

#[derive(Clone, Debug, derive_more::Display, derive_more::Error)]
pub enum ParseError {
	#[display("the version range is not delimited by brackets")]
	MissingDelimiter,

	#[display("the version range contains more than two versions")]
	TooManyBounds,

	#[display(
		"a version range containing exactly one version must be inclusive on both bounds"
	)]
	MismatchedSinglePointInclusivity,

	#[display("the version range is too short to be valid")]
	EmptyToken,

	#[display("invalid version")]
	InvalidVersion,
}

/// Whether a constraint string is a single version rather than a union of
/// ranges.
#[must_use]
pub fn is_single_version(text: &str) -> bool {
	range_breaks(text).is_empty()
}

pub(crate) fn version(
	text: &str,
	rebuild_indicator: &str,
	qualifiers: &Arc<[String]>,
) -> Result<Version, ParseError> {
	let tokens = tokens.parse(text).map_err(|_| ParseError::InvalidVersion)?;
	let parts = tokens
		.into_iter()
		.map(|(separator_char, raw)| {
			let kind = Kind::of(raw, rebuild_indicator, qualifiers);
			let separator = separator_char.map_or(Separator::None, Separator::of);
			Part::new(
				kind,
				separator,
				separator_char,
				raw.to_owned(),
				qualifiers.clone(),
			)
		})
		.collect();
	let (parts, is_snapshot) = fold_snapshot(parts, qualifiers);
	Ok(Version::new(
		parts,
		is_snapshot,
		rebuild_indicator.to_owned(),
		qualifiers.clone(),
	))
}

pub(crate) fn range(
	text: &str,
	rebuild_indicator: &str,
	qualifiers: &Arc<[String]>,
	mut autobox: bool,
) -> Result<Range, ParseError> {
	if (!autobox && text.len() < 3) || (autobox && text.is_empty()) {
		return Err(ParseError::EmptyToken);
	}

	let mut interior = text;
	let mut lower_inclusive = true;
	match text.chars().next() {
		Some('(') => {
			lower_inclusive = false;
			interior = &interior[1..];
		},
		Some('[') => {
			interior = &interior[1..];
		},
		_ => {
			if !autobox {
				return Err(ParseError::MissingDelimiter);
			}
		},
	}

	let mut upper_inclusive = true;
	match text.chars().next_back() {
		Some(')') => {
			upper_inclusive = false;
			interior = &interior[..interior.len() - 1];
		},
		Some(']') => {
			interior = &interior[..interior.len() - 1];
		},
		_ => {
			if !autobox {
				return Err(ParseError::MissingDelimiter);
			}
		},
	}

	let versions: Vec<&str> = interior.split(',').collect();
	if versions.len() > 2 {
		return Err(ParseError::TooManyBounds);
	}
	if versions.len() == 1 && (!lower_inclusive || !upper_inclusive) {
		return Err(ParseError::MismatchedSinglePointInclusivity);
	}

	let lower_base = version(versions[0], rebuild_indicator, qualifiers)?;

	// Snapshots are never autoboxed.
	if lower_base.is_snapshot() {
		autobox = false;
	}

	let lower_autoboxed = lower_base.autobox_upper_bound();

	// An exclusive autoboxed lower bound shifts up to the base version's
	// highest rebuild, so rebuilds of the excluded version stay out.
	let lower = if autobox && !lower_inclusive {
		lower_autoboxed.clone()
	} else {
		lower_base.clone()
	};

	let upper = if versions.len() == 1 {
		if autobox { lower_autoboxed } else { lower_base }
	} else {
		let upper = version(versions[1], rebuild_indicator, qualifiers)?;
		if upper_inclusive && autobox {
			upper.autobox_upper_bound()
		} else {
			// An exclusive upper bound is left alone, so it also excludes
			// rebuilds of the boundary version.
			upper
		}
	};

	Ok(Range {
		lower: Some(lower),
		lower_inclusive,
		upper: Some(upper),
		upper_inclusive,
	})
}

pub(crate) fn constraint(
	text: &str,
	rebuild_indicator: &str,
	qualifiers: &Arc<[String]>,
	autobox: bool,
) -> Result<Constraint, ParseError> {
	let breaks = range_breaks(text);
	if breaks.is_empty() {
		if autobox {
			let range = range(text, rebuild_indicator, qualifiers, autobox)?;
			return Ok(Constraint::Ranges(vec![range]));
		}
		let version = version(text, rebuild_indicator, qualifiers)?;
		return Ok(Constraint::Pinned(version));
	}
	let mut ranges = Vec::new();
	let mut start = 0;
	for index in breaks {
		ranges.push(range(&text[start..index], rebuild_indicator, qualifiers, autobox)?);
		start = index;
	}
	ranges.push(range(&text[start..], rebuild_indicator, qualifiers, autobox)?);
	Ok(Constraint::Ranges(ranges))
}

/// Each interior `[` or `(` starts a new range.
fn range_breaks(text: &str) -> Vec<usize> {
	text.char_indices()
		.filter(|(index, c)| *index > 0 && matches!(c, '[' | '('))
		.map(|(index, _)| index)
		.collect()
}

/// A token is one optional non-alphanumeric separator character followed by a
/// maximal all-digit or all-letter run. Punctuation with no following run is
/// discarded.
fn tokens<'a>(input: &mut &'a str) -> ModalResult<Vec<(Option<char>, &'a str)>> {
	let tokens: Vec<Option<(Option<char>, &'a str)>> = repeat(
		0..,
		alt((
			(separator, value).map(|(separator, value)| Some((Some(separator), value))),
			value.map(|value| Some((None, value))),
			separator.map(|_| None),
		)),
	)
	.parse_next(input)?;
	Ok(tokens.into_iter().flatten().collect())
}

fn separator(input: &mut &str) -> ModalResult<char> {
	one_of(|c: char| !c.is_alphanumeric()).parse_next(input)
}

fn value<'a>(input: &mut &'a str) -> ModalResult<&'a str> {
	alt((
		take_while(1.., |c: char| c.is_ascii_digit()),
		take_while(1.., |c: char| c.is_alphanumeric() && !c.is_ascii_digit()),
	))
	.parse_next(input)
}

/// Fold a trailing `<date><time><build>` triple into one remote snapshot
/// part. The triple only folds if the date and time are valid calendar values
/// and the build is an integer: an arbitrary run of digits is not a snapshot.
fn fold_snapshot(mut parts: Vec<Part>, qualifiers: &Arc<[String]>) -> (Vec<Part>, bool) {
	let Some(last) = parts.last() else {
		return (parts, false);
	};
	if last.kind() == Kind::LocalSnapshot {
		return (parts, true);
	}
	if parts.len() < 3 {
		return (parts, false);
	}
	let folded = {
		let [date, time, build] = &parts[parts.len() - 3..] else {
			return (parts, false);
		};
		let valid = parse_snapshot_date(date.raw()).is_some()
			&& parse_snapshot_time(time.raw()).is_some()
			&& build.raw().parse::<u64>().is_ok();
		if !valid {
			return (parts, false);
		}
		let raw = format!("{}{time}{build}", date.raw());
		Part::new(
			Kind::RemoteSnapshot,
			date.separator(),
			date.separator_char(),
			raw,
			qualifiers.clone(),
		)
	};
	parts.truncate(parts.len() - 3);
	parts.push(folded);
	(parts, true)
}

fn parse_snapshot_date(raw: &str) -> Option<time::Date> {
	if raw.len() != 8 || !raw.bytes().all(|byte| byte.is_ascii_digit()) {
		return None;
	}
	time::Date::parse(raw, &*DATE_FORMAT).ok()
}

fn parse_snapshot_time(raw: &str) -> Option<time::Time> {
	if raw.len() != 6 || !raw.bytes().all(|byte| byte.is_ascii_digit()) {
		return None;
	}
	time::Time::parse(raw, &*TIME_FORMAT).ok()
}
