#[derive(Clone, Debug, Default, serde::Serialize, serde::Deserialize)]
pub struct Config {
	/// Enable autoboxing of versions and range bounds.
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub autobox: Option<bool>,

	/// The qualifier that marks a vendor rebuild.
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub rebuild_qualifier: Option<String>,

	/// The pre-release qualifiers, lowest first.
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub qualifier_order: Option<Vec<String>>,

	/// The tracing filter.
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub tracing: Option<String>,
}
