use crate::Cli;

/// Parse a version and print its parts.
#[derive(Clone, Debug, clap::Args)]
#[group(skip)]
pub struct Args {
	/// The version to parse.
	#[arg(index = 1)]
	pub version: String,
}

impl Cli {
	pub fn command_parse(&self, args: Args) -> Result<std::process::ExitCode, crate::Error> {
		let scheme = self.scheme();
		let version = scheme.parse_version(&args.version)?;
		for part in version.parts() {
			println!("{part}\t{:?}", part.kind());
		}
		println!("snapshot: {}", version.is_snapshot());
		println!("rebuild: {}", version.is_rebuild());
		Ok(std::process::ExitCode::SUCCESS)
	}
}
