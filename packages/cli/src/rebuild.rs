use crate::Cli;

/// Derive a rebuild version.
#[derive(Clone, Debug, clap::Args)]
#[group(skip)]
pub struct Args {
	/// The base version.
	#[arg(index = 1)]
	pub version: String,

	/// The rebuild number.
	#[arg(default_value_t = 1, long, short)]
	pub number: u64,
}

impl Cli {
	pub fn command_rebuild(&self, args: Args) -> Result<std::process::ExitCode, crate::Error> {
		let scheme = self.scheme();
		let version = scheme.format_rebuild(&args.version, args.number)?;
		println!("{version}");
		Ok(std::process::ExitCode::SUCCESS)
	}
}
