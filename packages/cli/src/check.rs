use crate::Cli;

/// Print the candidate versions a constraint admits.
#[derive(Clone, Debug, clap::Args)]
#[group(skip)]
pub struct Args {
	/// The constraint.
	#[arg(index = 1)]
	pub constraint: String,

	/// The candidate versions.
	#[arg(index = 2, required = true)]
	pub versions: Vec<String>,
}

impl Cli {
	pub fn command_check(&self, args: Args) -> Result<std::process::ExitCode, crate::Error> {
		let scheme = self.scheme();
		let constraint = scheme.parse_constraint(&args.constraint)?;
		for text in &args.versions {
			let version = scheme.parse_version(text)?;
			if constraint.contains(&version) {
				println!("{version}");
			}
		}
		Ok(std::process::ExitCode::SUCCESS)
	}
}
