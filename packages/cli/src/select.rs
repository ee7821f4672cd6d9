use crate::Cli;

/// Print the highest candidate version a constraint admits.
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
	pub fn command_select(&self, args: Args) -> Result<std::process::ExitCode, crate::Error> {
		let scheme = self.scheme();
		match scheme.select(&args.constraint, &args.versions)? {
			Some(version) => {
				println!("{version}");
				Ok(std::process::ExitCode::SUCCESS)
			},
			None => Ok(std::process::ExitCode::FAILURE),
		}
	}
}
