use crate::Cli;

/// Compare two versions.
#[derive(Clone, Debug, clap::Args)]
#[group(skip)]
pub struct Args {
	/// The left version.
	#[arg(index = 1)]
	pub left: String,

	/// The right version.
	#[arg(index = 2)]
	pub right: String,
}

impl Cli {
	pub fn command_compare(&self, args: Args) -> Result<std::process::ExitCode, crate::Error> {
		let scheme = self.scheme();
		let left = scheme.parse_version(&args.left)?;
		let right = scheme.parse_version(&args.right)?;
		let ordering = match left.cmp(&right) {
			std::cmp::Ordering::Less => "<",
			std::cmp::Ordering::Equal => "=",
			std::cmp::Ordering::Greater => ">",
		};
		println!("{} {} {}", args.left, ordering, args.right);
		Ok(std::process::ExitCode::SUCCESS)
	}
}
