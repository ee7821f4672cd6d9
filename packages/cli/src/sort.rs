use crate::Cli;

/// Sort versions in descending scheme order.
#[derive(Clone, Debug, clap::Args)]
#[group(skip)]
pub struct Args {
	/// The versions to sort.
	#[arg(index = 1, required = true)]
	pub versions: Vec<String>,
}

impl Cli {
	pub fn command_sort(&self, args: Args) -> Result<std::process::ExitCode, crate::Error> {
		let scheme = self.scheme();
		let mut versions = args
			.versions
			.iter()
			.map(|text| scheme.parse_version(text))
			.collect::<Result<Vec<_>, _>>()?;
		versions.sort_by(|left, right| right.cmp(left));
		for version in versions {
			println!("{version}");
		}
		Ok(std::process::ExitCode::SUCCESS)
	}
}
