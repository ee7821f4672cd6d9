use {
	abx_version::Scheme,
	clap::Parser as _,
	std::path::PathBuf,
	tracing_subscriber::prelude::*,
};

pub use self::config::Config;

mod check;
mod compare;
mod config;
mod parse;
mod rebuild;
mod select;
mod sort;

pub struct Cli {
	args: Args,
	config: Option<Config>,
}

#[derive(Clone, Debug, clap::Parser)]
#[command(
	about = "Abx is an autoboxing version scheme for artifact resolution.",
	arg_required_else_help = true,
	disable_help_subcommand = true,
	name = "abx",
	version
)]
struct Args {
	#[command(subcommand)]
	command: Command,

	/// The path to the config file.
	#[arg(env = "ABX_CONFIG", global = true, long, short)]
	config: Option<PathBuf>,

	/// Enable autoboxing of versions and range bounds.
	#[arg(global = true, long)]
	autobox: bool,

	/// Override the rebuild qualifier.
	#[arg(global = true, long)]
	rebuild_qualifier: Option<String>,

	/// Override the qualifier order with a comma-separated list.
	#[arg(global = true, long, value_delimiter = ',')]
	qualifier_order: Option<Vec<String>>,

	/// The tracing filter.
	#[arg(env = "ABX_TRACING", global = true, long)]
	tracing: Option<String>,
}

#[derive(Clone, Debug, clap::Subcommand)]
enum Command {
	Check(self::check::Args),
	Compare(self::compare::Args),
	Parse(self::parse::Args),
	Rebuild(self::rebuild::Args),
	Select(self::select::Args),
	Sort(self::sort::Args),
}

#[derive(Debug, derive_more::Display, derive_more::Error, derive_more::From)]
pub enum Error {
	#[display("failed to read the config file: {_0}")]
	Config(std::io::Error),

	#[display("failed to deserialize the config: {_0}")]
	Json(serde_json::Error),

	Parse(abx_version::ParseError),
}

fn main() -> std::process::ExitCode {
	// Parse the args.
	let args = Args::parse();

	// Read the config.
	let config = match Cli::read_config(args.config.clone()) {
		Ok(config) => config,
		Err(error) => {
			eprintln!("error: {error}");
			return std::process::ExitCode::FAILURE;
		},
	};

	// Initialize tracing.
	Cli::initialize_tracing(config.as_ref(), args.tracing.as_ref());

	// Run the command.
	let cli = Cli { args, config };
	match cli.run() {
		Ok(code) => code,
		Err(error) => {
			eprintln!("error: {error}");
			std::process::ExitCode::FAILURE
		},
	}
}

impl Cli {
	fn run(&self) -> Result<std::process::ExitCode, Error> {
		match self.args.command.clone() {
			Command::Check(args) => self.command_check(args),
			Command::Compare(args) => self.command_compare(args),
			Command::Parse(args) => self.command_parse(args),
			Command::Rebuild(args) => self.command_rebuild(args),
			Command::Select(args) => self.command_select(args),
			Command::Sort(args) => self.command_sort(args),
		}
	}

	/// The scheme for this invocation: command-line overrides, then the
	/// config, then the defaults.
	fn scheme(&self) -> Scheme {
		let autobox = self.args.autobox
			|| self
				.config
				.as_ref()
				.is_some_and(|config| config.autobox.unwrap_or(false));
		let rebuild_qualifier = self
			.args
			.rebuild_qualifier
			.clone()
			.or_else(|| {
				self.config
					.as_ref()
					.and_then(|config| config.rebuild_qualifier.clone())
			})
			.unwrap_or_else(|| abx_version::scheme::DEFAULT_REBUILD_INDICATOR.to_owned());
		let qualifier_order = self
			.args
			.qualifier_order
			.clone()
			.or_else(|| {
				self.config
					.as_ref()
					.and_then(|config| config.qualifier_order.clone())
			})
			.unwrap_or_else(|| {
				abx_version::scheme::DEFAULT_QUALIFIER_ORDER
					.iter()
					.map(ToString::to_string)
					.collect()
			});
		tracing::debug!(autobox, %rebuild_qualifier, "constructed the scheme");
		Scheme::new(autobox, rebuild_qualifier, qualifier_order)
	}

	fn read_config(path: Option<PathBuf>) -> Result<Option<Config>, Error> {
		let path = path.unwrap_or_else(|| {
			PathBuf::from(std::env::var("HOME").unwrap()).join(".config/abx/config.json")
		});
		let config = match std::fs::read_to_string(&path) {
			Ok(config) => config,
			Err(error) if error.kind() == std::io::ErrorKind::NotFound => {
				return Ok(None);
			},
			Err(error) => {
				return Err(Error::Config(error));
			},
		};
		let config = serde_json::from_str(&config)?;
		Ok(Some(config))
	}

	fn initialize_tracing(config: Option<&Config>, filter: Option<&String>) {
		let filter = filter.or_else(|| config.and_then(|config| config.tracing.as_ref()));
		let Some(filter) = filter else {
			return;
		};
		let Ok(filter) = tracing_subscriber::filter::EnvFilter::try_new(filter) else {
			return;
		};
		let layer = tracing_subscriber::fmt::layer()
			.with_writer(std::io::stderr)
			.with_filter(filter);
		tracing_subscriber::registry().with(layer).init();
	}
}
