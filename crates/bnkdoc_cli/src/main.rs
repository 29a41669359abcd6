#![allow(missing_docs)]

use clap::{Parser, Subcommand};

mod cmd;

#[derive(Parser)]
#[command(name = "bnkdoc", about = "SoundBank inspection tools")]
struct Cli {
	#[command(subcommand)]
	command: Commands,
}

#[derive(Subcommand)]
enum Commands {
	/// Header, chunk list, and object counts.
	Info(cmd::info::Args),
	/// One line per hierarchy object.
	Objects(cmd::objects::Args),
	/// Actor-mixer hierarchy.
	Tree(cmd::tree::Args),
	/// Master bus hierarchy.
	Buses(cmd::buses::Args),
	/// Raw chunk bytes.
	Chunk(cmd::chunk::Args),
}

fn main() {
	if let Err(err) = run() {
		eprintln!("error: {err}");
		std::process::exit(1);
	}
}

fn run() -> bnkdoc::bank::Result<()> {
	let cli = Cli::parse();

	match cli.command {
		Commands::Info(args) => cmd::info::run(args),
		Commands::Objects(args) => cmd::objects::run(args),
		Commands::Tree(args) => cmd::tree::run(args),
		Commands::Buses(args) => cmd::buses::run(args),
		Commands::Chunk(args) => cmd::chunk::run(args),
	}
}
