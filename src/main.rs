use clap::Parser;
use shelfkit::cli::{run, CliArgs};
use shelfkit::init_logging;

fn main() -> anyhow::Result<()> {
    let args = CliArgs::parse();

    init_logging()?;

    let summary = run(&args)?;
    for file in &summary.files {
        println!("{}", file.display());
    }

    Ok(())
}
