use clap::Parser;

use gildedrose_cli::Config;

fn main() -> anyhow::Result<()> {
    let config = Config::parse();

    gildedrose_observability::init(config.log_format);

    let report = gildedrose_cli::run(&config)?;
    print!("{report}");
    Ok(())
}
