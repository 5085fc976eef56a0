// Separately:
// CPU: ~700 times per second
// Display: 60 times per second
// Timer: 60 times per second

use clap::Parser;

mod host;

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let settings = host::config::Settings::parse();
    host::run(settings)
}
