use clap::Parser;

mod config;
mod run;

pub use config::{ConfigError, RunConfig, load_run_config};
pub use run::RunArgs;

#[derive(Parser, Debug)]
#[command(
    name = "result-analysis",
    version,
    about = "Test Results Analysis"
)]
pub struct Cli {
    #[command(flatten)]
    run: RunArgs,
}

impl Cli {
    pub fn dispatch(self) -> anyhow::Result<()> {
        run::handle(self.run)
    }
}

#[cfg(test)]
#[path = "../../tests/src_inline/cli/mod.rs"]
mod tests;
