use pathtools::{
    cli::{self, SplitArgs},
    config::SplitConfig,
};
use std::process::ExitCode;

fn main() -> ExitCode {
    cli::run_tool(std::env::args_os(), |args: &SplitArgs, cwd| {
        let config = SplitConfig::from_args(args, cwd)?;
        cli::execute_split(&config, &mut std::io::stdout().lock())
    })
}
