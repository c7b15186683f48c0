use pathtools::{
    cli::{self, RootArgs},
    config::RootConfig,
};
use std::process::ExitCode;

fn main() -> ExitCode {
    cli::run_tool(std::env::args_os(), |args: &RootArgs, cwd| {
        let config = RootConfig::from_args(args, cwd)?;
        cli::execute_root(&config, &mut std::io::stdout().lock())
    })
}
