use pathtools::{
    cli::{self, OpenArgs},
    config::OpenConfig,
};
use std::process::ExitCode;

fn main() -> ExitCode {
    cli::run_tool(std::env::args_os(), |args: &OpenArgs, cwd| {
        let config = OpenConfig::from_args(args, cwd)?;
        cli::execute_open(&config)
    })
}
