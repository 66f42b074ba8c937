use anyhow::Result;
use std::io;
use std::process::ExitCode;

use commit_message_check::Config;
use commit_message_check::config::USAGE;
use commit_message_check::hook;

fn main() -> Result<ExitCode> {
    let Ok(config) = Config::try_from_env_args() else {
        println!("{USAGE}");
        return Ok(ExitCode::FAILURE);
    };

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let outcome = hook::run(&config, &mut io::stdout().lock())?;
    Ok(outcome.into())
}
