use std::process::ExitCode;

use lua_config_reader::{ConfigReader, ReaderError};
use tracing_subscriber::EnvFilter;

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let script = std::env::args()
        .nth(1)
        .unwrap_or_else(|| lua_config_reader::options::DEFAULT_SCRIPT.to_string());

    match run(&script) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run(script: &str) -> Result<(), ReaderError> {
    let config = ConfigReader::open(script)?;

    println!(
        "Name {} ({} years old) should {}be spelled",
        config.read_string("simple.fullname")?,
        config.read_number("json.age")?,
        if config.read_bool("json.needspelling")? { "" } else { "not " },
    );

    let family = config.read_array("json.otherfamily")?;
    println!("Other family: {}", family.join(", "));

    Ok(())
}
