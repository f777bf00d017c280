use anyhow::Result;
use clap::{crate_version, App as Cli, Arg};
use todo_tui::app::App;
use todo_tui::config::Config;

fn main() -> Result<()> {
    let matches = Cli::new("todo-tui")
        .version(crate_version!())
        .about("A terminal to-do list with deadlines")
        .arg(
            Arg::with_name("config")
                .short("c")
                .long("config")
                .value_name("DIR")
                .help("Use a custom configuration directory")
                .takes_value(true),
        )
        .arg(
            Arg::with_name("log-level")
                .short("l")
                .long("log-level")
                .value_name("LEVEL")
                .help("Override the configured log level")
                .possible_values(&["off", "error", "warn", "info", "debug", "trace"])
                .takes_value(true),
        )
        .get_matches();

    let mut config = Config::new();
    config.load(matches.value_of("config"))?;
    if let Some(level) = matches.value_of("log-level") {
        config.log_level = level.to_string();
    }

    App::start(config)
}
