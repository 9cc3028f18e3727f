use std::io::Write as _;

use clap::Parser as _;

mod args;
mod error;

fn main() {
    human_panic::setup_panic!();
    let result = run();
    proc_exit::exit(result);
}

fn run() -> proc_exit::ExitResult {
    let cli = args::Cli::parse();

    init_logging(cli.verbose.log_level_filter());

    match cli.finalize.run() {
        Ok(()) => proc_exit::Code::SUCCESS.ok(),
        Err(err) => {
            log::error!("{err:#}");
            Err(proc_exit::Code::FAILURE.as_exit())
        }
    }
}

fn init_logging(level: log::LevelFilter) {
    let mut builder = env_logger::Builder::new();
    builder.filter_level(level);
    builder.format(|buf, record| {
        let level = format!("[{}]", record.level()).to_lowercase();
        writeln!(buf, "{:8} {}", level, record.args())
    });
    builder.init();
}
