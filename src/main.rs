use anyhow::Result;
use log::error;

use uipro::cli::Args;
use uipro::{runners, wizard};

fn main() {
    let args = Args::parse_args();

    let level = if args.verbose {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Warn
    };
    env_logger::Builder::from_default_env()
        .format(|buf, record| {
            use std::io::Write;
            writeln!(
                buf,
                "[{} {} {}] {}",
                buf.timestamp_millis(),
                record.level(),
                record.target(),
                record.args()
            )
        })
        .filter_level(level)
        .init();

    if let Err(e) = real_main(&args) {
        error!("{e:#}");
        wizard::show_error(&e.to_string());
        std::process::exit(1);
    }
}

fn real_main(args: &Args) -> Result<()> {
    let rt = tokio::runtime::Runtime::new()?;
    rt.block_on(runners::run(&args.sub))?;
    Ok(())
}
