use std::any::Any;
use std::panic;

use anyhow::Result;
use clap::Parser;
use pbo_site::{Cli, logging, run};
use tracing::info;

fn install_broken_pipe_handler() {
    let default_hook = panic::take_hook();
    panic::set_hook(Box::new(move |info| {
        let payload = info.payload();
        let is_broken = <dyn Any>::downcast_ref::<&str>(payload)
            .is_some_and(|s| s.contains("Broken pipe"))
            || <dyn Any>::downcast_ref::<String>(payload)
                .is_some_and(|s| s.contains("Broken pipe"));

        if is_broken {
            // `pbo-site tree | head` closes stdout early
            std::process::exit(0);
        }

        default_hook(info);
    }));
}

fn main() -> Result<()> {
    install_broken_pipe_handler();

    let cli = Cli::parse();
    logging::init(&cli.log_level);
    info!("pbo-site v{}", env!("CARGO_PKG_VERSION"));

    run(cli)
}
