// src/main.rs

use simdag::{cli, logging, run};

fn main() {
    if let Err(err) = run_main() {
        eprintln!("simdag error: {err:?}");
        std::process::exit(1);
    }
}

fn run_main() -> anyhow::Result<()> {
    let args = cli::parse();
    logging::init_logging(args.log_level)?;
    let out = run(&args)?;
    print!("{out}");
    Ok(())
}
