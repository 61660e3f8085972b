use std::process::ExitCode;

use clap::Parser;
use env_logger::Env;
use fractal_viewer::Cli;

const USAGE: &str = "Usage:\n ./fractal_viewer mandelbrot\n ./fractal_viewer julia <real> <imag>";

fn main() -> ExitCode {
    env_logger::init_from_env(Env::default().default_filter_or("info"));

    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) if err.use_stderr() => {
            let _ = err.print();
            eprintln!("\n{}", USAGE);
            return ExitCode::FAILURE;
        }
        Err(err) => {
            // --help and --version
            let _ = err.print();
            return ExitCode::SUCCESS;
        }
    };

    match fractal_viewer::run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            log::error!("{}", err);
            eprintln!("error: {}", err);
            ExitCode::FAILURE
        }
    }
}
