mod app;
mod config_file;
mod logging;

use std::process::ExitCode;

fn main() -> ExitCode {
    app::run()
}
