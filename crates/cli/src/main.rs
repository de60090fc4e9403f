use std::process::ExitCode;

fn main() -> ExitCode {
    farescan_cli::init_tracing();
    farescan_cli::run()
}
