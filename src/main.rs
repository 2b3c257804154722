//! extract-objects - prints strategy board object descriptors as JSON

use std::process::ExitCode;

use strategy_board_assets::cli;

fn main() -> ExitCode {
    cli::run()
}
