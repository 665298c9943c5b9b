use clap::Parser;

// ──────────────────────────────────────────────────────────────
//  Entry point
// ──────────────────────────────────────────────────────────────
fn main() {
    #[cfg(feature = "logging")]
    env_logger::init();

    let args = relnotes::ui::cli::Cli::parse();
    if let Err(e) = relnotes::app_controller::run(args) {
        relnotes::ui::output::print_error(&e);
        std::process::exit(1);
    }
}
