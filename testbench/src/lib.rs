use tracing::Level;

/// Send log events to stderr, so they never mix with the program output.
/// Warnings and errors are always shown, each `-v` lowers the threshold by
/// one level.
pub fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();
}
