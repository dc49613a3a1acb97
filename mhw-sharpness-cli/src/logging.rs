use std::io::Write;

use log::LevelFilter;

/// Install the process logger.
///
/// Normal output goes through `log::info!`, so the default format prints
/// bare messages. `--verbose` switches to debug level with timestamps and
/// `--quiet` keeps only warnings and errors. `RUST_LOG` still applies on
/// top of either.
pub(crate) fn init(quiet: bool, verbose: bool) {
    let level = if verbose {
        LevelFilter::Debug
    } else if quiet {
        LevelFilter::Warn
    } else {
        LevelFilter::Info
    };

    let mut builder = env_logger::Builder::new();
    builder.filter_level(level).parse_default_env();

    if verbose {
        builder.format_timestamp_millis().format_target(true);
    } else {
        builder.format(|buf, record| writeln!(buf, "{}", record.args()));
    }

    // Ignore a second initialization; the first logger stays.
    let _ = builder.try_init();
}
