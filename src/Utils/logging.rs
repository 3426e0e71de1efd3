use log::info;
use simplelog::{ColorChoice, CombinedLogger, Config, LevelFilter, TermLogger, TerminalMode};

/// One-call terminal logger setup for binaries, tests and benches.
///
/// Accepted levels are "error", "warn", "info", "debug" and "trace"; "off"
/// and "none" skip installation entirely. Anything else is caller misuse and
/// panics. A second call in the same process is a no-op because the global
/// logger can only be installed once.
pub fn init_console_logging(loglevel: &str) {
    let log_option = match loglevel {
        "off" | "none" => return,
        "error" => LevelFilter::Error,
        "warn" => LevelFilter::Warn,
        "info" => LevelFilter::Info,
        "debug" => LevelFilter::Debug,
        "trace" => LevelFilter::Trace,
        _ => panic!(
            "loglevel must be one of off, none, error, warn, info, debug, trace; got '{}'",
            loglevel
        ),
    };
    let logger_instance = CombinedLogger::init(vec![TermLogger::new(
        log_option,
        Config::default(),
        TerminalMode::Mixed,
        ColorChoice::Auto,
    )]);
    match logger_instance {
        Ok(()) => info!("console logging initialized at level {}", log_option),
        // a logger is already installed for this process, keep it
        Err(_) => {}
    }
}
