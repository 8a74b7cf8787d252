use chrono::Local;
use log::LevelFilter;
use simplelog::*;
use std::fs::File;

fn parse_level(loglevel: &str) -> LevelFilter {
    match loglevel {
        "debug" => LevelFilter::Debug,
        "info" => LevelFilter::Info,
        "warn" => LevelFilter::Warn,
        "error" => LevelFilter::Error,
        "off" => LevelFilter::Off,
        _ => panic!("loglevel must be debug, info, warn, error or off"),
    }
}

/// Initialize a terminal logger with the given level. Repeated calls are
/// harmless: only the first initialization wins.
pub fn init_terminal_logger(loglevel: &str) {
    // an Err here means a logger is already installed; keep the existing one
    let _ = CombinedLogger::init(vec![TermLogger::new(
        parse_level(loglevel),
        Config::default(),
        TerminalMode::Mixed,
        ColorChoice::Auto,
    )]);
}

/// Initialize terminal logging plus a timestamped log file
pub fn init_file_logger(loglevel: &str) -> std::io::Result<()> {
    let date_and_time = Local::now().format("%Y-%m-%d_%H-%M-%S");
    let name = format!("log_{}.txt", date_and_time);
    let logger_instance = CombinedLogger::init(vec![
        TermLogger::new(
            parse_level(loglevel),
            Config::default(),
            TerminalMode::Mixed,
            ColorChoice::Auto,
        ),
        WriteLogger::new(parse_level(loglevel), Config::default(), File::create(&name)?),
    ]);
    let _ = logger_instance;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_level() {
        assert_eq!(parse_level("debug"), LevelFilter::Debug);
        assert_eq!(parse_level("info"), LevelFilter::Info);
    }

    #[test]
    #[should_panic]
    fn test_parse_level_unknown() {
        parse_level("loud");
    }

    #[test]
    fn test_init_twice_is_harmless() {
        init_terminal_logger("info");
        init_terminal_logger("debug");
    }
}
