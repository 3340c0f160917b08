// Diagnostic logging setup for the binary

use tracing::Level;

/// Log level for the given verbosity flag
pub fn level_for(verbose: bool) -> Level {
    if verbose {
        Level::DEBUG
    } else {
        Level::INFO
    }
}

/// Install the fmt subscriber, writing to stderr so command output stays clean
pub fn init_logging(verbose: bool) {
    let result = tracing_subscriber::fmt()
        .with_max_level(level_for(verbose))
        .with_target(verbose)
        .with_writer(std::io::stderr)
        .try_init();

    if result.is_err() {
        tracing::debug!("tracing subscriber already installed");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_level_for_verbosity() {
        assert_eq!(level_for(false), Level::INFO);
        assert_eq!(level_for(true), Level::DEBUG);
    }

    #[test]
    fn test_init_twice_is_harmless() {
        init_logging(false);
        init_logging(true);
    }
}
