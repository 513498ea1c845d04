/// Initializes env_logger. Verbose runs log every created path, otherwise
/// only warnings (ignored features, template fallbacks) are shown.
pub fn init_logger(verbose: bool) {
    env_logger::Builder::new()
        .filter_level(if verbose {
            log::LevelFilter::Debug
        } else {
            log::LevelFilter::Warn
        })
        .init();
}
