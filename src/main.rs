#[cfg(feature = "debug")]
#[macro_use]
extern crate log;
#[cfg(feature = "debug")]
extern crate chrono;
#[cfg(feature = "debug")]
extern crate fern;
extern crate contagion;

use std::process;

use contagion::interactor;

fn main() {
    #[cfg(feature = "debug")]
    init_logging();
    if let Err(e) = interactor::run() {
        eprintln!("contagion: {}", e);
        process::exit(1);
    }
}

#[cfg(feature = "debug")]
fn init_logging() {
    let result = fern::Dispatch::new()
        .format(|out, message, record| {
            out.finish(format_args!(
                "{} {} {} {}",
                chrono::Local::now().format("%H:%M:%S%.6f"),
                record.target(),
                record.level(),
                message
            ))
        })
        .level(log::LevelFilter::Debug)
        .chain(std::io::stderr())
        .apply();
    match result {
        Ok(()) => debug!("logging to stderr"),
        Err(e) => eprintln!("logging initialization failed: {}", e),
    }
}
