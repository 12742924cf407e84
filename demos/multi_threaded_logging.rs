use shlog::{Severity, SharedLogger};

fn log_message(level: Severity, message: &str) {
    let logger = SharedLogger::instance().expect("unable to open log file");
    logger.log(message, level).expect("unable to write log message");
}

fn main() {
    let logger = SharedLogger::instance().expect("unable to open log file");
    logger.set_level(Severity::Info).unwrap();

    let handles = [
        std::thread::spawn(|| log_message(Severity::Info, "This is an info message")),
        std::thread::spawn(|| log_message(Severity::Warning, "This is a warning message")),
        std::thread::spawn(|| log_message(Severity::Error, "This is an error message")),
    ];
    for handle in handles {
        handle.join().unwrap();
    }

    logger.shutdown().expect("unable to close log file");
}
