use std::{
    fs::{File, OpenOptions},
    io::{BufWriter, Write},
};

/// Append-mode log file. Every line is flushed before the call returns.
pub struct LogFile {
    file: BufWriter<File>,
}

impl LogFile {
    pub fn new<P: AsRef<std::path::Path>>(path: P) -> Result<Self, std::io::Error> {
        let file = OpenOptions::new().create(true).append(true).open(&path)?;
        Ok(Self {
            file: BufWriter::new(file),
        })
    }

    pub fn append_line(&mut self, line: &str) -> Result<(), std::io::Error> {
        writeln!(self.file, "{line}")?;
        self.file.flush()
    }

    pub fn flush(&mut self) -> Result<(), std::io::Error> {
        self.file.flush()
    }
}

#[test]
fn test_log_file() {
    std::fs::remove_file("/tmp/shlog_test_log_file.log").ok();
    let mut log_file = LogFile::new("/tmp/shlog_test_log_file.log").unwrap();
    log_file.append_line("[INFO]: Hello, world!").unwrap();
    log_file.append_line("[ERROR]: rust is awesome !").unwrap();
    assert_eq!(
        std::fs::read_to_string("/tmp/shlog_test_log_file.log").unwrap(),
        "[INFO]: Hello, world!\n[ERROR]: rust is awesome !\n"
    );
}

#[test]
fn test_log_file_appends_to_existing() {
    let path = "/tmp/shlog_test_log_file_append.log";
    std::fs::remove_file(path).ok();
    {
        let mut log_file = LogFile::new(path).unwrap();
        log_file.append_line("first").unwrap();
    }
    let mut log_file = LogFile::new(path).unwrap();
    log_file.append_line("second").unwrap();
    assert_eq!(std::fs::read_to_string(path).unwrap(), "first\nsecond\n");
}
