use std::fs::{File, OpenOptions};
use std::io::{self, Write};
use std::sync::Mutex;
use log::{
    LevelFilter,
    Metadata,
    Record
};

static MY_LOGGER: MyLogger = MyLogger {
    file: Mutex::new(None),
};

struct MyLogger {
    file: Mutex<Option<File>>,
}

impl log::Log for MyLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            let line = format!(
                "[{}] [{}] {}",
                record.target(),
                record.level(),
                record.args()
            );
            match self.file.lock().unwrap().as_mut() {
                Some(file) => _ = writeln!(file, "{}", line),
                None => println!("{}", line),
            }
        }
    }

    fn flush(&self) {
        _ = io::stdout().flush();
    }
}

static NULL_LOGGER: NullLogger = NullLogger;
struct NullLogger;
impl log::Log for NullLogger {
    fn enabled(&self, _: &Metadata) -> bool {
        false
    }
    fn log(&self, _: &Record) {}
    fn flush(&self) {}
}

pub(crate) fn setup(level: LevelFilter, file: Option<&str>) {
    if let Some(path) = file {
        let opened = OpenOptions::new()
            .create(true)
            .append(true)
            .open(path);
        if let Ok(v) = opened {
            *MY_LOGGER.file.lock().unwrap() = Some(v);
        }
    }

    _ = log::set_logger(&MY_LOGGER);
    _ = log::set_max_level(level);
}

#[allow(unused)]
pub(crate) fn teardown() {
    _ = log::set_logger(&NULL_LOGGER);
}
