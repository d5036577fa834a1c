use log::LevelFilter;

pub trait Config: Send + Sync {
    fn contacts_path(&self) -> Option<&str>;

    fn log_level(&self) -> LevelFilter;
    fn log_file(&self) -> Option<&str>;
}
