use std::path::PathBuf;
use futures::future::BoxFuture;
use futures::FutureExt;

use crate::{
    Error,
    error::Result,
    search::contact::Contact,
};

/// The external origin of the raw contact list. `load` is a long-running,
/// cancelable operation; each call produces one complete list, sorted by
/// display name ascending, or a free-text transport/permission error.
pub trait ContactSource: Send + Sync {
    fn load(&self) -> BoxFuture<'static, Result<Vec<Contact>>>;
}

/// Contact source backed by a JSON file holding an array of contacts.
/// A stand-in for platform enumeration, and handy for tests and demos.
pub struct JsonFileSource {
    path: PathBuf,
}

impl JsonFileSource {
    pub fn new(path: &str) -> Self {
        Self {
            path: PathBuf::from(path),
        }
    }

    pub fn path(&self) -> &str {
        self.path.to_str().unwrap_or(".")
    }
}

impl ContactSource for JsonFileSource {
    fn load(&self) -> BoxFuture<'static, Result<Vec<Contact>>> {
        let path = self.path.clone();
        async move {
            let read = tokio::task::spawn_blocking(move || {
                std::fs::read_to_string(path)
            }).await;

            let data = match read {
                Ok(Ok(data)) => data,
                Ok(Err(e)) => return Err(Error::Source(
                    format!("Reading contacts error: {}", e)
                )),
                Err(e) => return Err(Error::State(
                    format!("Contacts reader aborted: {}", e)
                )),
            };

            serde_json::from_str::<Vec<Contact>>(&data).map_err(|e| {
                Error::Source(format!("Bad contacts data, error: {}", e))
            })
        }.boxed()
    }
}
