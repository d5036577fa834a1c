#[cfg(test)]
mod search {
    mod session;
    mod source;
}

use std::time::Duration;
use futures::future::BoxFuture;
use futures::FutureExt;
use tokio::sync::watch;

use chosung::{
    Contact,
    ContactBuilder,
    ContactSource,
    SearchSnapshot,
    error::Result,
};

// helper functions
fn contact(id: &str, name: &str, number: &str) -> Contact {
    ContactBuilder::new(id)
        .with_name(name)
        .with_phone_number(number)
        .build()
}

fn sample_contacts() -> Vec<Contact> {
    vec![
        contact("1", "김현도", "010-1234-5678"),
        contact("2", "이영희", "010-2222-3333"),
        contact("3", "박민수", "010-4444-5555"),
    ]
}

async fn wait_for<F>(rx: &mut watch::Receiver<SearchSnapshot>, pred: F) -> SearchSnapshot
where F: Fn(&SearchSnapshot) -> bool {
    let waited = tokio::time::timeout(Duration::from_secs(5), async {
        loop {
            {
                let snapshot = rx.borrow_and_update().clone();
                if pred(&snapshot) {
                    return snapshot;
                }
            }
            rx.changed().await.expect("search session gone");
        }
    }).await;

    waited.expect("timed out waiting for a matching snapshot")
}

// Contact source producing a fixed list immediately.
struct StaticSource {
    contacts: Vec<Contact>,
}

impl ContactSource for StaticSource {
    fn load(&self) -> BoxFuture<'static, Result<Vec<Contact>>> {
        let contacts = self.contacts.clone();
        async move { Ok(contacts) }.boxed()
    }
}

// Contact source producing a fixed list after a delay.
struct SlowSource {
    contacts: Vec<Contact>,
    delay: Duration,
}

impl ContactSource for SlowSource {
    fn load(&self) -> BoxFuture<'static, Result<Vec<Contact>>> {
        let contacts = self.contacts.clone();
        let delay = self.delay;
        async move {
            tokio::time::sleep(delay).await;
            Ok(contacts)
        }.boxed()
    }
}

// Contact source replaying scripted responses, one per load call.
struct SeqSource {
    responses: std::sync::Mutex<std::collections::VecDeque<(Duration, std::result::Result<Vec<Contact>, String>)>>,
}

impl SeqSource {
    fn new(responses: Vec<(Duration, std::result::Result<Vec<Contact>, String>)>) -> Self {
        Self {
            responses: std::sync::Mutex::new(responses.into()),
        }
    }
}

impl ContactSource for SeqSource {
    fn load(&self) -> BoxFuture<'static, Result<Vec<Contact>>> {
        let next = self.responses.lock().unwrap().pop_front();
        async move {
            let Some((delay, response)) = next else {
                return Err(chosung::Error::Source("no more responses".to_string()));
            };
            tokio::time::sleep(delay).await;
            response.map_err(chosung::Error::Source)
        }.boxed()
    }
}

// Contact source that always fails.
struct FailingSource {
    message: String,
}

impl ContactSource for FailingSource {
    fn load(&self) -> BoxFuture<'static, Result<Vec<Contact>>> {
        let message = self.message.clone();
        async move {
            Err(chosung::Error::Source(message))
        }.boxed()
    }
}
