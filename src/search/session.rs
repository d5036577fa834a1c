use std::sync::Arc;
use log::{debug, error, info, warn};
use log::LevelFilter;
use tokio::sync::{mpsc, watch};
use tokio::task::JoinHandle;

use crate::{
    Config,
    Error,
    error::Result,
    core::logger,
};

use crate::search::{
    contact::Contact,
    contact_source::{ContactSource, JsonFileSource},
    favorite_store::FavoriteStore,
    search_listener::SearchListener,
    state::{SearchState, SearchSnapshot},
};

pub(crate) enum Command {
    Load,
    LoadCompleted(u64, Result<Vec<Contact>>),
    SetQuery(String),
    ToggleFavorite(String),
    ToggleFailed(String),
    ClearError,
}

pub struct SearchSessionBuilder<'a> {
    source      : Option<Arc<dyn ContactSource>>,
    store       : Option<Arc<dyn FavoriteStore>>,
    listeners   : Vec<Box<dyn SearchListener>>,
    cfg         : Option<&'a dyn Config>,
}

impl<'a> SearchSessionBuilder<'a> {
    pub fn new() -> Self {
        Self {
            source      : None,
            store       : None,
            listeners   : Vec::new(),
            cfg         : None,
        }
    }

    pub fn with_source(&mut self, source: Arc<dyn ContactSource>) -> &mut Self {
        self.source = Some(source);
        self
    }

    pub fn with_store(&mut self, store: Arc<dyn FavoriteStore>) -> &mut Self {
        self.store = Some(store);
        self
    }

    pub fn with_listener(&mut self, listener: Box<dyn SearchListener>) -> &mut Self {
        self.listeners.push(listener);
        self
    }

    pub fn with_configuration(&mut self, cfg: &'a dyn Config) -> &mut Self {
        self.cfg = Some(cfg);
        self
    }

    pub fn build(&mut self) -> Result<SearchSession> {
        match self.cfg {
            Some(cfg) => logger::setup(cfg.log_level(), cfg.log_file()),
            None => logger::setup(LevelFilter::Info, None),
        }

        let source = match self.source.take() {
            Some(source) => source,
            None => {
                let path = self.cfg.and_then(|v| v.contacts_path());
                let Some(path) = path else {
                    return Err(Error::Argument("Missing contact source!!!".into()));
                };
                Arc::new(JsonFileSource::new(path)) as Arc<dyn ContactSource>
            }
        };

        let Some(store) = self.store.take() else {
            return Err(Error::Argument("Missing favorite store!!!".into()));
        };

        Ok(SearchSession::new(
            source,
            store,
            std::mem::take(&mut self.listeners)
        ))
    }
}

impl Default for SearchSessionBuilder<'_> {
    fn default() -> Self {
        Self::new()
    }
}

/// One search session: holds the command channel to the runner task and
/// the watch channel carrying the derived view. All three inputs (contact
/// list, favorite-id set, query) are combined on the runner, one update at
/// a time, so observers never see a view mixing inputs from different
/// instants.
pub struct SearchSession {
    cmd_tx      : mpsc::UnboundedSender<Command>,
    snapshot_rx : watch::Receiver<SearchSnapshot>,

    runner      : Option<(SessionRunner, mpsc::UnboundedReceiver<Command>)>,
    handle      : Option<JoinHandle<()>>,
}

impl SearchSession {
    fn new(
        source: Arc<dyn ContactSource>,
        store: Arc<dyn FavoriteStore>,
        listeners: Vec<Box<dyn SearchListener>>
    ) -> Self {
        let (cmd_tx, cmd_rx) = mpsc::unbounded_channel();
        let (snapshot_tx, snapshot_rx) = watch::channel(SearchSnapshot::default());

        let runner = SessionRunner {
            state   : SearchState::new(),
            source,
            store,
            listeners,

            cmd_tx  : cmd_tx.clone(),
            snapshot_tx,

            load_generation: 0,
            loading : None,
        };

        Self {
            cmd_tx,
            snapshot_rx,
            runner  : Some((runner, cmd_rx)),
            handle  : None,
        }
    }

    /// Spawns the runner task. Commands issued before `start` are queued
    /// and applied once the runner is up. Must be called from within a
    /// tokio runtime.
    pub fn start(&mut self) -> Result<()> {
        let Some((runner, cmd_rx)) = self.runner.take() else {
            return Err(Error::State("Search session already started!!!".into()));
        };

        self.handle = Some(tokio::spawn(runner.run(cmd_rx)));
        Ok(())
    }

    /// Tears the session down. Any in-flight contact load is discarded,
    /// never applied to a stopped session.
    pub fn stop(&mut self) {
        self.runner = None;
        if let Some(handle) = self.handle.take() {
            handle.abort();
            info!("Search session stopped.");
        }
    }

    /// Requests a (re)load of the contact list from the source. Starting
    /// a new load supersedes any load still in flight.
    pub fn load(&self) -> Result<()> {
        self.send_command(Command::Load)
    }

    /// Replaces the query text; stored verbatim, matched trimmed.
    pub fn set_query(&self, query: &str) -> Result<()> {
        self.send_command(Command::SetQuery(query.to_string()))
    }

    /// Asks the favorite store to flip membership of `id`. The view
    /// reflects the change once the store re-emits its id set; there is
    /// no optimistic local echo.
    pub fn toggle_favorite(&self, id: &str) -> Result<()> {
        self.send_command(Command::ToggleFavorite(id.to_string()))
    }

    pub fn clear_error(&self) -> Result<()> {
        self.send_command(Command::ClearError)
    }

    /// The current derived view.
    pub fn snapshot(&self) -> SearchSnapshot {
        self.snapshot_rx.borrow().clone()
    }

    /// A receiver observing every published view.
    pub fn subscribe(&self) -> watch::Receiver<SearchSnapshot> {
        self.snapshot_rx.clone()
    }

    fn send_command(&self, cmd: Command) -> Result<()> {
        if self.runner.is_none() && self.handle.is_none() {
            return Err(Error::State("Search session is stopped!!!".into()));
        }

        self.cmd_tx.send(cmd).map_err(|_| {
            Error::State("Search session is stopped!!!".into())
        })
    }
}

impl Drop for SearchSession {
    fn drop(&mut self) {
        if let Some(handle) = self.handle.take() {
            handle.abort();
        }
    }
}

struct SessionRunner {
    state       : SearchState,
    source      : Arc<dyn ContactSource>,
    store       : Arc<dyn FavoriteStore>,
    listeners   : Vec<Box<dyn SearchListener>>,

    cmd_tx      : mpsc::UnboundedSender<Command>,
    snapshot_tx : watch::Sender<SearchSnapshot>,

    load_generation: u64,
    loading     : Option<JoinHandle<()>>,
}

impl SessionRunner {
    // Single-writer reducer: every input change is funneled through this
    // loop, each one triggering exactly one recomputation. The loop never
    // awaits source or store work itself, so query updates stay fast.
    async fn run(mut self, mut cmd_rx: mpsc::UnboundedReceiver<Command>) {
        let mut fav_rx = self.store.subscribe();
        let mut fav_alive = true;

        self.state.set_favorites(fav_rx.borrow_and_update().clone());
        self.publish();
        info!("Search session started.");

        let mut running = true;
        while running {
            tokio::select! {
                cmd = cmd_rx.recv() => {
                    match cmd {
                        Some(cmd) => self.handle_command(cmd),
                        None => running = false,
                    }
                }

                res = fav_rx.changed(), if fav_alive => {
                    match res {
                        Ok(_) => {
                            let favorites = fav_rx.borrow_and_update().clone();
                            debug!("Favorite set updated, {} entries.", favorites.len());
                            self.state.set_favorites(favorites);
                            self.publish();
                        },
                        // The store went away; keep the last mirror.
                        Err(_) => fav_alive = false,
                    }
                }
            }
        }

        if let Some(handle) = self.loading.take() {
            handle.abort();
        }
    }

    fn handle_command(&mut self, cmd: Command) {
        match cmd {
            Command::Load => {
                self.load_generation += 1;
                let generation = self.load_generation;

                if let Some(handle) = self.loading.take() {
                    handle.abort();
                }

                self.state.begin_load();
                self.publish();

                debug!("Loading contacts (generation {})...", generation);

                let load = self.source.load();
                let cmd_tx = self.cmd_tx.clone();
                self.loading = Some(tokio::spawn(async move {
                    let result = load.await;
                    _ = cmd_tx.send(Command::LoadCompleted(generation, result));
                }));
            }

            Command::LoadCompleted(generation, result) => {
                if generation != self.load_generation {
                    // A newer load supersedes this one.
                    debug!("Discarded stale contacts load (generation {}).", generation);
                    return;
                }

                self.loading = None;
                match result {
                    Ok(contacts) => {
                        info!("Loaded {} contacts.", contacts.len());
                        self.state.finish_load(contacts);
                    },
                    Err(e) => {
                        let msg = format!("Failed to load contacts: {}", e);
                        error!("{}", msg);
                        self.state.fail_load(&msg);
                        for listener in self.listeners.iter() {
                            listener.on_load_failed(&msg);
                        }
                    }
                }
                self.publish();
            }

            Command::SetQuery(query) => {
                self.state.set_query(&query);
                self.publish();
            }

            Command::ToggleFavorite(id) => {
                // Read-check-then-act against the store's authoritative
                // state; the mirror only changes when the store re-emits.
                let store = self.store.clone();
                let cmd_tx = self.cmd_tx.clone();
                tokio::spawn(async move {
                    let result = async {
                        match store.contains(&id).await? {
                            true => store.remove(&id).await,
                            false => store.add(&id).await,
                        }
                    }.await;

                    if let Err(e) = result {
                        let msg = format!("Failed to update favorite: {}", e);
                        _ = cmd_tx.send(Command::ToggleFailed(msg));
                    }
                });
            }

            Command::ToggleFailed(msg) => {
                warn!("{}", msg);
                self.state.set_error(&msg);
                self.publish();
            }

            Command::ClearError => {
                self.state.clear_error();
                self.publish();
            }
        }
    }

    fn publish(&self) {
        let snapshot = self.state.snapshot();
        for listener in self.listeners.iter() {
            listener.on_view_changed(&snapshot);
        }
        self.snapshot_tx.send_replace(snapshot);
    }
}
