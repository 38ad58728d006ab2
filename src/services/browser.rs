use anyhow::Result;
use log::{debug, info};
use std::io::Write;
use std::sync::Arc;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, BufReader};
use tokio::sync::mpsc;

use crate::api::CachedProvider;
use crate::cache::{ResourceKey, Ticket, ViewSession};
use crate::render::{OutputFormat, format_view};
use crate::services::views::ViewService;
use crate::views::{RenderedView, Route};

const HELP: &str = "Enter a page route such as /season/2025/leaderboard, \
/season/2025/match/3 or /season/2025/match/3/attendance.\n\
Commands: :refresh  :clear  :help  :quit";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Input {
    Navigate(Route),
    Refresh,
    Clear,
    Help,
    Quit,
}

fn parse_input(line: &str) -> Result<Option<Input>> {
    let line = line.trim();
    let input = match line {
        "" => return Ok(None),
        ":refresh" | ":r" => Input::Refresh,
        ":clear" => Input::Clear,
        ":help" | ":h" => Input::Help,
        ":quit" | ":q" => Input::Quit,
        path => Input::Navigate(path.parse()?),
    };
    Ok(Some(input))
}

type Loaded = (Ticket, Result<RenderedView>);

/// Interactive navigator over the page routes.
///
/// Loads run in the background; when the user navigates again before a load
/// finishes, its response is discarded once it arrives.
pub struct BrowseService {
    views: ViewService,
    cache: Arc<CachedProvider>,
    format: OutputFormat,
}

impl BrowseService {
    pub fn new(cache: Arc<CachedProvider>, format: OutputFormat) -> Self {
        Self {
            views: ViewService::new(cache.clone()),
            cache,
            format,
        }
    }

    pub async fn run(&self) -> Result<()> {
        let stdin = BufReader::new(tokio::io::stdin());
        self.run_with(stdin, std::io::stdout()).await
    }

    pub async fn run_with<R, W>(&self, reader: R, mut out: W) -> Result<()>
    where
        R: AsyncBufRead + Unpin,
        W: Write,
    {
        let mut lines = reader.lines();
        let mut session = ViewSession::new();
        let mut current = Route::Root;
        let (tx, mut rx) = mpsc::unbounded_channel::<Loaded>();
        let mut input_open = true;
        self.navigate(&mut session, current, &tx);
        let mut pending = 1usize;

        loop {
            tokio::select! {
                line = lines.next_line(), if input_open => {
                    let parsed = match line? {
                        Some(line) => parse_input(&line),
                        None => {
                            input_open = false;
                            Ok(None)
                        }
                    };
                    match parsed {
                        Ok(None) => {}
                        Ok(Some(Input::Navigate(route))) => {
                            current = route;
                            self.navigate(&mut session, route, &tx);
                            pending += 1;
                        }
                        Ok(Some(Input::Refresh)) => {
                            for key in self.refresh_keys(&session, current).await {
                                self.cache.invalidate(&key).await;
                            }
                            self.navigate(&mut session, current, &tx);
                            pending += 1;
                        }
                        Ok(Some(Input::Clear)) => {
                            self.cache.clear().await;
                            writeln!(out, "Cache cleared")?;
                        }
                        Ok(Some(Input::Help)) => writeln!(out, "{}", HELP)?,
                        Ok(Some(Input::Quit)) => break,
                        Err(e) => writeln!(out, "{:#}", e)?,
                    }
                }
                Some((ticket, result)) = rx.recv() => {
                    pending -= 1;
                    if !session.is_current(&ticket) {
                        debug!("Dropping superseded response for {}", ticket.key);
                    } else {
                        match result {
                            Ok(view) => writeln!(out, "{}", format_view(&view, self.format)?)?,
                            Err(e) => writeln!(out, "Error: {:#}", e)?,
                        }
                    }
                }
            }

            if !input_open && pending == 0 {
                break;
            }
        }

        out.flush()?;
        Ok(())
    }

    /// Keys behind the page on screen; the root page also shows the
    /// leaderboard it lands on
    async fn refresh_keys(&self, session: &ViewSession, route: Route) -> Vec<ResourceKey> {
        let mut keys: Vec<ResourceKey> = session.current_key().into_iter().collect();
        if route == Route::Root {
            match self.views.initial_route().await {
                Ok(landing) => keys.push(landing.resource_key()),
                Err(e) => debug!("Root page not resolved, refreshing season only: {:#}", e),
            }
        }
        keys
    }

    fn navigate(
        &self,
        session: &mut ViewSession,
        route: Route,
        tx: &mpsc::UnboundedSender<Loaded>,
    ) {
        let ticket = session.begin(route.resource_key());
        info!("Loading {}", route);

        let views = self.views.clone();
        let tx = tx.clone();
        tokio::spawn(async move {
            let result = views.load(route).await;
            let _ = tx.send((ticket, result));
        });
    }
}
