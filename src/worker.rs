//! Fetch worker thread
//!
//! Runs every backend request off the UI thread. Requests arrive on an
//! unbounded channel and each one becomes its own task on a current-thread
//! tokio runtime, so nothing waits for anything else: completions come back in
//! whatever order the network delivers them. Successful responses are sent to
//! the UI over a std channel that the event loop drains between frames.
//! Failures are logged and produce no response at all.

use std::sync::mpsc::{self, Receiver, Sender};
use std::thread::JoinHandle;

use tokio::sync::mpsc::{UnboundedReceiver, UnboundedSender, unbounded_channel};
use tokio_util::sync::CancellationToken;

use crate::api::{ImageResult, InstantAnswer, RelatedTopic, SearchClient, Suggestion};
use crate::page::{InputId, PageId};

/// Work for the fetch worker
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FetchRequest {
    /// Suggestions for the value of one search input
    Suggestions {
        input: InputId,
        seq: u64,
        query: String,
    },
    InstantAnswer { page: PageId, query: String },
    Images { page: PageId, query: String },
    RelatedTopics { page: PageId, query: String },
}

impl FetchRequest {
    /// Short name used in log lines
    pub fn kind(&self) -> &'static str {
        match self {
            FetchRequest::Suggestions { .. } => "suggestions",
            FetchRequest::InstantAnswer { .. } => "instant answer",
            FetchRequest::Images { .. } => "images",
            FetchRequest::RelatedTopics { .. } => "related topics",
        }
    }
}

/// Decoded backend answer, tagged with the input or page it was issued for
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FetchResponse {
    Suggestions {
        input: InputId,
        seq: u64,
        /// Input value the request was issued with
        query: String,
        suggestions: Vec<Suggestion>,
    },
    InstantAnswer {
        page: PageId,
        answer: InstantAnswer,
    },
    Images {
        page: PageId,
        images: Vec<ImageResult>,
    },
    RelatedTopics {
        page: PageId,
        topics: Vec<RelatedTopic>,
    },
}

/// Channels to a running worker; dropping the handle stops the worker
#[derive(Debug)]
pub struct WorkerHandle {
    pub requests: UnboundedSender<FetchRequest>,
    pub responses: Receiver<FetchResponse>,
    shutdown: CancellationToken,
    thread: Option<JoinHandle<()>>,
}

impl WorkerHandle {
    /// Stop accepting requests and wait for the worker thread to exit
    ///
    /// In-flight requests are abandoned.
    pub fn shutdown(mut self) {
        self.stop();
    }

    fn stop(&mut self) {
        self.shutdown.cancel();
        if let Some(thread) = self.thread.take()
            && thread.join().is_err()
        {
            log::error!("Fetch worker thread panicked");
        }
    }
}

impl Drop for WorkerHandle {
    fn drop(&mut self) {
        self.stop();
    }
}

/// Spawn the fetch worker thread
pub fn spawn_worker(client: SearchClient) -> std::io::Result<WorkerHandle> {
    let (request_tx, request_rx) = unbounded_channel();
    let (response_tx, response_rx) = mpsc::channel();
    let shutdown = CancellationToken::new();
    let token = shutdown.clone();

    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?;

    let thread = std::thread::Builder::new()
        .name("fetch-worker".to_string())
        .spawn(move || {
            runtime.block_on(worker_loop(client, request_rx, response_tx, token));
            log::debug!("Fetch worker thread shutting down");
        })?;

    Ok(WorkerHandle {
        requests: request_tx,
        responses: response_rx,
        shutdown,
        thread: Some(thread),
    })
}

/// Accept requests until shutdown or until every sender is gone
async fn worker_loop(
    client: SearchClient,
    mut request_rx: UnboundedReceiver<FetchRequest>,
    response_tx: Sender<FetchResponse>,
    shutdown: CancellationToken,
) {
    loop {
        tokio::select! {
            biased;
            _ = shutdown.cancelled() => break,
            request = request_rx.recv() => {
                let Some(request) = request else {
                    break;
                };
                let client = client.clone();
                let response_tx = response_tx.clone();
                tokio::spawn(async move {
                    if let Some(response) = fetch(&client, request).await
                        && response_tx.send(response).is_err()
                    {
                        log::debug!("UI gone, dropping response");
                    }
                });
            }
        }
    }
}

/// Perform one request
///
/// Network and parse failures take the same path: an error log line and no
/// response.
pub async fn fetch(client: &SearchClient, request: FetchRequest) -> Option<FetchResponse> {
    let kind = request.kind();

    let result = match request {
        FetchRequest::Suggestions { input, seq, query } => {
            let outcome = client.autocomplete(&query).await;
            outcome.map(|suggestions| FetchResponse::Suggestions {
                input,
                seq,
                query,
                suggestions,
            })
        }
        FetchRequest::InstantAnswer { page, query } => client
            .instant_answer(&query)
            .await
            .map(|answer| FetchResponse::InstantAnswer { page, answer }),
        FetchRequest::Images { page, query } => client
            .images(&query)
            .await
            .map(|images| FetchResponse::Images { page, images }),
        FetchRequest::RelatedTopics { page, query } => client
            .related_topics(&query)
            .await
            .map(|topics| FetchResponse::RelatedTopics { page, topics }),
    };

    match result {
        Ok(response) => Some(response),
        Err(e) => {
            log::error!("Error fetching {}: {}", kind, e);
            None
        }
    }
}

#[cfg(test)]
#[path = "worker_tests.rs"]
mod worker_tests;
