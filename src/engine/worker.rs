use std::sync::mpsc::{self, Receiver, Sender};

use crate::engine::llm_client::{RemoteTutorClient, RemoteTutorSettings};
use crate::engine::protocol::{TutorCommand, TutorResponse};

/// Background thread that owns the blocking remote tutor client.
pub struct TutorWorker {
    rx: Receiver<TutorCommand>,
    tx: Sender<TutorResponse>,
    client: RemoteTutorClient,
}

impl TutorWorker {
    pub fn new(
        rx: Receiver<TutorCommand>,
        tx: Sender<TutorResponse>,
        settings: RemoteTutorSettings,
    ) -> Self {
        Self {
            rx,
            tx,
            client: RemoteTutorClient::new(settings),
        }
    }

    /// Starts the worker on its own thread and returns the UI's ends of
    /// the channels. The thread exits once the command sender is dropped.
    pub fn spawn(settings: RemoteTutorSettings) -> (Sender<TutorCommand>, Receiver<TutorResponse>) {
        let (cmd_tx, cmd_rx) = mpsc::channel();
        let (resp_tx, resp_rx) = mpsc::channel();

        std::thread::spawn(move || {
            let mut worker = TutorWorker::new(cmd_rx, resp_tx, settings);
            worker.run();
        });

        (cmd_tx, resp_rx)
    }

    pub fn run(&mut self) {
        while let Ok(cmd) = self.rx.recv() {
            match cmd {
                TutorCommand::Ask { question, context } => {
                    let response = match self.client.ask(&question, context.as_deref()) {
                        Ok(answer) => TutorResponse::Answered { question, answer },
                        Err(e) => {
                            tracing::warn!("Remote tutor failed for '{}': {}", question, e);
                            TutorResponse::Failed {
                                question,
                                reason: e.to_string(),
                            }
                        }
                    };

                    if self.tx.send(response).is_err() {
                        break;
                    }
                }

                TutorCommand::Configure(settings) => {
                    self.client = RemoteTutorClient::new(settings);

                    let settings = self.client.settings();
                    tracing::info!(
                        enabled = settings.enabled,
                        mode = ?settings.mode,
                        endpoint = %settings.endpoint,
                        "Remote tutor reconfigured"
                    );
                }
            }
        }

        tracing::debug!("Tutor worker stopped");
    }
}
