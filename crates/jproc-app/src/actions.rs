//! Action handlers: UpdateAction dispatch and background task spawning

use std::sync::Arc;

use tokio::sync::mpsc;

use crate::backend::BackendClient;
use crate::form::PendingSubmit;
use crate::message::Message;
use crate::UpdateAction;
use jproc_core::prelude::*;

/// Execute an action by spawning a background task
pub fn handle_action<C>(action: UpdateAction, msg_tx: mpsc::Sender<Message>, client: Arc<C>)
where
    C: BackendClient + Send + Sync + 'static,
{
    match action {
        UpdateAction::SubmitRequest(pending) => {
            tokio::spawn(async move {
                let completed = execute_submit(client.as_ref(), pending).await;
                if let Err(e) = send_completion(&msg_tx, completed).await {
                    debug!("{}", e);
                }
            });
        }
    }
}

/// Perform one POST and turn its outcome into a `SubmitCompleted` message.
///
/// The concrete failure cause is logged here; the form only ever shows the
/// generic request error.
pub async fn execute_submit<C>(client: &C, pending: PendingSubmit) -> Message
where
    C: BackendClient + Sync,
{
    let PendingSubmit { seq, body } = pending;

    let result = client.submit(&body).await.map_err(|e| {
        error!("Request #{} failed: {}", seq, e);
        e.to_string()
    });

    Message::SubmitCompleted { seq, result }
}

/// Hand a completion back to the event loop
pub async fn send_completion(msg_tx: &mpsc::Sender<Message>, msg: Message) -> Result<()> {
    msg_tx
        .send(msg)
        .await
        .map_err(|_| Error::channel_send("message channel closed before request completed"))
}
