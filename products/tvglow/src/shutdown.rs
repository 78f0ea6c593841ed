use std::future::Future;
use std::io;

/// Which termination request arrived.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Termination {
    Interrupt,
    Terminate,
}

/// Resolve on the first of two signal sources.
///
/// A source that fails to install is logged and never fires, so one broken
/// handler cannot end the loop on its own.
pub async fn first_of<I, T>(interrupt: I, terminate: T) -> Termination
where
    I: Future<Output = io::Result<()>>,
    T: Future<Output = io::Result<()>>,
{
    tokio::select! {
        _ = or_pending("SIGINT", interrupt) => Termination::Interrupt,
        _ = or_pending("SIGTERM", terminate) => Termination::Terminate,
    }
}

async fn or_pending(name: &str, source: impl Future<Output = io::Result<()>>) {
    if let Err(err) = source.await {
        log::warn!("unable to listen for {name}: {err}");
        std::future::pending::<()>().await;
    }
}

async fn sigterm() -> io::Result<()> {
    use tokio::signal::unix::{SignalKind, signal};
    let mut terminate = signal(SignalKind::terminate())?;
    match terminate.recv().await {
        Some(()) => Ok(()),
        None => Err(io::Error::other("SIGTERM stream closed")),
    }
}

/// Resolves once SIGINT or SIGTERM arrives.
pub async fn termination() -> Termination {
    first_of(tokio::signal::ctrl_c(), sigterm()).await
}
