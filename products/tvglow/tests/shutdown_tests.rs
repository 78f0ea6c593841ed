use std::future::pending;
use std::io;
use std::time::Duration;
use tvglow::shutdown::{Termination, first_of};

async fn broken() -> io::Result<()> {
    Err(io::Error::other("no signal driver"))
}

async fn after(ms: u64) -> io::Result<()> {
    tokio::time::sleep(Duration::from_millis(ms)).await;
    Ok(())
}

#[tokio::test]
async fn test_failed_handler_does_not_resolve() {
    let waited = tokio::time::timeout(
        Duration::from_millis(50),
        first_of(broken(), pending::<io::Result<()>>()),
    )
    .await;
    assert!(waited.is_err(), "a broken SIGINT handler ended the wait");
}

#[tokio::test]
async fn test_other_source_still_fires_after_failure() {
    assert_eq!(first_of(broken(), after(10)).await, Termination::Terminate);
    assert_eq!(first_of(after(10), broken()).await, Termination::Interrupt);
}

#[tokio::test]
async fn test_first_source_wins() {
    assert_eq!(first_of(after(1), after(200)).await, Termination::Interrupt);
    assert_eq!(first_of(after(200), after(1)).await, Termination::Terminate);
}
