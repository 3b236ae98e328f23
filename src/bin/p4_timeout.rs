// Pattern 4: Specifying a Timeout
// The built-in harness has no per-test deadline. Async tests get one from
// `tokio::time::timeout`; synchronous work is moved to a blocking task and
// awaited the same way.

use std::time::Duration;
use tokio::time::{error::Elapsed, timeout};

pub fn sum(a: i64, b: i64) -> i64 {
    a + b
}

/// Run blocking `f` on the blocking pool and give up after `limit`.
pub async fn run_with_timeout<F, T>(limit: Duration, f: F) -> Result<T, Elapsed>
where
    F: FnOnce() -> T + Send + 'static,
    T: Send + 'static,
{
    let handle = tokio::task::spawn_blocking(f);
    match timeout(limit, handle).await? {
        Ok(value) => Ok(value),
        // Re-raise a panic from the closure as a test failure.
        Err(join_error) if join_error.is_panic() => std::panic::resume_unwind(join_error.into_panic()),
        Err(join_error) => panic!("blocking task did not finish: {join_error}"),
    }
}


#[tokio::main]
async fn main() {
    println!("Timeouts - run with: cargo test --bin p4_timeout");
    match run_with_timeout(Duration::from_secs(1), || sum(1, 2)).await {
        Ok(value) => println!("1 + 2 = {} (within 1s)", value),
        Err(_) => println!("timed out"),
    }
}
