//! Detached task spawning, per target.
//!
//! Timer futures queued by the reveal hooks outlive the component render that
//! created them; they hold nothing but a channel sender, so a spawn that is
//! not tied to the component scope is the right shape. A send into a closed
//! channel (component unmounted) is silently dropped by the caller.

#[cfg(target_arch = "wasm32")]
pub fn spawn_future<F>(future: F)
where
    F: std::future::Future<Output = ()> + 'static,
{
    wasm_bindgen_futures::spawn_local(future);
}

#[cfg(not(target_arch = "wasm32"))]
pub fn spawn_future<F>(future: F)
where
    F: std::future::Future<Output = ()> + Send + 'static,
{
    tokio::spawn(future);
}
