//! Wall clock and sleep for the search debounce, per target.

use std::time::Duration;

/// Time since the Unix epoch. Only differences between readings matter.
pub fn now() -> Duration {
    #[cfg(target_family = "wasm")]
    {
        Duration::from_secs_f64(js_sys::Date::now() / 1000.0)
    }
    #[cfg(not(target_family = "wasm"))]
    {
        std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .unwrap_or_default()
    }
}

pub async fn sleep(duration: Duration) {
    #[cfg(target_family = "wasm")]
    gloo_timers::future::TimeoutFuture::new(duration.as_millis() as u32).await;
    #[cfg(not(target_family = "wasm"))]
    tokio::time::sleep(duration).await;
}
