/// Millisecond stopwatch: `Date.now()` in the browser, `Instant` natively
#[derive(Clone, Copy)]
pub(crate) struct PerfTimer {
    #[cfg(target_arch = "wasm32")]
    started_at_ms: f64,
    #[cfg(not(target_arch = "wasm32"))]
    started_at: std::time::Instant,
}

impl PerfTimer {
    pub(crate) fn start() -> Self {
        PerfTimer {
            #[cfg(target_arch = "wasm32")]
            started_at_ms: js_sys::Date::now(),
            #[cfg(not(target_arch = "wasm32"))]
            started_at: std::time::Instant::now(),
        }
    }

    pub(crate) fn elapsed_ms(&self) -> f64 {
        #[cfg(target_arch = "wasm32")]
        {
            js_sys::Date::now() - self.started_at_ms
        }
        #[cfg(not(target_arch = "wasm32"))]
        {
            self.started_at.elapsed().as_secs_f64() * 1000.0
        }
    }

    /// Start a timer only when perf collection is on
    pub(crate) fn start_if(enabled: bool) -> Option<Self> {
        if enabled { Some(Self::start()) } else { None }
    }
}
