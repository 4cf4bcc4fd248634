//! Console logging
//!
//! On wasm32 these forward to the browser console through `web_sys`.
//! Native builds (tests, tools) have no console binding, so the macros only
//! type-check their arguments there.
//!
//! ```rust
//! use bouncy_engine::console_log;
//!
//! let bodies = 3;
//! console_log!("spawned {} bodies", bodies);
//! ```

#[doc(hidden)]
#[cfg(target_arch = "wasm32")]
pub fn write_log(msg: &str) {
    web_sys::console::log_1(&msg.into());
}

#[doc(hidden)]
#[cfg(target_arch = "wasm32")]
pub fn write_warn(msg: &str) {
    web_sys::console::warn_1(&msg.into());
}

/// `console.log` with `format!` arguments
#[macro_export]
macro_rules! console_log {
    ($($arg:tt)*) => {{
        #[cfg(target_arch = "wasm32")]
        {
            $crate::core::utils::log::write_log(&format!($($arg)*));
        }
        #[cfg(not(target_arch = "wasm32"))]
        {
            let _ = format_args!($($arg)*);
        }
    }};
}

/// `console.warn` with `format!` arguments
#[macro_export]
macro_rules! console_warn {
    ($($arg:tt)*) => {{
        #[cfg(target_arch = "wasm32")]
        {
            $crate::core::utils::log::write_warn(&format!($($arg)*));
        }
        #[cfg(not(target_arch = "wasm32"))]
        {
            let _ = format_args!($($arg)*);
        }
    }};
}
