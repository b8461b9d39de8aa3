//! Console logging macros
//!
//! On wasm32 the message is formatted and forwarded to the browser console.
//! Native builds (tests, benches) type-check the arguments and emit nothing,
//! since imported JS functions cannot be called off-wasm.
//!
//! Usage:
//! ```rust
//! use nest_engine::console_log;
//!
//! let bodies = 3;
//! console_log!("seeded {} bodies", bodies);
//! ```

/// Log an info line to the host console
#[macro_export]
macro_rules! console_log {
    ($($arg:tt)*) => {{
        #[cfg(target_arch = "wasm32")]
        {
            $crate::web_sys::console::log_1(&format!($($arg)*).into());
        }
        #[cfg(not(target_arch = "wasm32"))]
        {
            let _ = format!($($arg)*);
        }
    }};
}

/// Log a warning to the host console
#[macro_export]
macro_rules! console_warn {
    ($($arg:tt)*) => {{
        #[cfg(target_arch = "wasm32")]
        {
            $crate::web_sys::console::warn_1(&format!($($arg)*).into());
        }
        #[cfg(not(target_arch = "wasm32"))]
        {
            let _ = format!($($arg)*);
        }
    }};
}
