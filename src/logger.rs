use std::sync::Once;

use cfg_if::cfg_if;
use log::info;

cfg_if! {
    if #[cfg(feature = "debug")] {
        const LOG_ENV: &str = "assertive_core=trace";
    } else {
        const LOG_ENV: &str = "assertive_core=info";
    }
}
const DEBUG_LOG_ENV: &str = "assertive_core=trace";

static INIT: Once = Once::new();

/// Installs the logger once per process. `RUST_LOG` overrides the default spec.
pub fn init_logger() {
    INIT.call_once(|| {
        init(LOG_ENV);
    });
}

/// Like [`init_logger`], but defaults to trace output for this crate.
pub fn init_logger_debug() {
    INIT.call_once(|| {
        init(DEBUG_LOG_ENV);
    });
}

cfg_if! {
    if #[cfg(feature = "flexi_logger")] {
        fn init(spec: &str) {
            match flexi_logger::Logger::try_with_env_or_str(spec)
                .and_then(|logger| logger.start())
            {
                Ok(handle) => {
                    // the logger stops when its handle is dropped
                    core::mem::forget(handle);
                    info!("Logger initialized! (Using flexi_logger) {spec}");
                }
                Err(err) => eprintln!("Failed to initialize logger: {err}"),
            }
        }
    }

    else {
        fn init(_spec: &str) {
            println!("No logger enabled. Logs will not be recorded.");
            info!("No logger enabled.");
        }
    }
}
