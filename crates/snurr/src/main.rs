use std::process::ExitCode;
use std::time::Duration;

use snurr_engine::device::ScreenInit;
use snurr_engine::logging::{LoggingConfig, init_logging};
use snurr_engine::window::{RunSummary, Runtime, RuntimeConfig};
use winit::dpi::PhysicalSize;

mod app;
mod overlap;

use app::SnurrApp;

fn main() -> ExitCode {
    init_logging(LoggingConfig {
        default_level: log::LevelFilter::Warn,
        ..LoggingConfig::default()
    });

    let result = Runtime::run(runtime_config(), ScreenInit::default(), SnurrApp::new());

    match &result {
        Ok(summary) => log::info!("window closed after {} frames", summary.frames),
        Err(err) => eprintln!("{err:#}"),
    }

    ExitCode::from(exit_status(&result))
}

fn runtime_config() -> RuntimeConfig {
    RuntimeConfig {
        title: "Snurr".to_string(),
        size: PhysicalSize::new(640, 480),
        frame_interval: Duration::from_millis(2),
    }
}

/// `0` after a clean run, `1` when setup (or a frame) failed.
fn exit_status(result: &anyhow::Result<RunSummary>) -> u8 {
    match result {
        Ok(_) => 0,
        Err(_) => 1,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use snurr_engine::device::SetupError;

    #[test]
    fn clean_run_exits_zero() {
        assert_eq!(exit_status(&Ok(RunSummary { frames: 120 })), 0);
    }

    #[test]
    fn setup_failure_exits_one() {
        let err = anyhow::Error::from(SetupError::Subsystem("no display".into()));
        assert_eq!(err.to_string(), "Could not initialize windowing subsystem: no display");
        assert_eq!(exit_status(&Err(err)), 1);
    }

    #[test]
    fn snurr_window_is_fixed_size() {
        let config = runtime_config();
        assert_eq!(config.title, "Snurr");
        assert_eq!(config.size, PhysicalSize::new(640, 480));
    }

    #[test]
    fn screen_requests_core_4_1_with_small_color_depth() {
        let init = ScreenInit::default();
        assert_eq!(init.gl_version, (4, 1));
        assert_eq!((init.color_bits.red, init.color_bits.green, init.color_bits.blue), (5, 5, 5));
        assert_eq!(init.depth_bits, 16);
        assert!(init.double_buffer);
    }
}
