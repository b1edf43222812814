use snurr_engine::core::{App, AppControl, FrameCtx, StartCtx};
use snurr_engine::device::SetupError;

use crate::overlap::OverlapScene;

/// Frames between debug timing reports.
const REPORT_EVERY: u64 = 1000;

#[derive(Debug, Default)]
pub struct SnurrApp {
    scene: Option<OverlapScene>,
}

impl SnurrApp {
    pub fn new() -> Self {
        Self::default()
    }
}

impl App for SnurrApp {
    fn on_start(&mut self, ctx: &mut StartCtx<'_>) -> Result<(), SetupError> {
        println!("{}", ctx.info);

        self.scene = Some(OverlapScene::setup(ctx)?);
        log::info!("scene ready, viewport {:?}", ctx.viewport);
        Ok(())
    }

    fn on_frame(&mut self, ctx: &mut FrameCtx<'_>) -> AppControl {
        if let Some(scene) = &self.scene {
            scene.record(ctx.plan);
        }

        if ctx.time.frame_index % REPORT_EVERY == 0 {
            log::debug!("frame {} (dt {:.4}s)", ctx.time.frame_index, ctx.time.dt);
        }

        AppControl::Continue
    }

    fn on_exit(&mut self) {
        self.scene = None;
        log::debug!("scene released");
    }
}
