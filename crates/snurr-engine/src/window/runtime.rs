use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use winit::application::ApplicationHandler;
use winit::dpi::PhysicalSize;
use winit::event::WindowEvent;
use winit::event_loop::{ActiveEventLoop, ControlFlow, EventLoop};
use winit::window::WindowId;

use crate::core::{App, AppControl, FrameCtx, StartCtx};
use crate::device::{Screen, ScreenInit, SetupError};
use crate::render::{self, Resources};
use crate::scene::FramePlan;
use crate::time::{FrameClock, FramePacer};

/// Window/runtime configuration.
#[derive(Debug, Clone)]
pub struct RuntimeConfig {
    pub title: String,

    /// Window size in physical pixels. The window is not resizable.
    pub size: PhysicalSize<u32>,

    /// Minimum time between frames.
    pub frame_interval: Duration,
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self {
            title: "snurr".to_string(),
            size: PhysicalSize::new(640, 480),
            frame_interval: Duration::from_millis(2),
        }
    }
}

/// Loop state. `Quit` is terminal.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq)]
pub enum LoopState {
    #[default]
    Running,
    Quit,
}

impl LoopState {
    /// Applies a window event. Only a close request changes the state.
    #[inline]
    pub fn on_window_event(self, event: &WindowEvent) -> Self {
        match (self, event) {
            (LoopState::Running, WindowEvent::CloseRequested) => LoopState::Quit,
            (state, _) => state,
        }
    }

    #[inline]
    pub fn is_running(self) -> bool {
        self == LoopState::Running
    }
}

/// What the loop does once pending events are drained.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum Step {
    /// Leave the loop; no further frames.
    Exit,
    /// Draw and present a frame now.
    Render,
    /// Sleep until the next frame deadline.
    Wait(Instant),
}

/// Decides the next step. A quit state always exits, whatever the pacer says.
pub fn next_step(state: LoopState, pacer: &FramePacer, now: Instant) -> Step {
    if !state.is_running() {
        Step::Exit
    } else if pacer.is_due(now) {
        Step::Render
    } else {
        Step::Wait(pacer.deadline())
    }
}

/// What a finished run produced.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq)]
pub struct RunSummary {
    /// Frames presented before the loop ended.
    pub frames: u64,
}

/// Entry point for the runtime.
pub struct Runtime;

impl Runtime {
    /// Starts the windowing subsystem, creates the screen, hands it to `app`
    /// and drives frames until the window is closed.
    ///
    /// Setup failures come back as [`SetupError`] inside the returned error.
    pub fn run<A: App>(config: RuntimeConfig, init: ScreenInit, app: A) -> Result<RunSummary> {
        let event_loop = EventLoop::new().map_err(|e| SetupError::Subsystem(e.to_string()))?;
        let mut state = AppState::new(config, init, app);

        let loop_result = event_loop.run_app(&mut state);

        // Normally done in `exiting`; covers loops that return without it.
        state.teardown();

        if let Some(err) = state.setup_error.take() {
            return Err(err.into());
        }

        loop_result.context("winit event loop terminated with error")?;

        if let Some(err) = state.frame_error.take() {
            return Err(err);
        }

        Ok(RunSummary {
            frames: state.presented,
        })
    }
}

struct AppState<A: App> {
    config: RuntimeConfig,
    init: ScreenInit,
    app: A,

    screen: Option<Screen>,
    /// `on_start` succeeded and `on_exit` has not run yet.
    app_started: bool,
    resources: Resources,
    plan: FramePlan,

    clock: FrameClock,
    pacer: FramePacer,
    state: LoopState,
    presented: u64,

    setup_error: Option<SetupError>,
    frame_error: Option<anyhow::Error>,
}

impl<A: App> AppState<A> {
    fn new(config: RuntimeConfig, init: ScreenInit, app: A) -> Self {
        let pacer = FramePacer::new(config.frame_interval);
        Self {
            config,
            init,
            app,
            screen: None,
            app_started: false,
            resources: Resources::new(),
            plan: FramePlan::new(),
            clock: FrameClock::new(),
            pacer,
            state: LoopState::Running,
            presented: 0,
            setup_error: None,
            frame_error: None,
        }
    }

    fn quit(&mut self, event_loop: &ActiveEventLoop) {
        self.state = LoopState::Quit;
        event_loop.exit();
    }

    fn start(&mut self, event_loop: &ActiveEventLoop) -> Result<(), SetupError> {
        let screen = Screen::new(event_loop, &self.config, &self.init)?;

        let mut ctx = StartCtx {
            gl: screen.gl(),
            info: screen.info(),
            viewport: screen.viewport(),
            resources: &mut self.resources,
        };

        if let Err(e) = self.app.on_start(&mut ctx) {
            self.resources.destroy(screen.gl());
            return Err(e);
        }

        self.app_started = true;
        self.screen = Some(screen);
        Ok(())
    }

    /// Records, executes and presents one frame.
    fn render_frame(&mut self) -> Result<()> {
        let Some(screen) = self.screen.as_ref() else {
            return Ok(());
        };

        let viewport = screen.viewport();
        let time = self.clock.tick();

        self.plan.clear();
        self.plan.viewport(viewport);

        let control = {
            let mut ctx = FrameCtx {
                viewport,
                time,
                plan: &mut self.plan,
            };
            self.app.on_frame(&mut ctx)
        };

        render::execute(screen.gl(), &self.plan, &self.resources)
            .with_context(|| format!("failed to execute frame {}", time.frame_index))?;
        screen.swap_buffers().context("failed to present frame")?;
        self.presented += 1;

        if control == AppControl::Exit {
            self.state = LoopState::Quit;
        }

        Ok(())
    }

    /// Notifies the app, releases GL objects, then the screen. Each part runs
    /// at most once however often this is called.
    fn teardown(&mut self) {
        if std::mem::take(&mut self.app_started) {
            self.app.on_exit();
        }

        let Some(screen) = self.screen.take() else {
            return;
        };

        self.resources.destroy(screen.gl());
        log::debug!("tearing down after {} frames", self.presented);
        drop(screen);
    }
}

impl<A: App> ApplicationHandler for AppState<A> {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.screen.is_some() || !self.state.is_running() {
            return;
        }

        match self.start(event_loop) {
            Ok(()) => {
                self.clock.reset();
                self.pacer = FramePacer::new(self.config.frame_interval);
                event_loop.set_control_flow(ControlFlow::WaitUntil(self.pacer.deadline()));
            }
            Err(e) => {
                log::debug!("setup failed at the {} step", e.step());
                self.setup_error = Some(e);
                self.quit(event_loop);
            }
        }
    }

    fn window_event(&mut self, event_loop: &ActiveEventLoop, window_id: WindowId, event: WindowEvent) {
        let ours = self
            .screen
            .as_ref()
            .is_some_and(|screen| screen.window().id() == window_id);
        if !ours {
            return;
        }

        self.state = self.state.on_window_event(&event);
        if !self.state.is_running() {
            log::debug!("close requested for window {window_id:?}");
            event_loop.exit();
        }
    }

    fn about_to_wait(&mut self, event_loop: &ActiveEventLoop) {
        if self.screen.is_none() && self.state.is_running() {
            return;
        }

        let now = Instant::now();
        match next_step(self.state, &self.pacer, now) {
            Step::Exit => event_loop.exit(),
            Step::Render => {
                if let Err(e) = self.render_frame() {
                    self.frame_error = Some(e);
                    self.quit(event_loop);
                    return;
                }

                self.pacer.advance(now);
                match next_step(self.state, &self.pacer, now) {
                    Step::Exit => event_loop.exit(),
                    _ => event_loop.set_control_flow(ControlFlow::WaitUntil(self.pacer.deadline())),
                }
            }
            Step::Wait(deadline) => event_loop.set_control_flow(ControlFlow::WaitUntil(deadline)),
        }
    }

    fn exiting(&mut self, _event_loop: &ActiveEventLoop) {
        self.teardown();
    }
}
