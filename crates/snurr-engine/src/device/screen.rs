use std::num::NonZeroU32;

use glutin::config::{ColorBufferType, Config, ConfigTemplateBuilder, GlConfig};
use glutin::context::{
    ContextApi, ContextAttributesBuilder, GlProfile, NotCurrentGlContext, PossiblyCurrentContext,
    Version,
};
use glutin::display::{GetGlDisplay, GlDisplay};
use glutin::surface::{GlSurface, Surface, SwapInterval, WindowSurface};
use glutin_winit::{DisplayBuilder, GlWindow};
use raw_window_handle::HasWindowHandle;
use winit::dpi::PhysicalSize;
use winit::event_loop::ActiveEventLoop;
use winit::window::Window;

use crate::coords::Viewport;
use crate::window::RuntimeConfig;

use super::{GlInfo, ScreenInit, SetupError};

/// Owns the window and the GL context bound to it.
///
/// Field order is the release order: the loaded function table and the context
/// go first, then the window surface, then the window itself. The windowing
/// subsystem (event loop) is owned by the runtime and outlives the screen.
pub struct Screen {
    /// GL function table loaded from the current context.
    gl: glow::Context,

    /// Context made current on `surface`.
    context: PossiblyCurrentContext,

    /// Window surface the context renders into.
    surface: Surface<WindowSurface>,

    window: Window,

    info: GlInfo,
}

impl Screen {
    /// Creates the window, picks a framebuffer config, creates a context and
    /// makes it current.
    ///
    /// On failure everything created so far is dropped before returning.
    pub fn new(
        event_loop: &ActiveEventLoop,
        config: &RuntimeConfig,
        init: &ScreenInit,
    ) -> Result<Self, SetupError> {
        let attrs = Window::default_attributes()
            .with_title(config.title.clone())
            .with_inner_size(config.size)
            .with_resizable(false);

        let template = ConfigTemplateBuilder::new()
            .with_buffer_type(ColorBufferType::Rgb {
                r_size: init.color_bits.red,
                g_size: init.color_bits.green,
                b_size: init.color_bits.blue,
            })
            .with_depth_size(init.depth_bits)
            .with_single_buffering(!init.double_buffer);

        let (window, gl_config) = DisplayBuilder::new()
            .with_window_attributes(Some(attrs))
            .build(event_loop, template, pick_config)
            .map_err(|e| classify_build_error(&*e))?;

        let window = window
            .ok_or_else(|| SetupError::Window("display builder returned no window".into()))?;

        log::debug!(
            "picked GL config: {:?}, depth {} bits, hardware accelerated: {}",
            gl_config.color_buffer_type(),
            gl_config.depth_size(),
            gl_config.hardware_accelerated()
        );

        let (context, surface) = create_context(&window, &gl_config, init)?;

        if init.vsync {
            let interval = SwapInterval::Wait(NonZeroU32::MIN);
            if let Err(e) = surface.set_swap_interval(&context, interval) {
                log::warn!("vsync unavailable, relying on frame pacing only: {e}");
            }
        }

        let display = gl_config.display();

        // SAFETY: the context is current on this thread for as long as `Screen` lives.
        let gl = unsafe {
            glow::Context::from_loader_function_cstr(|symbol| display.get_proc_address(symbol).cast())
        };

        let info = GlInfo::query(&gl_config, &gl);
        log::info!("GL context ready: {info}, depth size: {}", info.depth);

        Ok(Self {
            gl,
            context,
            surface,
            window,
            info,
        })
    }

    /// Returns the GL function table of the current context.
    #[inline]
    pub fn gl(&self) -> &glow::Context {
        &self.gl
    }

    #[inline]
    pub fn info(&self) -> GlInfo {
        self.info
    }

    #[inline]
    pub fn window(&self) -> &Window {
        &self.window
    }

    /// Current drawable size in physical pixels.
    #[inline]
    pub fn size(&self) -> PhysicalSize<u32> {
        self.window.inner_size()
    }

    /// Viewport covering the whole drawable.
    #[inline]
    pub fn viewport(&self) -> Viewport {
        Viewport::full(self.size())
    }

    /// Presents the back buffer.
    pub fn swap_buffers(&self) -> anyhow::Result<()> {
        self.window.pre_present_notify();
        self.surface.swap_buffers(&self.context)?;
        Ok(())
    }
}

impl Drop for Screen {
    fn drop(&mut self) {
        log::debug!("releasing GL context and window {:?}", self.window.id());
    }
}

fn create_context(
    window: &Window,
    gl_config: &Config,
    init: &ScreenInit,
) -> Result<(PossiblyCurrentContext, Surface<WindowSurface>), SetupError> {
    let raw_window_handle = window
        .window_handle()
        .map(|handle| handle.as_raw())
        .map_err(|e| SetupError::Context(e.to_string()))?;

    let (major, minor) = init.gl_version;
    let context_attrs = ContextAttributesBuilder::new()
        .with_context_api(ContextApi::OpenGl(Some(Version::new(major, minor))))
        .with_profile(GlProfile::Core)
        .build(Some(raw_window_handle));

    let display = gl_config.display();

    // SAFETY: the raw window handle belongs to `window`, which outlives the context.
    let not_current = unsafe { display.create_context(gl_config, &context_attrs) }
        .map_err(|e| SetupError::Context(e.to_string()))?;

    let surface_attrs = window
        .build_surface_attributes(Default::default())
        .map_err(|e| SetupError::Context(e.to_string()))?;

    // SAFETY: same as above; the surface is dropped before the window.
    let surface = unsafe { display.create_window_surface(gl_config, &surface_attrs) }
        .map_err(|e| SetupError::Context(e.to_string()))?;

    let context = not_current
        .make_current(&surface)
        .map_err(|e| SetupError::Context(e.to_string()))?;

    Ok((context, surface))
}

/// Maps a `DisplayBuilder::build` failure to the step that failed.
///
/// The window is created first and fails with a winit error; display creation
/// and config matching fail with a glutin error.
fn classify_build_error(err: &(dyn std::error::Error + 'static)) -> SetupError {
    if err.downcast_ref::<glutin::error::Error>().is_some() {
        SetupError::Context(format!("no usable GL display or framebuffer config: {err}"))
    } else {
        SetupError::Window(err.to_string())
    }
}

/// Keeps the platform's config order (best match first) and takes the first
/// hardware-accelerated entry, falling back to the first one.
fn pick_config(configs: Box<dyn Iterator<Item = Config> + '_>) -> Config {
    first_preferred(configs, |config| config.hardware_accelerated())
        // glutin reports an empty match as an error before calling the picker.
        .expect("glutin passed an empty config list to the picker")
}

fn first_preferred<T>(mut items: impl Iterator<Item = T>, preferred: impl Fn(&T) -> bool) -> Option<T> {
    let first = items.next()?;
    if preferred(&first) {
        return Some(first);
    }
    items.find(|item| preferred(item)).or(Some(first))
}
