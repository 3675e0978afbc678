//! Canvas WASM Application - Zero JavaScript Architecture
//!
//! The entire four-demo lab runs in Rust/WASM. JavaScript is reduced to
//! a single initialization line:
//!
//! ```text
//! HTML: <script type="module">import init, {initLabApp} from './pkg/bigolab.js'; await init(); initLabApp();</script>
//! ```
//!
//! All logic lives in Rust:
//! - DOM manipulation via web-sys
//! - Canvas rendering via web-sys
//! - Event handling via closures
//! - State management in Rust structs

// DOM bootstrap fails loudly; there is no caller to propagate to.
#![allow(clippy::unwrap_used, clippy::expect_used)]
#![allow(clippy::cast_precision_loss, clippy::cast_possible_truncation, clippy::cast_sign_loss)]

use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;

use crate::config::{LabConfig, ThemeConfig};
use crate::demos::{
    BinarySearchDemo, ComplexityDemo, ConstantAccessDemo, DemoFrame, LinearScanDemo,
    QuadraticGridDemo, SlotState,
};
use crate::engine::{ComplexityClass, StepPacer};

/// Nominal requestAnimationFrame period at 60fps.
const FRAME_PERIOD: Duration = Duration::from_micros(16_667);

/// DOM id suffix for each demo, matching the page markup.
const fn dom_name(class: ComplexityClass) -> &'static str {
    match class {
        ComplexityClass::Constant => "constant",
        ComplexityClass::Linear => "linear",
        ComplexityClass::Quadratic => "quadratic",
        ComplexityClass::Logarithmic => "log",
    }
}

/// Resolved theme colors for canvas drawing.
struct Theme {
    accent: String,
    bar: String,
    fill: String,
    window: String,
    border: String,
}

impl Theme {
    /// Read the page's CSS custom properties, falling back to the
    /// configured defaults.
    fn resolve(document: &web_sys::Document, fallback: &ThemeConfig) -> Self {
        let css_var = |name: &str, default: &str| -> String {
            web_sys::window()
                .and_then(|w| {
                    let body = document.body()?;
                    w.get_computed_style(&body).ok().flatten()
                })
                .and_then(|style| style.get_property_value(name).ok())
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
                .unwrap_or_else(|| default.to_string())
        };

        Self {
            accent: css_var("--accent-color", &fallback.accent),
            bar: fallback.bar.clone(),
            fill: fallback.fill.clone(),
            window: fallback.window.clone(),
            border: css_var("--border-color", &fallback.border),
        }
    }
}

/// One demo's canvas and 2d context.
struct DemoView {
    canvas: web_sys::HtmlCanvasElement,
    ctx: web_sys::CanvasRenderingContext2d,
}

impl DemoView {
    fn new(document: &web_sys::Document, class: ComplexityClass) -> Result<Self, JsValue> {
        let canvas = document
            .get_element_by_id(&format!("canvas-{}", dom_name(class)))
            .ok_or_else(|| JsValue::from_str("missing canvas"))?
            .dyn_into::<web_sys::HtmlCanvasElement>()?;
        let ctx = canvas
            .get_context("2d")?
            .ok_or_else(|| JsValue::from_str("no 2d context"))?
            .dyn_into::<web_sys::CanvasRenderingContext2d>()?;
        Ok(Self { canvas, ctx })
    }

    fn width(&self) -> f64 {
        f64::from(self.canvas.width())
    }

    fn height(&self) -> f64 {
        f64::from(self.canvas.height())
    }

    fn clear(&self) {
        self.ctx
            .clear_rect(0.0, 0.0, self.width(), self.height());
    }
}

/// Global app state - wrapped in `RefCell` for interior mutability.
struct LabAppState {
    constant: ConstantAccessDemo,
    linear: LinearScanDemo,
    quadratic: QuadraticGridDemo,
    logarithmic: BinarySearchDemo,
    constant_view: DemoView,
    linear_view: DemoView,
    quadratic_view: DemoView,
    logarithmic_view: DemoView,
    theme: Theme,
    frame_count: u64,
    /// Frame at which each demo's current run was armed, by class index.
    run_started: [u64; 4],
}

impl LabAppState {
    fn new(document: &web_sys::Document, config: &LabConfig) -> Result<Self, JsValue> {
        let seed = config.seed;
        Ok(Self {
            constant: ConstantAccessDemo::new(config.sliders.constant.default, seed),
            linear: LinearScanDemo::new(config.sliders.linear.default, seed),
            quadratic: QuadraticGridDemo::new(config.sliders.quadratic.default, seed),
            logarithmic: BinarySearchDemo::new(config.sliders.logarithmic.default, seed),
            constant_view: DemoView::new(document, ComplexityClass::Constant)?,
            linear_view: DemoView::new(document, ComplexityClass::Linear)?,
            quadratic_view: DemoView::new(document, ComplexityClass::Quadratic)?,
            logarithmic_view: DemoView::new(document, ComplexityClass::Logarithmic)?,
            theme: Theme::resolve(document, &config.theme),
            frame_count: 0,
            run_started: [0; 4],
        })
    }

    fn demo_mut(&mut self, class: ComplexityClass) -> &mut dyn ComplexityDemo {
        match class {
            ComplexityClass::Constant => &mut self.constant,
            ComplexityClass::Linear => &mut self.linear,
            ComplexityClass::Quadratic => &mut self.quadratic,
            ComplexityClass::Logarithmic => &mut self.logarithmic,
        }
    }

    fn demo(&self, class: ComplexityClass) -> &dyn ComplexityDemo {
        match class {
            ComplexityClass::Constant => &self.constant,
            ComplexityClass::Linear => &self.linear,
            ComplexityClass::Quadratic => &self.quadratic,
            ComplexityClass::Logarithmic => &self.logarithmic,
        }
    }

    /// Arm a run, recording the arming frame so pacing counts from it.
    /// Returns false if a run was already in flight.
    fn begin(&mut self, class: ComplexityClass) -> bool {
        let frame = self.frame_count;
        if self.demo_mut(class).begin().is_ok() {
            self.run_started[class as usize] = frame;
            return true;
        }
        false
    }

    /// Advance every running demo whose pacer is due this frame.
    /// Returns the classes that changed.
    ///
    /// Frames are counted per run from its arming frame, so the first
    /// step always waits one whole step delay.
    fn tick(&mut self) -> Vec<ComplexityClass> {
        let frame = self.frame_count;
        let mut changed = Vec::new();
        for class in ComplexityClass::ALL {
            let elapsed = frame.saturating_sub(self.run_started[class as usize]);
            let demo = self.demo_mut(class);
            if !demo.is_running() {
                continue;
            }
            let pacer = StepPacer::new(class, demo.size());
            if pacer.should_step(elapsed, FRAME_PERIOD) {
                demo.step();
                changed.push(class);
            }
        }
        self.frame_count += 1;
        changed
    }

    fn render(&self, class: ComplexityClass) {
        match class {
            ComplexityClass::Constant => self.render_constant(),
            ComplexityClass::Linear => self.render_linear(),
            ComplexityClass::Quadratic => self.render_quadratic(),
            ComplexityClass::Logarithmic => self.render_logarithmic(),
        }
    }

    fn render_all(&self) {
        for class in ComplexityClass::ALL {
            self.render(class);
        }
    }

    /// O(1): a flat strip, with a triangle arrow over the probed slot.
    fn render_constant(&self) {
        let view = &self.constant_view;
        let w = view.width();
        view.clear();

        view.ctx.set_fill_style_str(&self.theme.bar);
        view.ctx.fill_rect(10.0, 40.0, w - 20.0, 20.0);

        if let Some(probe) = self.constant.probe() {
            let n = self.constant.size().max(1) as f64;
            let x = 10.0 + (probe as f64 + 0.5) * (w - 20.0) / n;
            view.ctx.set_fill_style_str(&self.theme.accent);
            view.ctx.begin_path();
            view.ctx.move_to(x, 10.0);
            view.ctx.line_to(x + 10.0, 30.0);
            view.ctx.line_to(x - 10.0, 30.0);
            view.ctx.fill();
        }
    }

    /// O(n): equal-height bars, the cursor highlighted.
    fn render_linear(&self) {
        let view = &self.linear_view;
        let DemoFrame::Bars(frame) = self.linear.frame() else {
            return;
        };
        let n = frame.slots.len().max(1) as f64;
        let w = view.width();
        let h = view.height();
        view.clear();

        let bar_width = (w - 20.0) / n;
        let height = 100.0;
        let y = (h - height) / 2.0;

        for (i, slot) in frame.slots.iter().enumerate() {
            let x = 10.0 + i as f64 * bar_width;
            let color = if *slot == SlotState::Probe {
                &self.theme.accent
            } else {
                &self.theme.bar
            };
            view.ctx.set_fill_style_str(color);
            view.ctx.fill_rect(x, y, bar_width - 1.0, height);
        }
    }

    /// O(n²): bordered grid, visited cells filled, cursor highlighted.
    fn render_quadratic(&self) {
        let view = &self.quadratic_view;
        let DemoFrame::Grid(frame) = self.quadratic.frame() else {
            return;
        };
        let n = frame.n;
        let w = view.width();
        view.clear();
        if n == 0 {
            return;
        }

        let padding = 10.0;
        let cell_size = (w - padding * 2.0) / n as f64;

        for row in 0..n {
            for col in 0..n {
                let x = padding + col as f64 * cell_size;
                let y = padding + row as f64 * cell_size;

                view.ctx.set_stroke_style_str(&self.theme.border);
                view.ctx.stroke_rect(x, y, cell_size, cell_size);

                let fill = match frame.cell(row, col) {
                    SlotState::Visited => Some(&self.theme.fill),
                    SlotState::Probe => Some(&self.theme.accent),
                    _ => None,
                };
                if let Some(color) = fill {
                    view.ctx.set_fill_style_str(color);
                    view.ctx
                        .fill_rect(x + 1.0, y + 1.0, cell_size - 2.0, cell_size - 2.0);
                }
            }
        }
    }

    /// O(log n): bars with the discarded halves dimmed via global alpha.
    fn render_logarithmic(&self) {
        let view = &self.logarithmic_view;
        let DemoFrame::Bars(frame) = self.logarithmic.frame() else {
            return;
        };
        let n = frame.slots.len().max(1) as f64;
        let w = view.width();
        let h = view.height();
        view.clear();

        let bar_width = (w - 40.0) / n;
        let height = 80.0;
        let y = (h - height) / 2.0;

        for (i, slot) in frame.slots.iter().enumerate() {
            let x = 20.0 + i as f64 * bar_width;
            let (color, alpha) = match slot {
                SlotState::Found => (&self.theme.fill, 1.0),
                SlotState::Probe => (&self.theme.accent, 1.0),
                SlotState::Window => (&self.theme.window, 1.0),
                _ => (&self.theme.bar, 0.2),
            };
            view.ctx.set_global_alpha(alpha);
            view.ctx.set_fill_style_str(color);
            view.ctx.fill_rect(x, y, bar_width - 1.0, height);
            view.ctx.set_global_alpha(1.0);
        }
    }

    fn update_stats(&self, document: &web_sys::Document) {
        for class in ComplexityClass::ALL {
            let demo = self.demo(class);
            set_text(
                document,
                &format!("stats-{}", dom_name(class)),
                &stats_value(demo),
            );
        }
        set_text(
            document,
            "total-quadratic",
            &self.quadratic.total_ops().to_string(),
        );
    }
}

/// Text for a demo's stats span.
///
/// The grid's total already has its own `total-quadratic` span, so its
/// stats span gets the bare ops count; the other demos show their stat
/// line unchanged.
fn stats_value(demo: &dyn ComplexityDemo) -> String {
    if demo.class() == ComplexityClass::Quadratic {
        demo.ops_done().to_string()
    } else {
        demo.stat_line()
    }
}

fn set_text(document: &web_sys::Document, id: &str, text: &str) {
    if let Some(el) = document.get_element_by_id(id) {
        el.set_text_content(Some(text));
    }
}

fn get_value(document: &web_sys::Document, id: &str) -> Option<String> {
    document
        .get_element_by_id(id)?
        .dyn_ref::<web_sys::HtmlInputElement>()
        .map(|el| el.value())
}

fn setup_button<F>(document: &web_sys::Document, id: &str, mut callback: F) -> Result<(), JsValue>
where
    F: FnMut() + 'static,
{
    if let Some(btn) = document.get_element_by_id(id) {
        let closure = Closure::wrap(Box::new(move |_: web_sys::Event| {
            callback();
        }) as Box<dyn FnMut(_)>);

        btn.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref())?;
        closure.forget();
    }
    Ok(())
}

fn setup_slider(
    document: &web_sys::Document,
    state: &Rc<RefCell<LabAppState>>,
    config: &LabConfig,
    class: ComplexityClass,
) -> Result<(), JsValue> {
    let name = dom_name(class);
    let Some(slider) = document.get_element_by_id(&format!("slider-{name}-n")) else {
        return Ok(());
    };

    let slider_cfg = *config.slider_for(class);
    let state = Rc::clone(state);
    let doc = document.clone();
    let closure = Closure::wrap(Box::new(move |_: web_sys::Event| {
        let n = get_value(&doc, &format!("slider-{name}-n"))
            .and_then(|v| v.parse().ok())
            .map_or(slider_cfg.default, |v| slider_cfg.clamp(v));
        set_text(&doc, &format!("val-{name}-n"), &n.to_string());
        let mut s = state.borrow_mut();
        s.demo_mut(class).set_size(n);
        s.render(class);
        s.update_stats(&doc);
    }) as Box<dyn FnMut(_)>);

    slider.add_event_listener_with_callback("input", closure.as_ref().unchecked_ref())?;
    closure.forget();
    Ok(())
}

fn setup_run_button(
    document: &web_sys::Document,
    state: &Rc<RefCell<LabAppState>>,
    class: ComplexityClass,
) -> Result<(), JsValue> {
    let name = dom_name(class);
    setup_button(document, &format!("btn-{name}-run"), {
        let state = Rc::clone(state);
        let doc = document.clone();
        move || {
            let mut s = state.borrow_mut();
            // A click while the run is in flight is a no-op.
            if s.begin(class) {
                s.render(class);
                s.update_stats(&doc);
            }
        }
    })
}


fn request_animation_frame(f: &Closure<dyn FnMut()>) {
    web_sys::window()
        .unwrap()
        .request_animation_frame(f.as_ref().unchecked_ref())
        .unwrap();
}

/// Initialize the lab WASM app - call from JavaScript
#[wasm_bindgen(js_name = initLabApp)]
pub fn init_lab_app() -> Result<(), JsValue> {
    // Set panic hook for better error messages
    console_error_panic_hook::set_once();

    let window = web_sys::window().expect("no window");
    let document = window.document().expect("no document");

    let config = LabConfig::default();
    let state = Rc::new(RefCell::new(LabAppState::new(&document, &config)?));

    // Initial render
    {
        let s = state.borrow();
        s.render_all();
        s.update_stats(&document);
    }

    // Slider and run button wiring per demo
    for class in ComplexityClass::ALL {
        setup_slider(&document, &state, &config, class)?;
        setup_run_button(&document, &state, class)?;
    }

    // Animation loop using requestAnimationFrame
    {
        let state = Rc::clone(&state);
        let doc = document.clone();

        #[allow(clippy::type_complexity)]
        let f: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
        let g = Rc::clone(&f);

        *g.borrow_mut() = Some(Closure::new(move || {
            {
                let mut s = state.borrow_mut();
                let changed = s.tick();
                for class in changed {
                    s.render(class);
                }
                if s.frame_count % 4 == 0 {
                    s.update_stats(&doc);
                }
            }
            request_animation_frame(f.borrow().as_ref().unwrap());
        }));

        request_animation_frame(g.borrow().as_ref().unwrap());
    }

    Ok(())
}
