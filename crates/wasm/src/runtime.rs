use std::cell::RefCell;
use std::rc::Rc;

use folio_core::FolioConfig;
use folio_core::effects::{EffectProvider, TypedConfig, init_effect};
use folio_core::entrance::{hero_entrance, page_fade_in, page_hidden};
use folio_core::filter::{Filter, apply_filter};
use folio_core::model::ScrollSnapshot;
use folio_core::motion::{ScrollAnimation, TaskKey, TaskQueue, anchor_hash, anchor_scroll_target};
use folio_core::nav::MobileNav;
use folio_core::pointer::{Magnet, Tilt};
use folio_core::reveal::{RevealTracker, root_margin};
use folio_core::scroll::{FrameGate, ScrollSynchronizer};
use folio_protocol::{ScrollBehavior, StyleOp, UiCommand};
use log::{debug, warn};
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{
    Document, Event, EventTarget, HtmlElement, IntersectionObserver, IntersectionObserverEntry,
    IntersectionObserverInit, MouseEvent, Window,
};

use crate::dom::{self, Page};
use crate::providers::{AosProvider, LightboxProvider, TypedProvider};

type Shared = Rc<RefCell<Runtime>>;

/// All mutable page state. Lives for the page's lifetime behind one
/// `Rc<RefCell<_>>`; every listener borrows it for one handler run.
pub struct Runtime {
    window: Window,
    page: Page,
    config: FolioConfig,
    sync: ScrollSynchronizer,
    parallax_gate: FrameGate,
    tasks: TaskQueue,
    task_loop_running: bool,
    mobile_nav: MobileNav,
    reveal: RevealTracker,
    observer: Option<IntersectionObserver>,
}

impl Runtime {
    fn snapshot(&self) -> ScrollSnapshot {
        ScrollSnapshot::new(
            dom::scroll_y(&self.window),
            dom::viewport_height(&self.window),
            self.page.sections(),
        )
    }

    fn apply(&self, commands: &[UiCommand]) {
        self.page.apply(&self.window, commands);
    }

    fn now(&self) -> f64 {
        self.window
            .performance()
            .map_or(0.0, |performance| performance.now())
    }

    fn sync_scroll_state(&self) {
        let state = self.sync.derive(&self.snapshot());
        self.apply(&state.scroll_commands());
    }

    fn apply_parallax(&mut self) {
        if self.page.has_hero() {
            let state = self.sync.derive(&self.snapshot());
            self.apply(&state.parallax_commands());
        }
        self.parallax_gate.complete();
    }

    fn on_load(&mut self) {
        self.sync_scroll_state();
        self.start_reveal();

        if let Err(e) = init_effect(&AosProvider, &self.config.aos) {
            warn!("{e}");
        }
        self.init_typed();

        let now = self.now();
        let (key, fade) = page_fade_in(now, &self.config.entrance);
        self.tasks.spawn(key, fade);

        let entrance = hero_entrance(&self.page.hero_parts_present(), now, &self.config.entrance);
        self.apply(&entrance.immediate);
        for (key, task) in entrance.scheduled {
            self.tasks.spawn(key, task);
        }
    }

    fn start_reveal(&mut self) {
        self.page.resolve_revealables();
        self.reveal = RevealTracker::new(self.page.revealables.len());
        self.apply(&self.reveal.prepare(&self.config.reveal));
        if let Some(observer) = &self.observer {
            for el in &self.page.revealables {
                observer.observe(el);
            }
        }
    }

    fn init_typed(&self) {
        let provider = TypedProvider { selector: ".typed" };
        if !provider.is_available() {
            return;
        }
        let Some(typed) = dom::select(self.page.document(), provider.selector) else {
            return;
        };
        let items = typed.get_attribute("data-typed-items");
        let Some(config) = TypedConfig::from_items(items.as_deref(), &self.config.typed) else {
            return;
        };
        if let Err(e) = init_effect(&provider, &config) {
            warn!("{e}");
        }
    }

    fn on_reveal_entries(&mut self, entries: &js_sys::Array) {
        for entry in entries.iter() {
            let entry: IntersectionObserverEntry = entry.unchecked_into();
            let target = entry.target();
            let node: &web_sys::Node = target.as_ref();
            let Some(index) = self
                .page
                .revealables
                .iter()
                .position(|el| el.is_same_node(Some(node)))
            else {
                continue;
            };
            if let Some(commands) = self.reveal.report(index, entry.is_intersecting()) {
                self.apply(&commands);
                if let Some(observer) = &self.observer {
                    observer.unobserve(&target);
                }
            }
        }
    }

    fn scroll_to_anchor(&mut self, hash: &str) -> bool {
        let Some(section) = dom::select(self.page.document(), hash) else {
            return false;
        };
        let from = dom::scroll_y(&self.window);
        let to = anchor_scroll_target(
            f64::from(section.offset_top()),
            self.config.anchor.header_offset,
        );
        let replaced = self.tasks.spawn(
            TaskKey::WindowScroll,
            ScrollAnimation::new(from, to, self.config.anchor.duration_ms),
        );
        if replaced {
            debug!("anchor scroll to {hash} replaced an in-flight scroll");
        }
        true
    }

    fn on_filter_click(&self, index: usize) {
        let Some(button) = self.page.filter_buttons.get(index) else {
            return;
        };
        let value = button.get_attribute("data-filter");
        match Filter::parse(value.as_deref()) {
            Ok(filter) => {
                let commands = apply_filter(
                    &filter,
                    index,
                    self.page.filter_buttons.len(),
                    &self.page.card_classes(),
                );
                self.apply(&commands);
            }
            Err(e) => warn!("ignoring filter button {index}: {e}"),
        }
    }

    fn scroll_indicator_target(&self) -> Option<f64> {
        let section = dom::select(self.page.document(), &self.config.anchor.indicator_target)?;
        Some(anchor_scroll_target(
            f64::from(section.offset_top()),
            self.config.anchor.header_offset,
        ))
    }
}

/// Borrow the runtime for one handler. A handler that fires while another is
/// still running (a synchronous dispatch from inside a handler) is dropped.
fn with_runtime<R>(shared: &Shared, f: impl FnOnce(&mut Runtime) -> R) -> Option<R> {
    match shared.try_borrow_mut() {
        Ok(mut rt) => Some(f(&mut rt)),
        Err(_) => {
            warn!("re-entrant event dropped");
            None
        }
    }
}

fn listen(
    target: &EventTarget,
    event: &str,
    handler: impl FnMut(Event) + 'static,
) -> Result<(), JsValue> {
    let closure = Closure::<dyn FnMut(Event)>::new(handler);
    target.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref())?;
    // Listeners live as long as the page.
    closure.forget();
    Ok(())
}

fn request_frame(window: &Window, callback: impl FnOnce(f64) + 'static) {
    let callback = Closure::once_into_js(callback);
    if let Err(e) = window.request_animation_frame(callback.unchecked_ref()) {
        warn!("requestAnimationFrame failed: {e:?}");
    }
}

/// Keep one frame loop polling the task queue while it has work.
fn ensure_task_loop(shared: &Shared) {
    let window = with_runtime(shared, |rt| {
        if rt.task_loop_running || rt.tasks.is_empty() {
            return None;
        }
        rt.task_loop_running = true;
        Some(rt.window.clone())
    })
    .flatten();
    if let Some(window) = window {
        schedule_task_frame(shared.clone(), &window);
    }
}

fn schedule_task_frame(shared: Shared, window: &Window) {
    let window_for_frame = window.clone();
    request_frame(window, move |now| {
        let again = with_runtime(&shared, |rt| {
            let commands = rt.tasks.poll(now);
            rt.apply(&commands);
            let again = !rt.tasks.is_empty();
            rt.task_loop_running = again;
            again
        })
        .unwrap_or(true);
        if again {
            schedule_task_frame(shared, &window_for_frame);
        }
    });
}

/// Wire every feature whose elements exist on the page.
pub fn install(window: &Window, document: &Document, config: FolioConfig) -> Result<(), JsValue> {
    let page = Page::resolve(document.clone(), &config);
    let shared: Shared = Rc::new(RefCell::new(Runtime {
        sync: ScrollSynchronizer::new(&config),
        window: window.clone(),
        page,
        config,
        parallax_gate: FrameGate::default(),
        tasks: TaskQueue::new(),
        task_loop_running: false,
        mobile_nav: MobileNav::default(),
        reveal: RevealTracker::default(),
        observer: None,
    }));

    {
        let rt = shared.borrow();
        rt.apply(&[page_hidden()]);
        if let Err(e) = init_effect(&LightboxProvider, &rt.config.lightbox) {
            warn!("{e}");
        }
    }

    install_reveal_observer(&shared)?;
    install_scroll(&shared, window)?;
    install_navigation(&shared)?;
    install_filters(&shared)?;
    install_pointer_effects(&shared)?;

    let on_load = {
        let shared = shared.clone();
        move || {
            with_runtime(&shared, Runtime::on_load);
            ensure_task_loop(&shared);
        }
    };
    if document.ready_state() == "complete" {
        // The module finished loading after the window did.
        on_load();
    } else {
        let mut on_load = Some(on_load);
        listen(window, "load", move |_| {
            if let Some(f) = on_load.take() {
                f();
            }
        })?;
    }
    Ok(())
}

fn install_reveal_observer(shared: &Shared) -> Result<(), JsValue> {
    let callback = {
        let shared = shared.clone();
        Closure::<dyn FnMut(js_sys::Array, IntersectionObserver)>::new(
            move |entries: js_sys::Array, _observer: IntersectionObserver| {
                with_runtime(&shared, |rt| rt.on_reveal_entries(&entries));
            },
        )
    };

    let mut rt = shared.borrow_mut();
    let init = IntersectionObserverInit::new();
    init.set_threshold(&JsValue::from_f64(rt.config.reveal.threshold));
    init.set_root_margin(&root_margin(&rt.config.reveal));
    let observer =
        IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &init)?;
    callback.forget();
    rt.observer = Some(observer);
    Ok(())
}

fn install_scroll(shared: &Shared, window: &Window) -> Result<(), JsValue> {
    let shared = shared.clone();
    let frame_window = window.clone();
    listen(window, "scroll", move |_| {
        let schedule = with_runtime(&shared, |rt| {
            rt.sync_scroll_state();
            rt.parallax_gate.request()
        })
        .unwrap_or(false);
        if schedule {
            let shared = shared.clone();
            request_frame(&frame_window, move |_| {
                with_runtime(&shared, Runtime::apply_parallax);
            });
        }
    })
}

fn install_navigation(shared: &Shared) -> Result<(), JsValue> {
    let rt = shared.borrow();

    if let Some(toggle) = &rt.page.mobile_toggle {
        let toggle_shared = shared.clone();
        listen(toggle, "click", move |_| {
            with_runtime(&toggle_shared, |rt| {
                let commands = rt.mobile_nav.toggle();
                rt.apply(&commands);
            });
        })?;

        for link in &rt.page.nav_links {
            let shared = shared.clone();
            listen(link, "click", move |_| {
                with_runtime(&shared, |rt| {
                    let commands = rt.mobile_nav.close();
                    rt.apply(&commands);
                });
            })?;
        }
    }

    for anchor in dom::select_all(rt.page.document(), "a[href^=\"#\"]") {
        let shared = shared.clone();
        let link = anchor.clone();
        listen(&anchor, "click", move |event| {
            let href = link.get_attribute("href");
            let Some(hash) = anchor_hash(href.as_deref()) else {
                return;
            };
            let started = with_runtime(&shared, |rt| rt.scroll_to_anchor(hash)).unwrap_or(false);
            if started {
                event.prevent_default();
                ensure_task_loop(&shared);
            }
        })?;
    }

    if let Some(indicator) = &rt.page.scroll_indicator {
        let shared = shared.clone();
        listen(indicator, "click", move |_| {
            with_runtime(&shared, |rt| {
                if let Some(top) = rt.scroll_indicator_target() {
                    rt.apply(&[UiCommand::scroll_to(top, ScrollBehavior::Smooth)]);
                }
            });
        })?;
    }
    Ok(())
}

fn install_filters(shared: &Shared) -> Result<(), JsValue> {
    let rt = shared.borrow();
    if rt.page.filter_buttons.is_empty() || rt.page.project_cards.is_empty() {
        return Ok(());
    }
    for (index, button) in rt.page.filter_buttons.iter().enumerate() {
        let shared = shared.clone();
        listen(button, "click", move |_| {
            with_runtime(&shared, |rt| rt.on_filter_click(index));
        })?;
    }
    Ok(())
}

fn install_pointer_effects(shared: &Shared) -> Result<(), JsValue> {
    let rt = shared.borrow();
    let document = rt.page.document();

    for card in dom::select_all(document, dom::TILT_CARDS) {
        let config = rt.config.pointer.clone();
        on_pointer(
            &card,
            move |el, event| {
                Tilt::from_pointer(&dom::client_rect(el), dom::pointer(event), &config)
                    .style(&config)
            },
            Tilt::reset,
        )?;
    }

    for button in dom::select_all(document, dom::MAGNETIC) {
        let config = rt.config.pointer.clone();
        on_pointer(
            &button,
            move |el, event| {
                Magnet::from_pointer(&dom::client_rect(el), dom::pointer(event), &config)
                    .style(&config)
            },
            Magnet::reset,
        )?;
    }
    Ok(())
}

/// Follow the pointer over `el` with `on_move` and restore it on leave.
fn on_pointer(
    el: &HtmlElement,
    on_move: impl Fn(&HtmlElement, &MouseEvent) -> StyleOp + 'static,
    on_leave: fn() -> StyleOp,
) -> Result<(), JsValue> {
    let target = el.clone();
    listen(el, "mousemove", move |event| {
        let Some(event) = event.dyn_ref::<MouseEvent>() else {
            return;
        };
        if let Err(e) = dom::apply_op(&target, &on_move(&target, event)) {
            warn!("pointer effect failed: {e:?}");
        }
    })?;

    let target = el.clone();
    listen(el, "mouseleave", move |_| {
        if let Err(e) = dom::apply_op(&target, &on_leave()) {
            warn!("pointer reset failed: {e:?}");
        }
    })
}
