//! Main egui application — wires adapters and owns the frame loop.

use std::rc::Rc;

use egui::{self, Align2, Vec2};
use egui_commonmark::CommonMarkCache;

use widget_core::event_bus::EventBus;
use widget_core::ports::ChatTransport;
use widget_core::runtime::WidgetRuntime;
use widget_core::{ports::ClientStore, prefs, session};
use widget_platform::http::HttpChatTransport;
use widget_platform::store::{auto_detect_store, CookieStore};
use widget_types::config::{WidgetConfig, OPEN_STATE_KEY};
use widget_ui::panels::{chat, launcher};
use widget_ui::state::UiState;
use widget_ui::theme;

/// The widget application state
pub struct WidgetApp {
    config: WidgetConfig,
    ui_state: UiState,
    bus: EventBus,
    runtime: Rc<WidgetRuntime>,
    transport: Rc<dyn ChatTransport>,
    prefs_store: Rc<dyn ClientStore>,
    markdown_cache: CommonMarkCache,
    first_frame: bool,
}

impl WidgetApp {
    pub fn new(_cc: &eframe::CreationContext<'_>, config: WidgetConfig) -> Self {
        let bus = EventBus::new();
        let prefs_store = auto_detect_store();
        let open = prefs::load_open_state(prefs_store.as_ref(), OPEN_STATE_KEY);

        let cookies = CookieStore::new();
        let session = match session::init_session(&cookies, &config.session_cookie_key()) {
            Ok(handle) => handle,
            Err(e) => {
                log::warn!(
                    "Session cookie unavailable ({}), starting a transient session",
                    e
                );
                session::transient_session()
            }
        };
        log::info!(
            "Session {} ({})",
            session.id,
            if session.is_new { "new" } else { "existing" }
        );

        let transport: Rc<dyn ChatTransport> = Rc::new(HttpChatTransport::new(config.clone()));
        let runtime = Rc::new(WidgetRuntime::new(session.id.clone(), bus.clone()));

        // Existing sessions have server-side history to restore
        if !session.is_new {
            let runtime = runtime.clone();
            let transport = transport.clone();
            wasm_bindgen_futures::spawn_local(async move {
                runtime.load_history(transport.as_ref()).await;
            });
        }

        Self {
            config,
            ui_state: UiState::new(open),
            bus,
            runtime,
            transport,
            prefs_store,
            markdown_cache: CommonMarkCache::default(),
            first_frame: true,
        }
    }

    fn set_open(&mut self, open: bool) {
        self.ui_state.open = open;
        prefs::store_open_state(self.prefs_store.as_ref(), OPEN_STATE_KEY, open);
    }

    /// Dispatch a submitted draft to the runtime (async, fire-and-forget)
    fn dispatch_send(&self, text: String, ctx: &egui::Context) {
        let runtime = self.runtime.clone();
        let transport = self.transport.clone();
        let ctx = ctx.clone();

        wasm_bindgen_futures::spawn_local(async move {
            runtime.send(&text, transport.as_ref()).await;
            ctx.request_repaint();
        });
    }
}

impl eframe::App for WidgetApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        if self.first_frame {
            theme::apply_theme(ctx);
            self.first_frame = false;
        }

        // Drain events from the runtime
        let events = self.bus.drain();
        if !events.is_empty() {
            self.ui_state.process_events(events);
            ctx.request_repaint();
        }

        if self.ui_state.is_busy() {
            ctx.request_repaint();
        }

        if self.ui_state.open {
            let action = egui::Area::new(egui::Id::new("chat_panel"))
                .anchor(Align2::RIGHT_BOTTOM, Vec2::new(-24.0, -24.0))
                .show(ctx, |ui| {
                    chat::chat_panel(
                        ui,
                        &mut self.ui_state,
                        &self.config.title,
                        &mut self.markdown_cache,
                    )
                })
                .inner;

            match action {
                chat::PanelAction::Close => self.set_open(false),
                chat::PanelAction::Send(text) => self.dispatch_send(text, ctx),
                chat::PanelAction::None => {}
            }
        } else {
            let clicked = egui::Area::new(egui::Id::new("chat_launcher"))
                .anchor(Align2::RIGHT_BOTTOM, Vec2::new(-24.0, -24.0))
                .show(ctx, |ui| launcher::launcher_button(ui))
                .inner;

            if clicked {
                self.set_open(true);
            }
        }
    }

    fn clear_color(&self, _visuals: &egui::Visuals) -> [f32; 4] {
        // The widget floats over the host page
        [0.0, 0.0, 0.0, 0.0]
    }
}
