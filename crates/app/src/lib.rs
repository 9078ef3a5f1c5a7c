//! Demo host for the star rating bar.
//!
//! Opens an iced window with one [`RatingBar`] built from the attribute file
//! and rebuilds it whenever that file changes on disk.

use futures::channel::mpsc::Sender;
use iced::{
    widget::{column, container, text},
    Alignment, Element, Length, Size, Subscription, Task,
};
use starbar_config::{default_path, load_config, ConfigWatcher};
use starbar_core::{PointerEvent, RatingBar};
use starbar_renderer::{Cache, IconHandles};
use std::path::{Path, PathBuf};
use tracing::{info, warn};

/// Space around the bar inside the window (logical pixels).
const MARGIN: f32 = 24.0;
/// Room below the bar for the value label.
const LABEL_HEIGHT: f32 = 64.0;

// ── Entry point ───────────────────────────────────────────────────────────────

/// Start the demo window.  `path` defaults to [`default_path`].
pub fn run(path: Option<PathBuf>) -> iced::Result {
    let path = path.unwrap_or_else(default_path);
    let bar = build_bar(&path);
    let size = bar.measure();
    info!("Attributes from '{}'", path.display());

    iced::application(
        move || Demo::new(path.clone(), bar.clone()),
        Demo::update,
        Demo::view,
    )
    .title("starbar")
    .subscription(Demo::subscription)
    .window_size(Size::new(
        size.width + MARGIN * 2.0,
        size.height + MARGIN * 2.0 + LABEL_HEIGHT,
    ))
    .run()
}

/// Load the attribute file, falling back to an all-default bar on error.
fn build_bar(path: &Path) -> RatingBar {
    match load_config(path) {
        Ok(cfg) => RatingBar::new(cfg),
        Err(e) => {
            warn!("{e}; using default attributes");
            RatingBar::new(Default::default())
        }
    }
}

// ── Message ───────────────────────────────────────────────────────────────────

#[derive(Debug, Clone)]
pub enum Message {
    /// Pointer input on the bar, with the bar's laid-out width.
    Pointer(PointerEvent, f32),
    /// The attribute file changed on disk.
    AttributesChanged,
}

// ── State ─────────────────────────────────────────────────────────────────────

struct Demo {
    path:    PathBuf,
    bar:     RatingBar,
    handles: Option<IconHandles>,
    cache:   Cache,
}

impl Demo {
    fn new(path: PathBuf, bar: RatingBar) -> Self {
        Self {
            path,
            handles: IconHandles::from_bar(&bar),
            bar,
            cache: Cache::new(),
        }
    }

    fn replace_bar(&mut self, bar: RatingBar) {
        self.handles = IconHandles::from_bar(&bar);
        self.bar = bar;
        self.cache.clear();
    }

    // ── Update ────────────────────────────────────────────────────────────────

    fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::Pointer(event, width) => {
                if self.bar.handle_pointer(event, width) {
                    self.cache.clear();
                }
            }
            Message::AttributesChanged => match load_config(&self.path) {
                Ok(cfg) => {
                    info!("Attributes reloaded");
                    self.replace_bar(RatingBar::new(cfg));
                }
                Err(e) => warn!("Attribute reload failed: {e}"),
            },
        }
        Task::none()
    }

    // ── View ──────────────────────────────────────────────────────────────────

    fn view(&self) -> Element<'_, Message> {
        let bar = starbar_renderer::view(
            &self.bar,
            self.handles.as_ref(),
            &self.cache,
            Message::Pointer,
        );

        let label = if self.bar.is_drawable() {
            format!("{:.1} / {}", self.bar.rating(), self.bar.config().star_count)
        } else {
            format!("Set starDark and starLight in {}", self.path.display())
        };

        let content = column![bar, text(label).size(16)]
            .spacing(MARGIN)
            .align_x(Alignment::Center);

        container(content)
            .padding(MARGIN)
            .center_x(Length::Fill)
            .center_y(Length::Fill)
            .into()
    }

    // ── Subscriptions ─────────────────────────────────────────────────────────

    fn subscription(&self) -> Subscription<Message> {
        Subscription::run_with(self.path.clone(), attribute_stream)
    }
}

// ── Subscription streams ──────────────────────────────────────────────────────

/// Watches the attribute file and sends `AttributesChanged` on every write.
fn attribute_stream(path: &PathBuf) -> impl iced::futures::Stream<Item = Message> {
    let path = path.clone();
    iced::stream::channel(1, move |mut sender: Sender<Message>| async move {
        let (_watcher, mut rx) = ConfigWatcher::spawn(&path);

        while rx.recv().await.is_some() {
            let _ = sender.try_send(Message::AttributesChanged);
        }

        // Watcher task exited; keep the subscription alive without it.
        futures::future::pending::<()>().await;
    })
}
