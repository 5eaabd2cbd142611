//! Scripted host for a bottom navigation bar.
//!
//! Run with `RUST_LOG=navbar_view=debug cargo run --example demo` to see the
//! bar's own logging alongside the host's.

use std::sync::Arc;
use std::time::{Duration, Instant};

use navbar_view::prelude::*;
use tracing_subscriber::EnvFilter;

const ITEMS: [(u32, &str, &str); 5] = [
    (0, "ic_account_circle", "Account"),
    (1, "ic_search", "Search"),
    (2, "ic_favorite", "Favorites"),
    (3, "ic_inbox", "Inbox"),
    (4, "ic_settings", "Settings"),
];

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("demo=info,navbar_view=debug")),
        )
        .init();

    let mut bar = BottomNavigationBar::new()
        .with_animation(Duration::from_millis(200), Easing::EaseOutCubic)
        .with_layout_params(LayoutParams::new(56.0));
    bar.set_item_limit(0, Some(ITEMS.len()))?;

    for (id, icon, label) in ITEMS {
        let item = NavigationItem::new(ItemId::new(id), icon)
            .with_label(label)
            .with_label_mode(LabelMode::OnlyChecked)
            .with_color(Color::from_rgb8(0x3F, 0x51, 0xB5))
            .with_badge("1");
        bar.add_item(item)?;
    }
    tracing::info!(target: "demo", items = bar.len(), "bar populated");

    if let Err(err) = bar.add_item(NavigationItem::new(ItemId::new(5), "ic_extra")) {
        tracing::info!(target: "demo", %err, "sixth item rejected");
    }

    // Opening a section marks its badge as read.
    let items: Arc<Vec<SharedItem>> = Arc::new(bar.items().cloned().collect());
    bar.set_check_listener(Box::new(move |change: &CheckChange| {
        tracing::info!(target: "demo", old = ?change.old, new = ?change.new, "check changed");
        if let Some(item) = items.iter().find(|item| Some(item.id()) == change.new) {
            item.set_badge_text(None);
        }
    }));

    bar.on_item_tapped(ItemId::new(2))?;
    bar.on_item_tapped(ItemId::new(4))?;
    bar.on_item_tapped(ItemId::new(4))?;

    bar.set_item_width_fixed(true);
    bar.set_item_width_fixed(false);

    bar.attach_behavior(Box::new(LiftUpBehavior::new()));
    let mut now = Instant::now();
    for delta_y in [4.0, 6.0, 12.0] {
        bar.dispatch_scroll_at(ScrollSignal::Scroll { delta_y }, now);
    }
    run_frames(&mut bar, &mut now);

    bar.dispatch_scroll_at(ScrollSignal::Fling { velocity_y: -2400.0 }, now);
    run_frames(&mut bar, &mut now);

    bar.detach_behavior();
    bar.hide(Box::new(|vis: &VisibilityController| {
        tracing::info!(target: "demo", state = ?vis.state(), "hide finished");
    }));
    run_frames(&mut bar, &mut Instant::now());

    for item in bar.presentation().items {
        tracing::info!(
            target: "demo",
            id = %item.id,
            checked = item.checked,
            label = ?item.label,
            badge = ?item.badge,
            "item"
        );
    }

    Ok(())
}

/// Tick at 60 fps until the running animation settles.
fn run_frames(bar: &mut BottomNavigationBar, now: &mut Instant) {
    let frame = Duration::from_micros(16_667);
    while bar.visibility().is_animating() {
        *now += frame;
        bar.tick(*now);
        tracing::debug!(
            target: "demo",
            translation_y = bar.presentation().translation_y,
            "frame"
        );
    }
    tracing::info!(target: "demo", state = ?bar.visibility().state(), "settled");
}
