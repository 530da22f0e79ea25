#![forbid(unsafe_code)]

//! SwipeDeck Demo Showcase
//!
//! A scripted, headless run through the whole engine: gesture tracking and
//! commits, stack advancement and back-navigation, the view-model, the
//! archive console with its timed boot reveal, and the text effects.
//!
//! # Running
//!
//! ```sh
//! cargo run -p swipedeck-demo-showcase
//! ```
//!
//! Set `RUST_LOG=debug` to see the engine's own tracing output interleaved
//! with the script.

mod data;

use std::error::Error;

use rand::SeedableRng;
use rand::rngs::SmallRng;
use web_time::{Duration, Instant};

use swipedeck_core::{Bounds, GestureTracker, PointerEvent};
use swipedeck_extras::console::{Console, LineKind, boot_lines};
use swipedeck_extras::{DecryptReveal, GlitchMode, GlitchText};
use swipedeck_gallery::{
    Catalog, FocusAction, FocusGrid, GalleryState, GlowHint, SelectionConfig, stack_slots,
};
use swipedeck_runtime::{BootSequence, Scheduler};

/// Gap between scripted commits, comfortably past the cooldown window.
const SCRIPT_STEP: Duration = Duration::from_millis(300);

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .init();

    if let Err(e) = run() {
        eprintln!("showcase error: {e}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), Box<dyn Error>> {
    let catalog = Catalog::from_json(data::CATALOG_JSON)?;
    println!("=== SwipeDeck showcase: {} artworks loaded ===\n", catalog.artworks.len());

    run_gallery_script(&catalog);
    run_focus_script(&catalog);
    run_console_script();
    run_text_effects();
    Ok(())
}

// ---------------------------------------------------------------------------
// Gallery: gestures, commits, back-navigation
// ---------------------------------------------------------------------------

fn run_gallery_script(catalog: &Catalog) {
    let config = SelectionConfig {
        stack_depth: 3,
        ..SelectionConfig::default()
    };
    let mut gallery = GalleryState::from_catalog(catalog, config);
    let mut tracker = GestureTracker::default();
    let mut rng = SmallRng::seed_from_u64(2277);

    let bounds = Bounds::new(400.0, 560.0);
    let mut now = Instant::now();

    println!("--- gallery ---");
    print_stack(&gallery, &tracker);

    // Hover toward the right edge: tilt builds, the east glow lights up.
    tracker.process(
        &PointerEvent::Move {
            x: 390.0,
            y: 280.0,
            bounds,
        },
        now,
    );
    if let Some(glow) = GlowHint::from_gesture(&tracker.state()) {
        println!(
            "hover east: tilt ({:+.1}, {:+.1}) glow {:?} alpha {:.2} at {:?}",
            tracker.state().tilt.x,
            tracker.state().tilt.y,
            glow.direction,
            glow.alpha,
            glow.anchor,
        );
    }

    // A click on that strong lean commits east.
    if let Some(direction) = tracker.process(&PointerEvent::Click, now)
        && let Some(adv) = gallery.advance(direction, &mut rng)
    {
        println!(
            "click commit {:?}: '{}' out, '{}' in ({:?})",
            adv.direction, adv.outgoing.title, adv.picked.title, adv.tier
        );
    }

    // A short drag released under the threshold cancels.
    now += SCRIPT_STEP;
    tracker.process(&PointerEvent::DragMove { dx: 50.0, dy: 8.0 }, now);
    let cancelled = tracker.process(&PointerEvent::DragRelease { dx: 50.0, dy: 8.0 }, now);
    println!("short drag release: commit = {cancelled:?} (cancelled)");

    // Full drags commit in each remaining direction.
    for (dx, dy) in [(-210.0, 12.0), (6.0, 180.0), (-4.0, -165.0)] {
        now += SCRIPT_STEP;
        if let Some(direction) = tracker.process(&PointerEvent::DragRelease { dx, dy }, now)
            && let Some(adv) = gallery.advance(direction, &mut rng)
        {
            println!(
                "drag commit {:?}: '{}' out, '{}' in ({:?})",
                adv.direction, adv.outgoing.title, adv.picked.title, adv.tier
            );
        }
    }

    // Backtrack to the oldest trace entry.
    if let Some(oldest) = gallery.back().len().checked_sub(1)
        && let Some(front) = gallery.go_back(oldest, &mut rng)
    {
        println!("back-navigation to trace[{oldest}]: '{}' restored", front.title);
    }
    tracker.reset();

    print_stack(&gallery, &tracker);
    println!();
}

fn print_stack(gallery: &GalleryState, tracker: &GestureTracker) {
    for slot in stack_slots(gallery, &tracker.state()) {
        println!(
            "  [z{}] {:<22} scale {:.2} opacity {:.2}{}",
            slot.transform.z,
            slot.id,
            slot.transform.scale,
            slot.transform.opacity,
            if slot.interactive { "  <interactive>" } else { "" },
        );
    }
}

// ---------------------------------------------------------------------------
// Focus grid: select, panel delay, close grace, all over real timers
// ---------------------------------------------------------------------------

fn run_focus_script(catalog: &Catalog) {
    println!("--- focus grid ---");
    let mut grid = FocusGrid::new();
    let (mut scheduler, rx) = Scheduler::new();

    let Some(first) = catalog.artworks.first() else {
        return;
    };
    if let Some(FocusAction::OpenPanelAfter(delay)) = grid.select(&first.id) {
        // Shortened delays keep the showcase snappy; the wiring is the
        // production one.
        scheduler.start_timeout(delay.min(Duration::from_millis(20)), "panel");
    }
    println!(
        "selected '{}': phase {:?}, others {:?}",
        first.id,
        grid.phase(&first.id),
        grid.phase("elsewhere"),
    );

    if rx.recv_timeout(Duration::from_millis(500)) == Ok("panel") {
        grid.panel_timer_fired();
        println!("panel open: {:?} / {:?}", grid.phase(&first.id), grid.phase("elsewhere"));
    }

    if let Some(FocusAction::ClearAfter(grace)) = grid.close() {
        scheduler.start_timeout(grace.min(Duration::from_millis(20)), "clear");
    }
    if rx.recv_timeout(Duration::from_millis(500)) == Ok("clear") {
        grid.close_timer_fired();
        println!("closed: phase {:?}\n", grid.phase(&first.id));
    }
}

// ---------------------------------------------------------------------------
// Console: timed boot reveal, then a few commands
// ---------------------------------------------------------------------------

fn run_console_script() {
    println!("--- console ---");
    let mut console = Console::new();

    // The boot banner arrives one line per tick over a scheduler interval,
    // exactly as the UI wires it.
    let boot = BootSequence::with_cadence(boot_lines(), Duration::from_millis(10));
    let (mut scheduler, rx) = Scheduler::new();
    scheduler.start_interval(boot.cadence(), move |count| boot.get(count).cloned());
    while let Ok(line) = rx.recv_timeout(Duration::from_millis(500)) {
        console.push_line(line);
    }
    scheduler.cancel_all();

    for input in ["help", "signals", "warp 9"] {
        console.submit(input);
    }

    for line in console.transcript() {
        let prefix = match line.kind {
            LineKind::Command => "$",
            LineKind::Error => "!",
            LineKind::System => "#",
            LineKind::Output => " ",
        };
        println!("  {prefix} {}", line.content);
    }
    println!();
}

// ---------------------------------------------------------------------------
// Text effects
// ---------------------------------------------------------------------------

fn run_text_effects() {
    println!("--- text effects ---");
    let mut rng = SmallRng::seed_from_u64(1977);

    let mut reveal = DecryptReveal::new(">>>_CONCEPT.ARCHIVE");
    let mut frames = 0u32;
    while !reveal.is_resolved() {
        let frame = reveal.tick(&mut rng);
        frames += 1;
        if frames % 12 == 0 {
            println!("  decrypt: {frame}");
        }
    }
    println!("  decrypt settled after {frames} frames");

    let mut glitch = GlitchText::new("SYNTHETIX.RELAY: NODE D-77", GlitchMode::Similar, &mut rng);
    for _ in 0..40 {
        let frame = glitch.tick(&mut rng);
        if glitch.is_glitching() {
            println!("  glitch:  {frame}");
        }
    }
}
