//! tagmatch demo run
//!
//! Scripted end-to-end session over a three-socket board:
//! - an item lands in the wrong socket first
//! - the finish button is pressed too early (incomplete)
//! - the board is fixed and completed
//! - the finish press succeeds and the report is persisted
//!
//! Run with: cargo run -p tagmatch_sim

use tagmatch_core::{Item, Tag};
use tagmatch_event::EventChannel;
use tagmatch_registry::{SocketDef, SocketRegistry};
use tagmatch_session::{ReportFormat, ReportWriter, Session, TutorialPager};

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    if let Err(e) = run() {
        log::error!("demo run failed: {e}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    // Tutorial panels shown before the run starts.
    let mut tutorial = TutorialPager::new(3);
    while !tutorial.is_last() {
        println!("tutorial panel {}", tutorial.counter_text());
        tutorial.advance();
    }
    println!("tutorial panel {}", tutorial.counter_text());

    let mut registry = SocketRegistry::new();
    let red = SocketDef::new("anchor_red", Tag::new("Red"));
    let green = SocketDef::new("anchor_green", Tag::new("Green"));
    let blue = SocketDef::new("anchor_blue", Tag::new("Blue"));
    let (red_id, green_id, blue_id) = (red.id, green.id, blue.id);
    registry.register(red)?;
    registry.register(green)?;
    registry.register(blue)?;

    // Completion flips are queued here and drained like a frame update.
    let completion: EventChannel<bool> = EventChannel::new();
    let sender = completion.sender();
    registry.on_completion_change(move |all_correct: &bool| {
        let _ = sender.send(*all_correct);
    });

    let mut session = Session::new(registry)
        .with_writer(ReportWriter::new("logs").with_format(ReportFormat::Text));

    // Wrong cube first.
    let correct = session.place(red_id, Item::new("blue_cube", Tag::new("Blue")))?;
    println!(
        "placed blue_cube into anchor_red: {} (visual: {:?})",
        if correct { "correct" } else { "incorrect" },
        session.visual(red_id)
    );

    // Premature finish press: the run keeps going.
    let result = session.press_finish()?;
    println!("finish pressed early: {}", result.outcome);

    // Fix the board.
    session.remove(red_id)?;
    session.place(red_id, Item::new("red_cube", Tag::new("Red")))?;
    session.place(green_id, Item::new("green_cube", Tag::new("Green")))?;
    session.place(blue_id, Item::new("blue_cube", Tag::new("Blue")))?;

    for all_correct in completion.drain() {
        println!("completion update: all correct = {all_correct}");
    }

    let result = session.press_finish()?;
    println!("finish pressed: {}", result.outcome);
    if let Some(path) = result.log_path {
        println!("report written to {}", path.display());
    }

    print!("{}", session.registry().snapshot().to_text());
    Ok(())
}
