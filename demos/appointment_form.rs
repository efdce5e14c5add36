//! Appointment Form
//!
//! This example drives the view modes of an appointment card the way a UI
//! host would: show, edit, save, and recover from a failed save.
//!
//! Key concepts:
//! - Push transitions build a back-navigable trail
//! - Replace transitions keep transient modes (saving, errors) off the trail
//! - `back` stops at the initial mode
//!
//! Run with: RUST_LOG=modestack=debug cargo run --example appointment_form

use modestack::core::Mode;
use modestack::{mode_enum, ModeStackBuilder, TransitionKind};
use tracing_subscriber::EnvFilter;

mode_enum! {
    enum AppointmentMode {
        Empty,
        Show,
        Create,
        Saving,
        ErrorSave,
    }
    error: [ErrorSave]
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    println!("=== Appointment Form Example ===\n");

    let mut stack = ModeStackBuilder::new()
        .initial(AppointmentMode::Empty)
        .build()?;

    println!("Initial mode: {}", stack.current_name());

    // User clicks "add"
    stack.transition(AppointmentMode::Create, TransitionKind::Push);
    println!("After add: {}", stack.current_name());

    // User submits. The save outcome below replaces "Saving", so only
    // "Create" stays on the trail behind it.
    stack.transition(AppointmentMode::Saving, TransitionKind::Push);
    let save_succeeded = false;
    if save_succeeded {
        stack.transition(AppointmentMode::Show, TransitionKind::Replace);
    } else {
        stack.transition(AppointmentMode::ErrorSave, TransitionKind::Replace);
    }
    println!(
        "After save: {} (error: {})",
        stack.current_name(),
        stack.is_in_error()
    );

    // Closing the error returns to the form, not to "Saving"
    stack.back();
    println!("After closing error: {}", stack.current_name());

    stack.back();
    stack.back();
    println!("After backing out: {}", stack.current_name());

    let history = stack.history();
    let path: Vec<&str> = history.iter().map(|m| m.name()).collect();
    println!("History: {:?}", path);

    println!("\n=== Example Complete ===");
    Ok(())
}
