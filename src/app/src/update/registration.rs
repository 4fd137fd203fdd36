use crux_core::{render::render, Command};
use log::{debug, error, warn};

use crate::availability::is_full;
use crate::events::{Event, RegistrationEvent};
use crate::model::Model;
use crate::registration_store;
use crate::types::{EventRecord, FlashMessage, RegistrationSet};
use crate::{Effect, StorageCmd, StorageOutput};

pub const REGISTERED_MESSAGE: &str = "You are registered! A confirmation has been saved locally.";
pub const CANCELLED_MESSAGE: &str = "Registration cancelled successfully.";
pub const FULL_MESSAGE: &str = "Sorry, this event is already full.";
pub const SAVE_FAILED_MESSAGE: &str = "Unable to save your registration. Please try again.";

/// Result of a register/cancel click
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToggleOutcome {
    Registered,
    Cancelled,
    /// Not registered and no seat left; nothing changed
    Full,
}

impl ToggleOutcome {
    /// Feedback shown with the next render.
    ///
    /// Cancellation confirmations use the error tone.
    pub fn flash(&self) -> FlashMessage {
        match self {
            Self::Registered => FlashMessage::success(REGISTERED_MESSAGE),
            Self::Cancelled => FlashMessage::error(CANCELLED_MESSAGE),
            Self::Full => FlashMessage::error(FULL_MESSAGE),
        }
    }
}

/// Flip `event`'s membership in `registrations`, honouring capacity
pub fn toggle(event: &EventRecord, registrations: &mut RegistrationSet) -> ToggleOutcome {
    let Some(id) = event.id else {
        return ToggleOutcome::Full;
    };

    if registrations.remove(id) {
        ToggleOutcome::Cancelled
    } else if is_full(event, registrations) {
        ToggleOutcome::Full
    } else {
        registrations.insert(id);
        ToggleOutcome::Registered
    }
}

/// Handle registration events
pub fn handle(event: RegistrationEvent, model: &mut Model) -> Command<Effect, Event> {
    match event {
        RegistrationEvent::Refresh => {
            model.flash = None;
            read_store(model)
        }

        RegistrationEvent::Loaded(output) => {
            model.registrations = registrations_from(output);
            render()
        }

        RegistrationEvent::Toggle => {
            if model.detail_event().is_none() {
                warn!("registration toggled without a selected event");
                return Command::done();
            }
            model.flash = None;

            StorageCmd::get(&model.config.storage_key)
                .build()
                .then_send(|output| Event::Registration(RegistrationEvent::ToggleLoaded(output)))
        }

        RegistrationEvent::ToggleLoaded(output) => {
            let mut registrations = registrations_from(output);
            let Some(event) = model.detail_event() else {
                return Command::done();
            };

            let outcome = toggle(event, &mut registrations);
            debug!("toggle {:?}: {outcome:?}", event.id);

            model.flash = Some(outcome.flash());
            model.registrations = registrations;

            if outcome == ToggleOutcome::Full {
                return render();
            }

            StorageCmd::set(
                &model.config.storage_key,
                registration_store::save(&model.registrations),
            )
            .build()
            .then_send(|output| Event::Registration(RegistrationEvent::Saved(output)))
        }

        RegistrationEvent::Saved(StorageOutput::Error { message }) => {
            error!("failed to save registrations: {message}");
            model.flash = Some(FlashMessage::error(SAVE_FAILED_MESSAGE));
            read_store(model)
        }

        RegistrationEvent::Saved(_) => render(),
    }
}

/// Read the registration set, then render
pub fn read_store(model: &Model) -> Command<Effect, Event> {
    StorageCmd::get(&model.config.storage_key)
        .build()
        .then_send(|output| Event::Registration(RegistrationEvent::Loaded(output)))
}

fn registrations_from(output: StorageOutput) -> RegistrationSet {
    match output {
        StorageOutput::Value(raw) => registration_store::load(raw.as_deref()),
        StorageOutput::Error { message } => {
            warn!("failed to read registrations: {message}");
            RegistrationSet::new()
        }
        StorageOutput::Saved => {
            warn!("unexpected storage output for a read");
            RegistrationSet::new()
        }
    }
}
