//! Generation request lifecycle
//!
//! One explicit transition function drives the whole flow:
//! `Idle -> Submitting -> {Succeeded, Failed, TimedOut}` and back to `Idle`
//! on the next submit or when the image changes. The UI layer only forwards
//! [`Event`]s and renders the resulting [`Generation`] snapshot.
//!
//! Each submission is stamped with a monotonically increasing token;
//! `Resolved` and `DeadlineElapsed` carry the token of the attempt they
//! belong to and are dropped unless the machine is still waiting on that
//! exact attempt. A response that loses the race against the deadline can
//! therefore never flip the state afterwards.

use crate::error::{GenerateError, UploadError};
use crate::locations::LocationList;
use crate::types::GeneratedImage;

/// Client-side deadline for one generation call.
pub const GENERATION_TIMEOUT_MS: u32 = 300_000;

/// Selectable samples-per-location values.
pub const SAMPLE_CHOICES: [u8; 4] = [1, 2, 3, 4];

pub const DEFAULT_SAMPLES_PER_LOCATION: u8 = 2;

/// Result of one backend call.
pub type Outcome = Result<Vec<GeneratedImage>, GenerateError>;

/// Where the current attempt stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Phase {
    #[default]
    Idle,
    Submitting,
    Succeeded,
    Failed,
    TimedOut,
}

/// Everything that can move the machine.
#[derive(Debug, Clone)]
pub enum Event {
    /// A new selfie was accepted, replacing any previous one.
    ImageAccepted,
    /// The active selfie was cleared.
    ImageCleared,
    /// An upload candidate was rejected client-side.
    ImageRejected(UploadError),
    /// A submission started; `expected` is the result count promised by the
    /// current form state.
    Submitted { expected: usize },
    /// The backend call finished before the deadline.
    Resolved { token: u64, outcome: Outcome },
    /// The deadline elapsed before the call finished.
    DeadlineElapsed { token: u64 },
    /// The user dismissed the visible message.
    MessageDismissed,
}

/// Snapshot of the request lifecycle. Owned by the generation surface and
/// mutated exclusively through [`Generation::apply`].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Generation {
    phase: Phase,
    token: u64,
    expected: usize,
    results: Vec<GeneratedImage>,
    message: Option<String>,
}

impl Generation {
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Token of the latest submission. Resolution events must echo it back.
    pub fn token(&self) -> u64 {
        self.token
    }

    /// Result count promised when the current attempt was submitted; drives
    /// the placeholder grid while `Submitting`.
    pub fn expected_count(&self) -> usize {
        self.expected
    }

    /// Results of the last successful attempt, in server response order.
    pub fn results(&self) -> &[GeneratedImage] {
        &self.results
    }

    /// The single user-visible message, if any.
    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    pub fn is_submitting(&self) -> bool {
        self.phase == Phase::Submitting
    }

    /// Submission entry guard: an image is present, at least one location is
    /// valid, and no request is already in flight.
    pub fn can_submit(&self, has_image: bool, locations: &LocationList) -> bool {
        has_image && locations.has_valid() && self.phase != Phase::Submitting
    }

    pub fn apply(&mut self, event: Event) {
        match event {
            Event::ImageAccepted | Event::ImageCleared => {
                self.phase = Phase::Idle;
                self.results.clear();
                self.message = None;
            }
            Event::ImageRejected(err) => {
                // prior image and results stay untouched
                self.message = Some(err.to_string());
            }
            Event::Submitted { expected } => {
                if self.phase == Phase::Submitting {
                    return;
                }
                self.token += 1;
                self.phase = Phase::Submitting;
                self.expected = expected;
                self.results.clear();
                self.message = None;
            }
            Event::Resolved { token, outcome } => {
                if !self.accepts(token) {
                    return;
                }
                match outcome {
                    Ok(images) if images.is_empty() => self.fail(GenerateError::NoImages),
                    Ok(images) => {
                        self.phase = Phase::Succeeded;
                        self.results = images;
                        self.message = None;
                    }
                    Err(err) => self.fail(err),
                }
            }
            Event::DeadlineElapsed { token } => {
                if !self.accepts(token) {
                    return;
                }
                self.phase = Phase::TimedOut;
                self.message = Some(GenerateError::Timeout.to_string());
            }
            Event::MessageDismissed => {
                self.message = None;
            }
        }
    }

    /// A resolution is only honored while still waiting on that attempt.
    fn accepts(&self, token: u64) -> bool {
        self.phase == Phase::Submitting && token == self.token
    }

    fn fail(&mut self, err: GenerateError) {
        self.phase = Phase::Failed;
        self.message = Some(err.to_string());
    }
}

/// Result count promised by the current form state.
pub fn expected_image_count(locations: &LocationList, samples_per_location: u8) -> usize {
    locations.filled_count() * usize::from(samples_per_location)
}
