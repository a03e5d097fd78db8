//! Snapshot hand-off from the editing side to a renderer.

use crossbeam_channel::{bounded, Receiver, Sender, TrySendError};
use serde::{Deserialize, Serialize};
use transferfn_core::{ColorPoint, OpacityPoint, SampledPalette};

/// Everything a renderer needs from one committed transfer function.
///
/// An update owns all of its buffers; nothing in it aliases the model it
/// was committed from, so the editing side can keep mutating while the
/// renderer holds the update.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PaletteUpdate {
    /// Raw color control points.
    pub colors: Vec<ColorPoint>,
    /// Raw opacity control points with the global scale already applied.
    /// Scales above 1 leave values above 1 here.
    pub opacities: Vec<OpacityPoint>,
    /// Dense resample of both curves.
    pub palette: SampledPalette,
    /// Sample count the palette was resampled at.
    pub sample_count: usize,
}

/// Consumer side of committed palettes.
pub trait PaletteSink {
    fn submit(&self, update: PaletteUpdate);
}

/// Bounded hand-off channel between a model and a renderer.
///
/// Senders never block: when the renderer falls behind, older updates are
/// dropped and the newest committed palette wins.
pub struct UpdateBus {
    sender: Sender<PaletteUpdate>,
    receiver: Receiver<PaletteUpdate>,
}

impl UpdateBus {
    /// Create a bus holding at most `capacity` undelivered updates.
    /// Capacities below 1 are raised to 1.
    pub fn new(capacity: usize) -> Self {
        let (sender, receiver) = bounded(capacity.max(1));
        Self { sender, receiver }
    }

    /// A sender handle; clone it for multiple producers.
    pub fn sender(&self) -> UpdateSender {
        UpdateSender {
            sender: self.sender.clone(),
            receiver: self.receiver.clone(),
        }
    }

    /// A receiver handle; clone it for multiple consumers.
    pub fn receiver(&self) -> UpdateReceiver {
        UpdateReceiver {
            receiver: self.receiver.clone(),
        }
    }

    /// Convenience for a fresh sender/receiver pair.
    pub fn create_pair(capacity: usize) -> (UpdateSender, UpdateReceiver) {
        let bus = Self::new(capacity);
        (bus.sender(), bus.receiver())
    }
}

/// Handle for publishing updates.
///
/// Carries its own receiver so a full bus can shed queued updates instead
/// of losing the one being sent.
#[derive(Clone)]
pub struct UpdateSender {
    sender: Sender<PaletteUpdate>,
    receiver: Receiver<PaletteUpdate>,
}

impl UpdateSender {
    /// Publish an update without blocking.
    ///
    /// A full bus sheds its oldest queued update to make room, so the
    /// renderer always ends up with the newest committed palette. Returns
    /// whether the update was queued.
    pub fn send(&self, mut update: PaletteUpdate) -> bool {
        loop {
            match self.sender.try_send(update) {
                Ok(()) => return true,
                Err(TrySendError::Full(bounced)) => {
                    log::debug!("palette bus full, shedding the oldest update");
                    let _ = self.receiver.try_recv();
                    update = bounced;
                }
                Err(TrySendError::Disconnected(_)) => return false,
            }
        }
    }
}

impl PaletteSink for UpdateSender {
    fn submit(&self, update: PaletteUpdate) {
        self.send(update);
    }
}

/// Handle for consuming updates.
#[derive(Clone)]
pub struct UpdateReceiver {
    receiver: Receiver<PaletteUpdate>,
}

impl UpdateReceiver {
    /// Take one pending update, oldest first, without blocking.
    pub fn try_recv(&self) -> Option<PaletteUpdate> {
        self.receiver.try_recv().ok()
    }

    /// Drain to the most recent pending update, discarding the rest.
    pub fn latest(&self) -> Option<PaletteUpdate> {
        let mut latest = None;
        while let Ok(update) = self.receiver.try_recv() {
            latest = Some(update);
        }
        latest
    }

    pub fn pending_count(&self) -> usize {
        self.receiver.len()
    }

    pub fn has_updates(&self) -> bool {
        !self.receiver.is_empty()
    }
}
