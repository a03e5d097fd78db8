mod catalogue;
pub mod error;
mod loader;
pub mod model;
pub mod preset;
pub mod publish;

pub use error::ModelError;
pub use model::{TransferFunctionModel, DEFAULT_SAMPLE_COUNT};
pub use preset::Preset;
pub use publish::{PaletteSink, PaletteUpdate, UpdateBus, UpdateReceiver, UpdateSender};
