pub mod config;
pub mod document;
pub mod easing;
pub mod error;
pub mod events;
pub mod frame;
pub mod instance;
pub mod listeners;
pub mod position;
pub mod registry;

pub use config::{ScrollOptions, ScrollSettings};
pub use document::{Document, MemoryDocument, NodeId, TargetRef};
pub use error::{Error, Result};
pub use frame::FrameClock;
pub use instance::{ScrollInstance, ScrollState, StopHandle};
pub use registry::{InstanceId, InstanceRegistry};
