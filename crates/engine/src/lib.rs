//! # StyleCast Engine
//!
//! The orchestration core: weather-to-parameter mapping, the per-(user, day)
//! generation latch, the daily outfit cache, the wear-state synchronizer,
//! and the `DailyOutfitService` facade the host application drives.
//!
//! Collaborators are injected as `Arc<dyn Trait>` from `stylecast-core`;
//! nothing in this crate talks to the network or the filesystem directly.

pub mod cache;
pub mod latch;
pub mod mapper;
pub mod orchestrator;
pub mod service;
pub mod wear;

#[cfg(test)]
pub(crate) mod testing;

pub use cache::DailyOutfitCache;
pub use latch::{GenerationKey, GenerationLatch, LatchState, TryBegin};
pub use mapper::derive_parameters;
pub use orchestrator::OutfitOrchestrator;
pub use service::DailyOutfitService;
pub use wear::WearSynchronizer;
