//! Store primitives for slice-based client state.
//!
//! Client state is partitioned into independent slices (session, profile,
//! mentor directory, match requests). Each slice owns its data and the
//! transition logic over it.
//!
//! # Architecture
//!
//! ```text
//! Event ──→ Reducer ──→ State ──→ View
//!   ↑                              │
//!   └──────────────────────────────┘
//! ```
//!
//! - **State**: snapshot of one slice, replaced on every transition
//! - **Event**: an operation start or settlement, or a local setter
//! - **Reducer**: pure function that maps (state, event) to the next state

mod event;
mod reducer;
mod state;

pub use event::Event;
pub use reducer::Reducer;
pub use state::StoreState;
