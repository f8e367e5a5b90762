//! Reducer trait for slice transitions.

use super::event::Event;
use super::state::StoreState;

/// Reducer transforms slice state based on events.
///
/// The reducer is the only place where slice transitions happen.
/// It must be a pure function: (State, Event) -> State. Side effects
/// (network, durable storage) belong to the composition root that
/// dispatches the events.
pub trait Reducer {
    /// The slice state this reducer operates on.
    type State: StoreState;

    /// The event type this reducer handles.
    type Event: Event;

    /// Process an event and return the new state.
    fn reduce(state: Self::State, event: Self::Event) -> Self::State;
}
