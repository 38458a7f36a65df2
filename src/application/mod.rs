// src/application/mod.rs
//
// Application Layer
//
// ARCHITECTURE:
// - Sits above services; owns the detail screen's state and lifecycle
// - The screen actor is the only writer of ViewState
// - Workers report back through the actor's mailbox, never directly
// - Translates internal errors into user-facing responses

pub mod detail_screen;
pub mod error_handling;
pub mod presenter;
pub mod state;
pub mod view_state;


pub use detail_screen::{DetailScreen, DetailScreenHandle};
pub use error_handling::{ErrorResponse, ErrorType};
pub use presenter::Presenter;
pub use state::AppState;
pub use view_state::{
    FetchOutcome, ScrollOffset, SectionContent, ViewPhase, ViewSnapshot, ViewState,
};
