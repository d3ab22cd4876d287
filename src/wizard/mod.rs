//! Quote wizard: step state machine and the agent session that drives it

mod session;
mod state;

pub use session::Session;
pub use state::{WizardEvent, WizardStep};
