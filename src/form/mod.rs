//! Quote form: field definitions, raw input, derived state and CSV loading

mod data;
mod state;
pub mod loader;

pub use data::{FieldKind, FormField, FormInput};
pub use state::QuoteForm;
pub use loader::{load_form_inputs, load_form_inputs_from_reader};
