//! Service layer for SaveIt
//!
//! The service layer holds the session state on top of the models: the
//! account list with its active account and date, and the model facade that
//! adds settings and the list filter.

pub mod account_list;
pub mod model;

pub use account_list::AccountList;
pub use model::{InfoFilter, Model};
