pub mod dashboard;
pub mod input_modal;
pub mod layout;
