/// Application layer - the form controller, DTOs and adapter factories
///
/// This layer drives the portal domain and reaches the outside world
/// only through the outbound ports.
pub mod dto;
pub mod factories;
mod form_controller;

pub use form_controller::FormController;
