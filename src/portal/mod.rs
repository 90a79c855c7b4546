/// Portal core - request drafts, the satellite catalog model and localization
///
/// Pure logic with no I/O; network and console access live behind the ports.
pub mod domain;
pub mod i18n;
pub mod services;
