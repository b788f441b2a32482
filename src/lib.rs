// Module layout (Clean Architecture style)
// - bootstrap: configuration and startup wiring
// - application: ports and the search orchestration service
// - domain: core models

pub mod application;
pub mod bootstrap;
pub mod domain;
