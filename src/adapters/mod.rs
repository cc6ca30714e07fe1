// Adapters layer: concrete implementations for external systems
// (random.org, SMTP, roster CSV, template files).

pub mod random_org;
pub mod roster;
pub mod smtp;
pub mod template;
