// Two security tiers: public (no auth) and protected (bearer JWT via the
// auth middleware). Routing in main.rs maps each tier to its URL prefix.
pub mod protected;
pub mod public;
