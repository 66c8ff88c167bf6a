// handlers/mod.rs - Two-tier handler layout
//
// Public (no auth) → Protected (bearer token gate)
pub mod public;    // Tier 1: No authentication required (/, /health)
pub mod protected; // Tier 2: Bearer token required (/api/v1/blog/*)
