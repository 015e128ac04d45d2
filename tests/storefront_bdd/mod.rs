//! Support modules for storefront BDD tests.

pub(crate) mod state;

pub(crate) use state::StorefrontTestState;
