//! Scenario state for storefront BDD tests.

use rstest_bdd::Slot;
use rstest_bdd_macros::ScenarioState;
use storefront::tui::StorefrontApp;

/// State shared across steps in a storefront scenario.
#[derive(ScenarioState, Default)]
pub(crate) struct StorefrontTestState {
    /// The application root under test.
    pub(crate) app: Slot<StorefrontApp>,
}
