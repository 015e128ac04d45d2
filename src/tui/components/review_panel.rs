//! Tabbed panel multiplexing the review list and the review form.
//!
//! The form is created once with the panel and stays alive while the
//! reviews tab is shown, so a half-written review survives tab switches.
//!
//! The panel renders within a visible height set by its parent. The reviews
//! tab shows whole review cards starting at a scroll offset and reports the
//! visible range when some reviews are hidden.

use crate::catalog::Review;
use crate::tui::state::TabSelection;

use super::review_card::ReviewCardTemplate;
use super::review_form::ReviewFormComponent;

/// Default visible height for the review panel, tab bar included.
const DEFAULT_VISIBLE_HEIGHT: usize = 20;

/// Rows taken by the tab bar and the blank line under it.
const TAB_BAR_HEIGHT: usize = 2;

/// Component owning the tab selection and the review form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReviewPanelComponent {
    selected_tab: TabSelection,
    form: ReviewFormComponent,
    card_template: ReviewCardTemplate,
    /// Visible height in rows, tab bar included.
    visible_height: usize,
    /// Index of the first review shown on the reviews tab.
    scroll_offset: usize,
}

impl Default for ReviewPanelComponent {
    fn default() -> Self {
        Self::new(ReviewCardTemplate::default())
    }
}

impl ReviewPanelComponent {
    /// Creates a panel showing the reviews tab and rendering reviews with
    /// `card_template`.
    #[must_use]
    pub const fn new(card_template: ReviewCardTemplate) -> Self {
        Self {
            selected_tab: TabSelection::Reviews,
            form: ReviewFormComponent::new(),
            card_template,
            visible_height: DEFAULT_VISIBLE_HEIGHT,
            scroll_offset: 0,
        }
    }

    /// Updates the visible height, tab bar included.
    pub const fn set_visible_height(&mut self, height: usize) {
        self.visible_height = height;
    }

    /// Returns the visible height.
    #[must_use]
    pub const fn visible_height(&self) -> usize {
        self.visible_height
    }

    /// Returns the index of the first review shown.
    #[must_use]
    pub const fn scroll_offset(&self) -> usize {
        self.scroll_offset
    }

    /// Scrolls the review list down by one review.
    ///
    /// The last of `review_count` reviews always stays on screen.
    pub const fn scroll_down(&mut self, review_count: usize) {
        if self.scroll_offset.saturating_add(1) < review_count {
            self.scroll_offset = self.scroll_offset.saturating_add(1);
        }
    }

    /// Scrolls the review list up by one review.
    pub const fn scroll_up(&mut self) {
        self.scroll_offset = self.scroll_offset.saturating_sub(1);
    }

    const fn content_height(&self) -> usize {
        self.visible_height.saturating_sub(TAB_BAR_HEIGHT)
    }

    /// Returns the visible tab.
    #[must_use]
    pub const fn selected_tab(&self) -> TabSelection {
        self.selected_tab
    }

    /// Shows `tab`.
    pub const fn select_tab(&mut self, tab: TabSelection) {
        self.selected_tab = tab;
    }

    /// Switches to the other tab.
    pub const fn cycle_tab(&mut self) {
        self.selected_tab = self.selected_tab.toggled();
    }

    /// Returns the review form.
    #[must_use]
    pub const fn form(&self) -> &ReviewFormComponent {
        &self.form
    }

    /// Returns mutable access to the review form.
    pub const fn form_mut(&mut self) -> &mut ReviewFormComponent {
        &mut self.form
    }

    /// Renders the tab bar followed by the visible tab.
    #[must_use]
    pub fn view(&self, reviews: &[Review]) -> String {
        let mut output = self.render_tab_bar();
        output.push('\n');

        match self.selected_tab {
            TabSelection::Reviews => output.push_str(&self.render_reviews(reviews)),
            TabSelection::MakeAReview => output.push_str(&self.form.view(self.content_height())),
        }

        output
    }

    fn render_tab_bar(&self) -> String {
        let labels: Vec<String> = TabSelection::ALL
            .into_iter()
            .map(|tab| {
                if tab == self.selected_tab {
                    format!("[{}]", tab.label())
                } else {
                    format!(" {} ", tab.label())
                }
            })
            .collect();
        format!("{}\n", labels.join(" "))
    }

    fn render_reviews(&self, reviews: &[Review]) -> String {
        if reviews.is_empty() {
            return "There are no reviews yet\n".to_owned();
        }

        let height = self.content_height();
        let (cards, shown) = self.render_cards(reviews, height);
        let hidden = reviews.len().saturating_sub(shown);
        if hidden == 0 {
            return cards;
        }

        // Make room for the range footer.
        let (mut cards, shown) = self.render_cards(reviews, height.saturating_sub(1));
        let first = self.scroll_offset.saturating_add(1);
        let last = self.scroll_offset.saturating_add(shown);
        cards.push_str(&format!(
            "Reviews {first}-{last} of {}  [j/k] scroll\n",
            reviews.len()
        ));
        cards
    }

    /// Renders whole cards from the scroll offset until `height` rows are
    /// used. The first card is always rendered.
    fn render_cards(&self, reviews: &[Review], height: usize) -> (String, usize) {
        let mut output = String::new();
        let mut used = 0_usize;
        let mut shown = 0_usize;

        for review in reviews.iter().skip(self.scroll_offset) {
            let card = self.render_card(review);
            let rows = card.lines().count();
            if shown > 0 && used.saturating_add(rows) > height {
                break;
            }
            output.push_str(&card);
            used = used.saturating_add(rows);
            shown = shown.saturating_add(1);
        }

        (output, shown)
    }

    fn render_card(&self, review: &Review) -> String {
        let card = self
            .card_template
            .render(review)
            .unwrap_or_else(|error| error.to_string());
        let mut output = String::new();
        for (index, line) in card.lines().enumerate() {
            let bullet = if index == 0 { "- " } else { "  " };
            output.push_str(bullet);
            output.push_str(line);
            output.push('\n');
        }
        output
    }
}
