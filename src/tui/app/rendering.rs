//! Rendering logic for the storefront TUI application.
//!
//! This module contains the view rendering methods that produce string output
//! for display in the terminal. These are pure query methods that read state
//! without modification.

use super::StorefrontApp;

impl StorefrontApp {
    /// Renders the header bar with the cart count.
    pub(super) fn render_header(&self) -> String {
        format!("Storefront    Cart({})\n", self.cart.len())
    }

    /// Renders the status bar with the last action or help hints.
    pub(super) fn render_status_bar(&self) -> String {
        if let Some(status) = &self.status {
            return format!("{status}\n");
        }

        let hints = if self.is_editing_review() {
            "Tab/Up/Down:field  Enter:submit  Esc:reviews  Ctrl+C:quit"
        } else {
            "h/l:colour  j/k:scroll  a/x:cart  p:premium  Tab:form  ?:help  q:quit"
        };
        format!("{hints}\n")
    }

    /// Renders the help overlay if visible.
    pub(super) fn render_help_overlay(&self) -> String {
        if !self.show_help {
            return String::new();
        }

        let help_text = r"=== Keyboard Shortcuts ===
Product:
  h, Left    Hover previous colour
  l, Right   Hover next colour
  1-9        Hover colour by position
  a          Add to cart
  x          Remove from cart
  p          Toggle premium membership
Reviews:
  j, Down    Scroll reviews down
  k, Up      Scroll reviews up
  Tab        Switch between Reviews and Make a Review
Make a Review:
  Tab, Down  Next field
  BackTab,Up Previous field
  1-5        Choose rating (rating field)
  y, n       Answer recommendation (recommend field)
  Backspace  Delete
  Enter      Submit review
  Esc        Back to Reviews
Other:
  ?          Toggle this help
  q          Quit
Press any key to close this help.
";
        help_text.to_owned()
    }
}
