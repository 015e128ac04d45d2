//! Input handling for the TUI application.
//!
//! This module provides key-to-message mapping for translating terminal key
//! events into application messages. Mapping depends on whether the review
//! form is visible, because the form captures printable characters.

use crossterm::event::{KeyCode, KeyModifiers};

use super::messages::AppMsg;
use super::state::TabSelection;

/// Which part of the interface receives key presses.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputContext {
    /// Browsing the product and the review list.
    Browsing,
    /// Editing the review form.
    ReviewForm,
}

/// Maps a key event to an application message for the given context.
///
/// Returns `None` for unrecognised key events, allowing them to be ignored.
#[must_use]
pub fn map_key_to_message_with_context(
    key: &bubbletea_rs::event::KeyMsg,
    context: InputContext,
) -> Option<AppMsg> {
    if key.key == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
        return Some(AppMsg::Quit);
    }

    match context {
        InputContext::Browsing => map_browsing_key(key.key),
        InputContext::ReviewForm => map_form_key(key.key),
    }
}

fn map_browsing_key(code: KeyCode) -> Option<AppMsg> {
    match code {
        KeyCode::Char(digit @ '1'..='9') => swatch_index(digit).map(AppMsg::HoverVariant),
        KeyCode::Char('j') | KeyCode::Down => Some(AppMsg::ScrollReviewsDown),
        KeyCode::Char('k') | KeyCode::Up => Some(AppMsg::ScrollReviewsUp),
        KeyCode::Char('q') => Some(AppMsg::Quit),
        KeyCode::Char('h') | KeyCode::Left => Some(AppMsg::PreviousVariant),
        KeyCode::Char('l') | KeyCode::Right => Some(AppMsg::NextVariant),
        KeyCode::Char('a') => Some(AppMsg::AddToCart),
        KeyCode::Char('x') => Some(AppMsg::RemoveFromCart),
        KeyCode::Char('p') => Some(AppMsg::TogglePremium),
        KeyCode::Tab => Some(AppMsg::CycleTab),
        KeyCode::Char('?') => Some(AppMsg::ToggleHelp),
        _ => None,
    }
}

/// Maps swatch digit `1` to index 0.
fn swatch_index(digit: char) -> Option<usize> {
    digit
        .to_digit(10)
        .and_then(|value| usize::try_from(value).ok())
        .and_then(|value| value.checked_sub(1))
}

const fn map_form_key(code: KeyCode) -> Option<AppMsg> {
    match code {
        KeyCode::Tab | KeyCode::Down => Some(AppMsg::FocusNextField),
        KeyCode::BackTab | KeyCode::Up => Some(AppMsg::FocusPreviousField),
        KeyCode::Enter => Some(AppMsg::SubmitReview),
        KeyCode::Esc => Some(AppMsg::SelectTab(TabSelection::Reviews)),
        KeyCode::Backspace => Some(AppMsg::Backspace),
        KeyCode::Char(character) => Some(AppMsg::InputChar(character)),
        _ => None,
    }
}
