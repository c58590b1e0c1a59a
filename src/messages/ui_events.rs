//! UI events - messages from UI layer to App layer

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Which screen is showing (needed for context-aware key mapping)
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum ScreenKind {
    #[default]
    WalletList,
    WalletDetail,
    AddressDetail,
}

/// Input mode
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum InputMode {
    #[default]
    Normal,
    Editing,
}

/// Focusable field of the transfer form
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum TransferField {
    #[default]
    Destination,
    Amount,
    Asset,
}

impl TransferField {
    pub fn next(&self) -> TransferField {
        match self {
            TransferField::Destination => TransferField::Amount,
            TransferField::Amount => TransferField::Asset,
            TransferField::Asset => TransferField::Destination,
        }
    }
}

/// Events generated from user input in the UI layer
#[derive(Debug, Clone)]
pub enum UiEvent {
    // Row / highlight movement
    NextRow,
    PrevRow,

    // Pagination
    NextPage,
    PrevPage,
    CyclePageSize,

    // Network picker (wallet list)
    OpenNetworkSelect,
    CancelNetworkSelect,

    // Actions
    Activate, // Enter: open row, confirm picker, submit address input
    CreateWallet,
    RequestFaucet,
    SubmitTransfer,
    Reload,

    // Text editing
    StartEditing,
    StopEditing,
    CharInput(char),
    Backspace,
    NextField,

    // Navigation
    Back,

    // Popups
    ToggleHelp,
    CloseHelp,

    // System
    Quit,
}

/// Context the key mapper needs from the current render state
#[derive(Clone, Copy, Debug, Default)]
pub struct KeyContext {
    pub screen: ScreenKind,
    pub input_mode: InputMode,
    pub show_help: bool,
    pub select_open: bool,
}

/// Convert a key event to a UiEvent based on current UI context
pub fn key_to_ui_event(key: KeyEvent, ctx: KeyContext) -> Option<UiEvent> {
    use crossterm::event::KeyEventKind;

    if key.kind != KeyEventKind::Press {
        return None;
    }

    if key.modifiers.contains(KeyModifiers::CONTROL) {
        if let KeyCode::Char('c') = key.code {
            return Some(UiEvent::Quit);
        }
    }

    if ctx.show_help {
        return Some(UiEvent::CloseHelp);
    }

    // Network picker popup captures navigation keys
    if ctx.select_open {
        return match key.code {
            KeyCode::Esc => Some(UiEvent::CancelNetworkSelect),
            KeyCode::Enter => Some(UiEvent::Activate),
            KeyCode::Up => Some(UiEvent::PrevRow),
            KeyCode::Down => Some(UiEvent::NextRow),
            _ => None,
        };
    }

    if ctx.input_mode == InputMode::Editing {
        return match key.code {
            KeyCode::Esc => Some(UiEvent::StopEditing),
            KeyCode::Enter => match ctx.screen {
                // Enter submits the address-id input
                ScreenKind::WalletDetail => Some(UiEvent::Activate),
                _ => Some(UiEvent::StopEditing),
            },
            KeyCode::Tab => Some(UiEvent::NextField),
            KeyCode::Backspace => Some(UiEvent::Backspace),
            KeyCode::Char(c) => Some(UiEvent::CharInput(c)),
            _ => None,
        };
    }

    // Normal mode, shared across screens
    match key.code {
        KeyCode::Char('q') => return Some(UiEvent::Quit),
        KeyCode::Char('?') => return Some(UiEvent::ToggleHelp),
        KeyCode::Esc => return Some(UiEvent::Back),
        KeyCode::Char('r') => return Some(UiEvent::Reload),
        _ => {}
    }

    match ctx.screen {
        ScreenKind::WalletList => match key.code {
            KeyCode::Up => Some(UiEvent::PrevRow),
            KeyCode::Down => Some(UiEvent::NextRow),
            KeyCode::Left => Some(UiEvent::PrevPage),
            KeyCode::Right => Some(UiEvent::NextPage),
            KeyCode::Char('i') => Some(UiEvent::CyclePageSize),
            KeyCode::Char('n') => Some(UiEvent::OpenNetworkSelect),
            KeyCode::Char('c') => Some(UiEvent::CreateWallet),
            KeyCode::Enter => Some(UiEvent::Activate),
            _ => None,
        },
        ScreenKind::WalletDetail => match key.code {
            KeyCode::Char('e') => Some(UiEvent::StartEditing),
            KeyCode::Enter => Some(UiEvent::Activate),
            _ => None,
        },
        ScreenKind::AddressDetail => match key.code {
            KeyCode::Left => Some(UiEvent::PrevPage),
            KeyCode::Right => Some(UiEvent::NextPage),
            KeyCode::Char('i') => Some(UiEvent::CyclePageSize),
            KeyCode::Char('f') => Some(UiEvent::RequestFaucet),
            KeyCode::Char('s') => Some(UiEvent::SubmitTransfer),
            KeyCode::Char('e') | KeyCode::Enter => Some(UiEvent::StartEditing),
            KeyCode::Tab => Some(UiEvent::NextField),
            _ => None,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyEvent, KeyEventKind, KeyEventState};

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent {
            code,
            modifiers: KeyModifiers::NONE,
            kind: KeyEventKind::Press,
            state: KeyEventState::NONE,
        }
    }

    #[test]
    fn popup_captures_navigation() {
        let ctx = KeyContext {
            screen: ScreenKind::WalletList,
            select_open: true,
            ..Default::default()
        };
        assert!(matches!(
            key_to_ui_event(press(KeyCode::Down), ctx),
            Some(UiEvent::NextRow)
        ));
        assert!(matches!(
            key_to_ui_event(press(KeyCode::Esc), ctx),
            Some(UiEvent::CancelNetworkSelect)
        ));
    }

    #[test]
    fn editing_swallows_action_keys() {
        let ctx = KeyContext {
            screen: ScreenKind::AddressDetail,
            input_mode: InputMode::Editing,
            ..Default::default()
        };
        assert!(matches!(
            key_to_ui_event(press(KeyCode::Char('f')), ctx),
            Some(UiEvent::CharInput('f'))
        ));
        assert!(matches!(
            key_to_ui_event(press(KeyCode::Esc), ctx),
            Some(UiEvent::StopEditing)
        ));
    }

    #[test]
    fn faucet_key_on_address_screen() {
        let ctx = KeyContext {
            screen: ScreenKind::AddressDetail,
            ..Default::default()
        };
        assert!(matches!(
            key_to_ui_event(press(KeyCode::Char('f')), ctx),
            Some(UiEvent::RequestFaucet)
        ));
    }
}
