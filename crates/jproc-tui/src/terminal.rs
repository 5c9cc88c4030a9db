//! Terminal setup and restoration

use crossterm::event::{DisableBracketedPaste, EnableBracketedPaste};
use jproc_core::prelude::*;

/// Install a panic hook that restores the terminal
pub fn install_panic_hook() {
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        let _ = disable_bracketed_paste();
        ratatui::restore();
        original_hook(panic_info);
    }));
}

/// Deliver pastes as a single event instead of a burst of key presses
pub fn enable_bracketed_paste() -> Result<()> {
    crossterm::execute!(std::io::stdout(), EnableBracketedPaste)?;
    Ok(())
}

pub fn disable_bracketed_paste() -> Result<()> {
    crossterm::execute!(std::io::stdout(), DisableBracketedPaste)?;
    Ok(())
}
