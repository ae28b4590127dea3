//! Terminal front end: marquee, spinner and the chat prompt.

pub mod banner;
pub mod progress;
pub mod tui;

/// Draw the marquee and install the prompt theme. Run once before the chat loop starts.
pub fn init_ui() {
    banner::print_marquee();
    tui::apply_theme();
}
