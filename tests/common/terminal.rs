//! TUI testing utilities using Ratatui's TestBackend
//!
//! Render the wizard into a test buffer and inspect it as text.

use ratatui::{backend::TestBackend, buffer::Buffer, Terminal};

use studyflow::ui::{view, AppState};
use studyflow::Config;

/// Create a test terminal with standard dimensions (80x24)
pub fn create_test_terminal() -> Terminal<TestBackend> {
    create_test_terminal_sized(80, 24)
}

/// Create a test terminal with custom dimensions
pub fn create_test_terminal_sized(width: u16, height: u16) -> Terminal<TestBackend> {
    let backend = TestBackend::new(width, height);
    Terminal::new(backend).expect("Failed to create test terminal")
}

/// Convert a buffer to a string, one line per row
pub fn buffer_to_string(buffer: &Buffer) -> String {
    let area = buffer.area;
    let mut output = String::new();

    for y in area.y..area.y + area.height {
        for x in area.x..area.x + area.width {
            if let Some(cell) = buffer.cell((x, y)) {
                output.push_str(cell.symbol());
            }
        }
        output.push('\n');
    }

    output
}

/// Render the full screen for `state` and return it as text
pub fn render_screen(state: &AppState, config: &Config) -> String {
    let mut terminal = create_test_terminal();
    terminal
        .draw(|f| view::draw(f, state, config))
        .expect("Failed to draw");
    buffer_to_string(terminal.backend().buffer())
}

/// Assert that the rendered screen contains expected text
pub fn assert_screen_contains(screen: &str, expected: &str) {
    assert!(
        screen.contains(expected),
        "Screen does not contain expected text.\nExpected: {}\nActual:\n{}",
        expected,
        screen
    );
}

/// Assert that the rendered screen does not contain text
pub fn assert_screen_lacks(screen: &str, unexpected: &str) {
    assert!(
        !screen.contains(unexpected),
        "Screen unexpectedly contains text.\nUnexpected: {}\nActual:\n{}",
        unexpected,
        screen
    );
}
