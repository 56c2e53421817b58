//! Mouse handler: motion drives hover, the wheel scrolls.

use crossterm::event::{MouseEvent, MouseEventKind};
use ratatui::layout::Rect;

use crate::tui::page::WHEEL_STEP;
use crate::tui::AppState;

/// Handle a mouse event over the page drawn in `page_area`.
pub fn handle_mouse_event(state: &mut AppState, mouse: MouseEvent, page_area: Rect) {
    let delta = match mouse.kind {
        MouseEventKind::Moved | MouseEventKind::Drag(_) => 0,
        MouseEventKind::ScrollDown => i32::from(WHEEL_STEP),
        MouseEventKind::ScrollUp => -i32::from(WHEEL_STEP),
        _ => return,
    };

    let inside = mouse.column >= page_area.x
        && mouse.column < page_area.right()
        && mouse.row >= page_area.y
        && mouse.row < page_area.bottom();
    if inside && state.help.is_none() {
        state
            .page
            .on_pointer(mouse.column - page_area.x, mouse.row - page_area.y);
    } else {
        state.page.on_pointer_exit();
    }

    if delta != 0 {
        // Scrolling re-tests hover at the pointer cell
        state.page.scroll_by(&state.engine, delta);
    }
}
