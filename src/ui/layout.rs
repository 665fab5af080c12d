use ratatui::layout::{Constraint, Direction, Layout, Position, Rect};

/// Height of one stopwatch row: top border, content line, bottom border.
pub const ROW_HEIGHT: u16 = 3;

pub const BUTTON_WIDTH: u16 = 9;
const BUTTON_GAP: u16 = 2;

pub struct AppLayout {
    pub header: Rect,
    pub list: Rect,
    pub footer: Rect,
}

pub fn compute_layout(area: Rect, show_footer: bool) -> AppLayout {
    let footer_height = if show_footer { 1 } else { 0 };
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),             // Header
            Constraint::Min(0),                // Stopwatches
            Constraint::Length(footer_height), // Footer
        ])
        .split(area);

    AppLayout {
        header: chunks[0],
        list: chunks[1],
        footer: chunks[2],
    }
}

/// How many whole stopwatch rows fit in `list`.
pub fn visible_rows(list: Rect) -> usize {
    (list.height / ROW_HEIGHT) as usize
}

/// First row to show so that `selected` stays on screen, moving the view as
/// little as possible from `current`.
pub fn scroll_offset(current: usize, selected: Option<usize>, count: usize, visible: usize) -> usize {
    if visible == 0 || count <= visible {
        return 0;
    }
    let max_offset = count - visible;
    let offset = match selected {
        Some(sel) if sel < current => sel,
        Some(sel) if sel >= current + visible => sel + 1 - visible,
        _ => current,
    };
    offset.min(max_offset)
}

/// Screen rects of the rows currently on screen, paired with their index in
/// the collection.
pub fn stopwatch_rows(list: Rect, count: usize, offset: usize) -> Vec<(usize, Rect)> {
    let visible = visible_rows(list);
    (offset..count)
        .take(visible)
        .enumerate()
        .map(|(slot, index)| {
            let y = list.y + slot as u16 * ROW_HEIGHT;
            (index, Rect::new(list.x, y, list.width, ROW_HEIGHT))
        })
        .collect()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Button {
    StartStop,
    Reset,
}

pub struct RowAreas {
    pub start_stop: Rect,
    pub reset: Rect,
    pub time: Rect,
}

/// Split the content line of a bordered row into its buttons and the
/// time readout. Buttons shrink to nothing on very narrow terminals.
pub fn row_areas(row: Rect) -> RowAreas {
    let inner = Rect::new(
        row.x.saturating_add(1),
        row.y.saturating_add(1),
        row.width.saturating_sub(2),
        row.height.saturating_sub(2).min(1),
    );
    let clip = |x: u16, w: u16| {
        let x = x.min(inner.right());
        Rect::new(x, inner.y, w.min(inner.right() - x), inner.height)
    };
    let start_stop = clip(inner.x + 1, BUTTON_WIDTH);
    let reset = clip(start_stop.x + BUTTON_WIDTH + BUTTON_GAP, BUTTON_WIDTH);
    let time_x = reset.x + BUTTON_WIDTH + BUTTON_GAP;
    let time = clip(time_x, inner.right().saturating_sub(time_x + 1));

    RowAreas {
        start_stop,
        reset,
        time,
    }
}

/// Which row (and button, if any) is under the cell at `(column, row)`.
pub fn hit_test(
    list: Rect,
    count: usize,
    offset: usize,
    column: u16,
    row: u16,
) -> Option<(usize, Option<Button>)> {
    let pos = Position::new(column, row);
    let (index, rect) = stopwatch_rows(list, count, offset)
        .into_iter()
        .find(|(_, rect)| rect.contains(pos))?;
    let areas = row_areas(rect);
    let button = if areas.start_stop.contains(pos) {
        Some(Button::StartStop)
    } else if areas.reset.contains(pos) {
        Some(Button::Reset)
    } else {
        None
    };
    Some((index, button))
}
