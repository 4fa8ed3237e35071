//! Main menu screen

use super::palette::Palette;
use super::widgets::{
    button, centered_line, fill_background, render_footer, render_header, ScreenAreas,
};
use crate::config::Keybinds;
use crate::core::menu::MenuState;
use crate::core::round::MASKED_ANSWER;
use ratatui::{buffer::Buffer, layout::Rect, text::Line};

pub fn render_menu(
    menu: &MenuState,
    keybinds: &Keybinds,
    area: Rect,
    buf: &mut Buffer,
    palette: &Palette,
) {
    fill_background(area, buf, palette);
    let areas = ScreenAreas::split(area);
    render_header(MASKED_ANSWER, &areas, buf, palette);

    // One button per row with a blank row between
    for (idx, item) in menu.items().iter().enumerate() {
        let y = areas.body.y + (idx as u16) * 2;
        if y >= areas.body.bottom() {
            break;
        }
        let row = Rect {
            y,
            height: 1,
            ..areas.body
        };
        let selected = idx == menu.selected_index();
        centered_line(Line::from(button(item.label(), selected, true, palette)), row, buf);
    }

    let help = format!(
        "{}/{} choose  {} start  {} quit",
        keybinds.navigate_up, keybinds.navigate_down, keybinds.select, keybinds.quit
    );
    render_footer(&help, areas.footer, buf, palette);
}
