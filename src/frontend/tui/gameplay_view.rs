//! Gameplay screen: guess field, hint toggle, lives and end-of-round options

use super::palette::Palette;
use super::widgets::{
    button, centered_columns, centered_line, fill_background, render_footer, render_header,
    ScreenAreas,
};
use crate::config::Keybinds;
use crate::core::gameplay::Gameplay;
use crate::core::round::RoundStatus;
use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};

const INPUT_WIDTH: u16 = 22;

pub fn render_gameplay(
    gameplay: &Gameplay,
    keybinds: &Keybinds,
    area: Rect,
    buf: &mut Buffer,
    palette: &Palette,
) {
    let round = gameplay.round();

    fill_background(area, buf, palette);
    let areas = ScreenAreas::split(area);
    render_header(&round.answer_text(), &areas, buf, palette);

    let message_color = match round.status() {
        RoundStatus::InProgress => palette.text,
        RoundStatus::Won => palette.win,
        RoundStatus::Lost => palette.lose,
    };
    centered_line(
        Line::styled(
            round.message(),
            Style::default()
                .fg(message_color)
                .add_modifier(Modifier::BOLD),
        ),
        Rect {
            height: 1,
            ..areas.message
        },
        buf,
    );

    let [label_row, input_area, submit_row, hints_row, hint_text_row, lives_row, _, options_row] =
        Layout::vertical([
            Constraint::Length(1),
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
        ])
        .areas(areas.body);

    let enabled = round.accepts_input();
    let text_style = Style::default().fg(palette.text);

    centered_line(Line::styled("Enter guess:", text_style), label_row, buf);

    // Guess field; the trailing underscore marks the cursor while editable
    let input_style = if enabled {
        Style::default().fg(palette.highlight)
    } else {
        Style::default().fg(palette.text).add_modifier(Modifier::DIM)
    };
    let mut field = round.guess().to_string();
    if enabled {
        field.push('_');
    }
    Paragraph::new(Line::styled(field, input_style))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).border_style(input_style))
        .render(centered_columns(input_area, INPUT_WIDTH), buf);

    centered_line(
        Line::from(button("Enter Guess", false, enabled, palette)),
        submit_row,
        buf,
    );

    let checkbox = if round.hints_enabled() { "[x]" } else { "[ ]" };
    centered_line(
        Line::from(vec![
            Span::styled("Hints ", text_style.add_modifier(Modifier::BOLD)),
            Span::styled(checkbox, Style::default().fg(palette.highlight)),
        ]),
        hints_row,
        buf,
    );

    if let Some(hint) = round.visible_hint() {
        centered_line(Line::styled(hint, text_style), hint_text_row, buf);
    }

    centered_line(Line::styled(round.lives_message(), text_style), lives_row, buf);

    let options = gameplay.end_options();
    if !options.is_empty() {
        let selected = gameplay.selected_option();
        let mut spans = Vec::new();
        for (idx, option) in options.iter().enumerate() {
            if idx > 0 {
                spans.push(Span::raw("   "));
            }
            spans.push(button(option.label(), selected == Some(*option), true, palette));
        }
        centered_line(Line::from(spans), options_row, buf);
    }

    let help = if enabled {
        format!(
            "{} submit  {} hints  {} new game  {} quit",
            keybinds.submit, keybinds.toggle_hints, keybinds.new_game, keybinds.quit
        )
    } else {
        format!(
            "{}/{} choose  {} confirm  {} hints",
            keybinds.navigate_left, keybinds.navigate_right, keybinds.select, keybinds.toggle_hints
        )
    };
    render_footer(&help, areas.footer, buf, palette);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::difficulty::Difficulty;
    use crate::core::round::Round;
    use crate::frontend::tui::widgets::buffer_rows;

    fn render(gameplay: &Gameplay) -> String {
        let area = Rect::new(0, 0, 60, 24);
        let mut buf = Buffer::empty(area);
        render_gameplay(
            gameplay,
            &Keybinds::default(),
            area,
            &mut buf,
            &Palette::default(),
        );
        buffer_rows(&buf).join("\n")
    }

    fn submit(gameplay: &mut Gameplay, guess: &str) {
        gameplay.on_guess_changed(guess);
        gameplay.on_submit();
    }

    #[test]
    fn test_fresh_round_screen() {
        let gameplay = Gameplay::from_round(Round::with_target(Difficulty::Easy, 7, false));
        let text = render(&gameplay);
        assert!(text.contains("Number is between 1 and 10"));
        assert!(text.contains("Guesses Remaining: 3"));
        assert!(text.contains("Hints [ ]"));
        assert!(text.contains("Enter guess:"));
        assert!(!text.contains("Play Again"));
        assert!(!text.contains(" 7 "));
    }

    #[test]
    fn test_hint_hidden_until_enabled() {
        let mut gameplay = Gameplay::from_round(Round::with_target(Difficulty::Easy, 7, false));
        submit(&mut gameplay, "3");
        let text = render(&gameplay);
        assert!(!text.contains("too low"));
        assert!(text.contains("Guesses Remaining: 2"));

        gameplay.on_toggle_hints();
        let text = render(&gameplay);
        assert!(text.contains("Your guess is too low."));
        assert!(text.contains("Hints [x]"));
    }

    #[test]
    fn test_win_screen() {
        let mut gameplay = Gameplay::from_round(Round::with_target(Difficulty::Easy, 7, true));
        submit(&mut gameplay, "7");
        let text = render(&gameplay);
        assert!(text.contains("You Win!"));
        assert!(text.contains("Your guess is correct!"));
        assert!(text.contains("[ Play Again ]"));
        assert!(text.contains("[ Exit ]"));
        assert!(!text.contains("Number is between"));
    }

    #[test]
    fn test_loss_reveals_target() {
        let mut gameplay = Gameplay::from_round(Round::with_target(Difficulty::Easy, 5, false));
        for guess in ["1", "2", "3"] {
            submit(&mut gameplay, guess);
        }
        let rows: Vec<String> = render(&gameplay).lines().map(str::to_string).collect();
        assert_eq!(rows[3].trim(), "5");
        assert!(rows.iter().any(|row| row.contains("You Lost :(")));
        assert!(rows.iter().any(|row| row.contains("Guesses Remaining: 0")));
    }
}
