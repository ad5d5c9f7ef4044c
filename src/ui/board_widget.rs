use crate::game::{Board, Cell, Player, Ray};
use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

const CELL_WIDTH: usize = 3;

/// Display colour for a player's pieces
pub fn player_color(player: Player) -> Color {
    match player {
        Player::One => Color::Red,
        Player::Two => Color::Yellow,
    }
}

/// Build the framed board: column numbers, `height` rows of cells, and a
/// selection marker under `selected` if given. Cells in `highlight` are drawn
/// emphasised.
pub fn board_lines(
    board: &Board,
    selected: Option<usize>,
    highlight: Option<&Ray>,
) -> Vec<Line<'static>> {
    let width = board.width();
    let inner = "═".repeat(width * CELL_WIDTH + 1);
    let mut lines = Vec::with_capacity(board.height() + 4);

    // Column numbers with selection indicator
    let mut col_line = vec![Span::raw("   ")]; // Padding (3 chars to match "  ║")
    for col in 0..width {
        let label = format!("{:^3}", col + 1);
        if Some(col) == selected {
            col_line.push(Span::styled(
                label,
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD | Modifier::UNDERLINED),
            ));
        } else {
            col_line.push(Span::raw(label));
        }
    }
    col_line.push(Span::raw("  ")); // Suffix padding to match " ║"
    lines.push(Line::from(col_line));

    lines.push(Line::from(format!("  ╔{inner}╗")));

    for row in 0..board.height() {
        let mut row_spans = vec![Span::raw("  ║")];
        for col in 0..width {
            let winning = highlight.is_some_and(|ray| ray.contains(&(row, col)));
            row_spans.push(cell_span(board.get(row, col), winning));
        }
        row_spans.push(Span::raw(" ║"));
        lines.push(Line::from(row_spans));
    }

    lines.push(Line::from(format!("  ╚{inner}╝")));

    let mut indicator_line = vec![Span::raw("   ")];
    for col in 0..width {
        if Some(col) == selected {
            indicator_line.push(Span::styled(" ▲ ", Style::default().fg(Color::Cyan)));
        } else {
            indicator_line.push(Span::raw("   "));
        }
    }
    indicator_line.push(Span::raw("  "));
    lines.push(Line::from(indicator_line));

    lines
}

fn cell_span(cell: Cell, winning: bool) -> Span<'static> {
    match cell {
        Cell::Empty => Span::styled(" . ", Style::default().fg(Color::DarkGray)),
        Cell::Taken(player) => {
            let mut style = Style::default().fg(player_color(player));
            if winning {
                style = style.add_modifier(Modifier::BOLD | Modifier::REVERSED);
            }
            Span::styled(" ● ", style)
        }
    }
}

/// Render the board centred in `area`.
pub fn render_board(
    frame: &mut Frame,
    board: &Board,
    selected: Option<usize>,
    highlight: Option<&Ray>,
    area: Rect,
) {
    let widget = Paragraph::new(board_lines(board, selected, highlight)).alignment(Alignment::Center);
    frame.render_widget(widget, area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::Dimensions;

    fn plain(line: &Line) -> String {
        line.spans.iter().map(|s| s.content.as_ref()).collect()
    }

    #[test]
    fn test_line_count_matches_height() {
        let board = Board::new(Dimensions::new(5, 3).unwrap());
        let lines = board_lines(&board, Some(0), None);
        assert_eq!(lines.len(), 3 + 4);
    }

    #[test]
    fn test_rows_have_one_span_per_column() {
        let board = Board::new(Dimensions::new(9, 4).unwrap());
        let lines = board_lines(&board, None, None);
        // Border spans on both sides
        assert_eq!(lines[2].spans.len(), 9 + 2);
        assert_eq!(plain(&lines[1]).chars().count(), plain(&lines[2]).chars().count());
    }

    #[test]
    fn test_pieces_and_selection() {
        let mut board = Board::default();
        board.drop_piece(2, Player::One).unwrap();
        let lines = board_lines(&board, Some(2), None);

        let bottom = &lines[1 + board.height()];
        assert_eq!(bottom.spans[3].content, " ● ");
        assert_eq!(bottom.spans[3].style.fg, Some(Color::Red));
        assert_eq!(plain(&lines[0]), "    1  2  3  4  5  6  7   ");
        assert!(plain(lines.last().unwrap()).contains('▲'));
    }

    #[test]
    fn test_highlight_marks_winning_cells() {
        let mut board = Board::default();
        for col in 0..4 {
            board.drop_piece(col, Player::Two).unwrap();
        }
        let ray = board.winning_ray(Player::Two).unwrap();
        let lines = board_lines(&board, None, Some(&ray));

        let bottom = &lines[1 + board.height()];
        for col in 0..4 {
            assert!(bottom.spans[col + 1]
                .style
                .add_modifier
                .contains(Modifier::REVERSED));
        }
    }
}
