//! User interface rendering functions for all application screens.

use std::rc::Rc;

use color_eyre::eyre::{OptionExt as _, Result};
use ratatui::{
    layout::{Alignment, Constraint, Flex, Layout, Rect},
    style::{Color, Style},
    symbols::Marker,
    text::Line,
    widgets::{
        canvas::{Canvas, Points},
        Block, BorderType, Borders, Clear, Paragraph,
    },
    Frame,
};

use crate::{
    maze::{Direction, Grid, Position},
    pathfinding,
    session,
    types::{MainMenuItem, MenuType, OptionsMenuItem, Screen},
    App,
};

/// Updates the application UI based on the persistent state.
///
/// This function renders different screens based on the current state stored in the [`App`]
/// structure, dispatching to the appropriate rendering function for each screen type.
///
/// # Errors
///
/// This function may return errors from drawing operations or data conversion failures.
pub(crate) fn draw(app: &App, frame: &mut Frame) -> Result<()> {
    match &app.screen {
        Screen::MainMenu(item) => main_menu(frame, *item),
        Screen::OptionsMenu(item) => options_menu(app, frame, *item),
        Screen::InGame => in_game(app, frame)?,
    }

    Ok(())
}

/// Clears the terminal screen by rendering a [`Clear`] widget.
///
/// This function renders a clear widget over the entire area of the frame to prepare for
/// rendering new content without artifacts from previous buffers rendered on the same frame.
pub(crate) fn clear(frame: &mut Frame) {
    let clear = Clear;
    frame.render_widget(clear, frame.area());
}

/// Renders the generic layout structure for the main and options menus.
///
/// This function creates the common layout and block structure used by both menus. The generic
/// part includes the centered positioning and border styling, while the specific menu content is
/// handled by the caller using the [`MenuType`] parameter.
#[expect(
    clippy::indexing_slicing,
    reason = "The collection is created in-place with few, known elements; there is no risk of bad indexing."
)]
pub(crate) fn init_menu(frame: &mut Frame, menu: &MenuType) -> Rc<[Rect]> {
    let space = Layout::horizontal([
        Constraint::Percentage(35),
        Constraint::Percentage(30),
        Constraint::Percentage(35),
    ])
    .split(frame.area())[1];

    // One row per entry plus the two border rows.
    let layout = Layout::vertical([Constraint::Length(u16::from(menu.value() + 2))])
        .flex(Flex::Center)
        .split(space)[0];

    let block = Block::bordered()
        .title(menu.repr())
        .title_bottom("(j) down / (k) up / (l) select")
        .title_alignment(Alignment::Center)
        .style(Color::Green)
        .border_type(BorderType::Rounded);

    let inner_space = block.inner(layout);

    frame.render_widget(block, layout);

    Layout::vertical(vec![Constraint::Max(1); usize::from(menu.value())]).split(inner_space)
}

/// Renders a list of menu entries, highlighting the selected one.
fn render_entries(frame: &mut Frame, layout: &[Rect], entries: &[(&str, bool)]) {
    let content_style = Style::default().fg(Color::Green);
    let active_content_style = Style::default().fg(Color::White).bg(Color::Green);

    for (area, (label, selected)) in layout.iter().zip(entries) {
        let style = if *selected {
            active_content_style
        } else {
            content_style
        };
        frame.render_widget(Line::raw(*label).centered().style(style), *area);
    }
}

/// Renders the main menu screen with navigation options.
///
/// This function displays the main menu with options for "Start Game", "Options", and "Quit". It
/// highlights the currently selected option and provides visual feedback for user navigation.
pub(crate) fn main_menu(frame: &mut Frame, item: MainMenuItem) {
    clear(frame);

    let inner_layout = init_menu(frame, &MenuType::MainMenu(3));

    render_entries(
        frame,
        &inner_layout,
        &[
            ("Start Game", item == MainMenuItem::StartGame),
            ("Options", item == MainMenuItem::Options),
            ("Quit", item == MainMenuItem::Quit),
        ],
    );
}

/// Renders the options menu screen with the current settings.
///
/// Each setting entry shows its current value, so cycling through values with the select key is
/// visible right away.
pub(crate) fn options_menu(app: &App, frame: &mut Frame, item: OptionsMenuItem) {
    clear(frame);

    let inner_layout = init_menu(frame, &MenuType::OptionsMenu(3));

    let size = format!("Size: {0}x{0}", app.settings.size);
    let controls = format!("Controls: {}", app.settings.controls.label());
    render_entries(
        frame,
        &inner_layout,
        &[
            (size.as_str(), item == OptionsMenuItem::Size),
            (controls.as_str(), item == OptionsMenuItem::Controls),
            ("Return", item == OptionsMenuItem::Back),
        ],
    );
}

/// Side length in blocks of the block layout of a `size`×`size` grid.
///
/// Every cell and every wall between two cells takes one block, plus one block of outer wall on
/// each edge.
const fn block_side(size: usize) -> usize {
    2 * size + 1
}

/// Block coordinates of the floor of the cell at `position`.
const fn cell_block(position: Position) -> (usize, usize) {
    (2 * position.x + 1, 2 * position.y + 1)
}

/// Computes the `(col, row)` blocks occupied by walls and wall posts.
pub(crate) fn wall_blocks(grid: &Grid) -> Vec<(usize, usize)> {
    let side = block_side(grid.size());
    let mut blocks: Vec<(usize, usize)> = (0..side)
        .step_by(2)
        .flat_map(|row| (0..side).step_by(2).map(move |col| (col, row)))
        .collect();

    for cell in grid.cells() {
        let (col, row) = cell_block(cell.position);
        if cell.walls.is_blocked(Direction::Up) {
            blocks.push((col, row - 1));
        }
        if cell.walls.is_blocked(Direction::Left) {
            blocks.push((col - 1, row));
        }
        if cell.walls.is_blocked(Direction::Right) && cell.position.x + 1 == grid.size() {
            blocks.push((col + 1, row));
        }
        if cell.walls.is_blocked(Direction::Down) && cell.position.y + 1 == grid.size() {
            blocks.push((col, row + 1));
        }
    }

    blocks
}

/// Computes the blocks covered by a route, including the gaps between consecutive cells.
pub(crate) fn route_blocks(route: &[Position]) -> Vec<(usize, usize)> {
    let mut blocks: Vec<(usize, usize)> = route.iter().map(|&cell| cell_block(cell)).collect();
    blocks.extend(
        route
            .windows(2)
            .filter_map(|pair| match pair {
                [from, to] => Some((from.x + to.x + 1, from.y + to.y + 1)),
                _ => None,
            }),
    );
    blocks
}

/// Widens each block into two horizontal canvas points so cells come out roughly square.
fn widen(blocks: &[(usize, usize)]) -> Vec<(usize, usize)> {
    blocks
        .iter()
        .flat_map(|&(col, row)| [(2 * col, row), (2 * col + 1, row)])
        .collect()
}

/// Renders the in-game screen with the maze, the player and the optional route hint.
///
/// This function draws the maze walls, the route hint, the goal and the player on a single
/// [`Canvas`], with the stopwatch above and the key help below. A popup announces the code once
/// the maze is solved.
///
/// # Errors
///
/// This function may return errors from coordinate conversion operations.
pub(crate) fn in_game(app: &App, frame: &mut Frame) -> Result<()> {
    clear(frame);

    let grid = app.engine.grid();
    let side = block_side(grid.size());
    let canvas_cols = 2 * side;
    let canvas_rows = side.div_ceil(2);

    let overall_layout = Layout::vertical([
        Constraint::Length(1), // Stopwatch
        Constraint::Min(1),    // Maze and padding area
        Constraint::Length(3), // Tooltip block
    ])
    .split(frame.area());

    let header_area = *overall_layout
        .first()
        .ok_or_eyre("failed to get header area from layout")?;
    let maze_content_area = *overall_layout
        .get(1)
        .ok_or_eyre("failed to get maze content area from layout")?;
    let tooltip_full_area = *overall_layout
        .last()
        .ok_or_eyre("failed to get tooltip area from layout")?;

    let clock = session::format_clock(app.stopwatch.elapsed());
    let clock_color = if app.stopwatch.is_stopped() {
        Color::Yellow
    } else {
        Color::Green
    };
    frame.render_widget(
        Line::styled(format!("Time {clock}"), Style::default().fg(clock_color)).centered(),
        header_area,
    );

    let canvas_width = u16::try_from(canvas_cols)?;
    let canvas_height = u16::try_from(canvas_rows)?;
    if maze_content_area.width < canvas_width || maze_content_area.height < canvas_height {
        too_small(frame, maze_content_area, canvas_width, canvas_height);
        if app.engine.is_solved() {
            solved_popup(app, frame, &clock)?;
        }
        return Ok(());
    }

    let space = centered(maze_content_area, canvas_width, canvas_height)?;

    let wall_screen_coords =
        pathfinding::transform_maze_to_screen_coords(&widen(&wall_blocks(grid)), side, canvas_cols)?;
    let hint_screen_coords = pathfinding::transform_maze_to_screen_coords(
        &widen(&route_blocks(app.animation_manager.visible())),
        side,
        canvas_cols,
    )?;
    let goal_screen_coords = pathfinding::transform_maze_to_screen_coords(
        &widen(&[cell_block(app.engine.goal())]),
        side,
        canvas_cols,
    )?;
    let player_screen_coords = pathfinding::transform_maze_to_screen_coords(
        &widen(&[cell_block(app.engine.position())]),
        side,
        canvas_cols,
    )?;

    let maze = Canvas::default()
        .x_bounds([
            (-rounded_div::i32(space.width.into(), 2)).into(),
            (rounded_div::i32(space.width.into(), 2)).into(),
        ])
        .y_bounds([
            -f64::from(space.height),
            f64::from(space.height),
        ])
        // Half blocks give two canvas rows per terminal row.
        .marker(Marker::HalfBlock)
        .paint(|ctx| {
            ctx.draw(&Points {
                coords: &wall_screen_coords,
                color: Color::Green,
            });
            ctx.layer();
            ctx.draw(&Points {
                coords: &hint_screen_coords,
                color: Color::Red,
            });
            ctx.layer();
            ctx.draw(&Points {
                coords: &goal_screen_coords,
                color: Color::Yellow,
            });
            ctx.layer();
            ctx.draw(&Points {
                coords: &player_screen_coords,
                color: Color::Cyan,
            });
        });

    frame.render_widget(maze, space);

    let tooltip_area = centered(tooltip_full_area, canvas_width, 3)?;
    let tooltip_block = Block::bordered()
        .title("(arrows) move / (p) hint / (n) new maze / (h) menu")
        .title_alignment(Alignment::Center)
        .style(Style::default().fg(Color::Green))
        .border_type(BorderType::Plain)
        .borders(Borders::TOP);

    frame.render_widget(tooltip_block, tooltip_area);

    if app.engine.is_solved() {
        solved_popup(app, frame, &clock)?;
    }

    Ok(())
}

/// Renders a notice in place of a maze that does not fit in `area`.
///
/// A maze is drawn whole or not at all.
fn too_small(frame: &mut Frame, area: Rect, width: u16, height: u16) {
    let notice = Paragraph::new(vec![
        Line::raw("Terminal too small").centered(),
        Line::raw(format!(
            "Need {width}x{} cells",
            height.saturating_add(4)
        ))
        .centered(),
        Line::raw("(h) menu / (q) quit").centered(),
    ])
    .style(Style::default().fg(Color::Yellow));

    frame.render_widget(notice, area);
}

/// Renders the popup announcing the code of a solved maze.
///
/// # Errors
///
/// This function may return errors if the popup area cannot be computed.
pub(crate) fn solved_popup(app: &App, frame: &mut Frame, clock: &str) -> Result<()> {
    let area = centered(frame.area(), 34, 6)?;
    let block = Block::bordered()
        .title("Congratulations!")
        .title_bottom("(n) new maze / (h) menu / (q) quit")
        .title_alignment(Alignment::Center)
        .style(Color::Green)
        .border_type(BorderType::Rounded);
    let text = Paragraph::new(vec![
        Line::raw(format!("The code is {}", app.settings.code)).centered(),
        Line::raw(format!("Time {clock}")).centered(),
    ])
    .block(block);

    frame.render_widget(Clear, area);
    frame.render_widget(text, area);

    Ok(())
}

/// Returns a `width`×`height` rectangle centred in `area`, shrunk to fit when `area` is smaller.
///
/// # Errors
///
/// This function returns an error if the layout does not yield the middle slot.
fn centered(area: Rect, width: u16, height: u16) -> Result<Rect> {
    let row = Layout::vertical([Constraint::Length(height)])
        .flex(Flex::Center)
        .split(area)
        .first()
        .copied()
        .ok_or_eyre("failed to get centered row from vertical layout")?;

    Layout::horizontal([Constraint::Length(width)])
        .flex(Flex::Center)
        .split(row)
        .first()
        .copied()
        .ok_or_eyre("failed to get centered area from horizontal layout")
}

#[cfg(test)]
mod tests {
    use ratatui::{backend::TestBackend, Terminal};

    use super::*;
    use crate::config::{Settings, SIZE_PRESETS};

    /// Creates a minimal test app for UI testing.
    fn create_test_app() -> App {
        App::new(Settings {
            size: 5,
            seed: Some(8),
            ..Settings::default()
        })
    }

    /// Creates a test terminal with known dimensions for UI testing.
    fn create_test_terminal() -> Terminal<TestBackend> {
        let backend = TestBackend::new(80, 24);
        Terminal::new(backend).expect("failed to create test terminal")
    }

    /// Collects the rendered buffer into a single string.
    fn buffer_text(terminal: &Terminal<TestBackend>) -> String {
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(ratatui::buffer::Cell::symbol)
            .collect()
    }

    /// Counts the cells whose foreground or background is `color`.
    fn painted_cells(terminal: &Terminal<TestBackend>, color: Color) -> usize {
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .filter(|cell| cell.fg == color || cell.bg == color)
            .count()
    }

    #[test]
    fn test_draw_main_menu() {
        let app = create_test_app();
        let mut terminal = create_test_terminal();

        let result = terminal.draw(|frame| {
            draw(&app, frame).expect("drawing should succeed in test");
        });

        assert!(result.is_ok(), "drawing main menu should succeed");
        let text = buffer_text(&terminal);
        for entry in ["Start Game", "Options", "Quit"] {
            assert!(text.contains(entry), "main menu should show {entry}");
        }
    }

    #[test]
    fn test_draw_options_menu_shows_values() {
        let mut app = create_test_app();
        let mut terminal = create_test_terminal();
        app.screen = Screen::OptionsMenu(OptionsMenuItem::Size);

        let result = terminal.draw(|frame| {
            draw(&app, frame).expect("drawing should succeed in test");
        });

        assert!(result.is_ok(), "drawing options menu should succeed");
        let text = buffer_text(&terminal);
        assert!(text.contains("Size: 5x5"), "options menu should show the size");
        assert!(
            text.contains("Controls: standard"),
            "options menu should show the controls"
        );
        assert!(text.contains("Return"), "options menu should show the back entry");
    }

    #[test]
    fn test_menu_highlights_middle_entry() {
        let mut app = create_test_app();
        let mut terminal = create_test_terminal();
        app.screen = Screen::OptionsMenu(OptionsMenuItem::Controls);

        let result = terminal.draw(|frame| {
            draw(&app, frame).expect("drawing should succeed in test");
        });

        assert!(result.is_ok(), "drawing options menu should succeed");
        let highlighted: String = terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .filter(|cell| cell.bg == Color::Green)
            .map(ratatui::buffer::Cell::symbol)
            .collect();
        assert!(
            highlighted.contains("Controls: standard"),
            "the controls entry should carry the highlight"
        );
    }

    #[test]
    fn test_draw_in_game() {
        let mut app = create_test_app();
        let mut terminal = create_test_terminal();
        app.start_game();

        let result = terminal.draw(|frame| {
            draw(&app, frame).expect("drawing should succeed in test");
        });

        assert!(result.is_ok(), "drawing in-game screen should succeed");
        let text = buffer_text(&terminal);
        assert!(text.contains("Time 00:00"), "stopwatch should be shown");
        assert!(!text.contains("The code is"), "popup should wait for the solve");
    }

    #[test]
    fn test_draw_in_game_default_size_fits() {
        let mut app = App::new(Settings {
            seed: Some(8),
            ..Settings::default()
        });
        let mut terminal = create_test_terminal();
        app.start_game();
        app.toggle_hint();

        let result = terminal.draw(|frame| {
            in_game(&app, frame).expect("in-game should render successfully");
        });

        assert!(result.is_ok(), "rendering a 15x15 maze should succeed");
    }

    #[test]
    fn test_largest_preset_shows_player_and_goal() {
        let size = *SIZE_PRESETS.last().expect("presets should not be empty");
        let mut app = App::new(Settings {
            size,
            seed: Some(8),
            ..Settings::default()
        });
        let mut terminal = create_test_terminal();
        app.start_game();

        let result = terminal.draw(|frame| {
            in_game(&app, frame).expect("in-game should render successfully");
        });

        assert!(result.is_ok(), "rendering the largest preset should succeed");
        assert!(
            painted_cells(&terminal, Color::Yellow) > 0,
            "goal should be visible at size {size}"
        );
        assert!(
            painted_cells(&terminal, Color::Cyan) > 0,
            "player should be visible at size {size}"
        );
        assert!(!buffer_text(&terminal).contains("Terminal too small"));
    }

    #[test]
    fn test_oversized_maze_shows_notice() {
        let mut app = App::new(Settings {
            size: 25,
            seed: Some(8),
            ..Settings::default()
        });
        let mut terminal = create_test_terminal();
        app.start_game();

        let result = terminal.draw(|frame| {
            in_game(&app, frame).expect("in-game should render successfully");
        });

        assert!(result.is_ok(), "rendering an oversized maze should succeed");
        let text = buffer_text(&terminal);
        assert!(text.contains("Terminal too small"), "notice should replace the maze");
        assert!(text.contains("Need 102x30 cells"), "notice should give the needed size");
        assert_eq!(
            painted_cells(&terminal, Color::Cyan),
            0,
            "no partial maze should be drawn"
        );
    }

    #[test]
    fn test_draw_in_game_small_terminal() {
        let mut app = create_test_app();
        let mut terminal =
            Terminal::new(TestBackend::new(20, 8)).expect("failed to create test terminal");
        app.start_game();

        let result = terminal.draw(|frame| {
            in_game(&app, frame).expect("in-game should render in a cramped terminal");
        });

        assert!(result.is_ok(), "rendering in a small terminal should succeed");
        assert!(buffer_text(&terminal).contains("Terminal too small"));
    }

    #[test]
    fn test_solved_popup_shows_code() {
        let mut app = create_test_app();
        let mut terminal = create_test_terminal();
        app.start_game();
        for pair in app.engine.route_to_goal().windows(2) {
            if let [from, to] = pair {
                let direction = from
                    .direction_to(*to)
                    .expect("route cells should be adjacent");
                let _ = app.apply_move(direction);
            }
        }

        let result = terminal.draw(|frame| {
            draw(&app, frame).expect("drawing should succeed in test");
        });

        assert!(result.is_ok(), "drawing the solved screen should succeed");
        let text = buffer_text(&terminal);
        assert!(text.contains("The code is 9"), "popup should reveal the code");
    }

    #[test]
    fn test_clear_function() {
        let mut terminal = create_test_terminal();

        let result = terminal.draw(|frame| {
            clear(frame);
        });

        assert!(result.is_ok(), "clearing screen should succeed");
    }

    #[test]
    fn test_init_menu_sizes() {
        let mut terminal = create_test_terminal();

        let result = terminal.draw(|frame| {
            let layout = init_menu(frame, &MenuType::MainMenu(3));
            assert_eq!(layout.len(), 3, "main menu should have 3 items");
            let layout = init_menu(frame, &MenuType::OptionsMenu(3));
            assert_eq!(layout.len(), 3, "options menu should have 3 items");
        });

        assert!(result.is_ok(), "initializing menus should succeed");
    }

    #[test]
    fn test_wall_blocks_of_closed_cell() {
        let blocks = wall_blocks(&Grid::new(1));

        let mut sorted = blocks;
        sorted.sort_unstable();
        sorted.dedup();
        assert_eq!(
            sorted,
            vec![
                (0, 0),
                (0, 1),
                (0, 2),
                (1, 0),
                (1, 2),
                (2, 0),
                (2, 1),
                (2, 2),
            ],
            "a closed cell should be ringed by eight blocks"
        );
    }

    #[test]
    fn test_wall_blocks_skip_passages() {
        let mut grid = Grid::new(2);
        let _ = grid.carve(Position::new(0, 0), Direction::Right);

        let blocks = wall_blocks(&grid);

        assert!(!blocks.contains(&(2, 1)), "carved passage should stay open");
        assert!(blocks.contains(&(2, 3)), "uncarved wall should be drawn");
    }

    #[test]
    fn test_route_blocks_fill_gaps() {
        let blocks = route_blocks(&[Position::new(0, 0), Position::new(1, 0)]);

        assert_eq!(blocks, vec![(1, 1), (3, 1), (2, 1)]);
    }

    #[test]
    fn test_widen_doubles_columns() {
        assert_eq!(widen(&[(1, 2)]), vec![(2, 2), (3, 2)]);
    }
}
