//! Core application state and logic for the maze round.

use color_eyre::eyre::Result;
use log::{debug, info};
use rand::rngs::StdRng;
use ratatui::DefaultTerminal;

use crate::{
    config::Settings,
    events,
    game::MazeEngine,
    maze::Direction,
    navigator::MoveOutcome,
    pathfinding::AnimationManager,
    session::{RoundReport, Stopwatch},
    types::{MainMenuItem, Screen},
    ui,
};

/// Application state container for the maze round.
///
/// This structure holds the state of the application, which is to say the structure from which
/// Ratatui will render the game and Crossterm events will help writing to.
pub struct App {
    /// Application exit flag.
    ///
    /// This field indicates whether the application should exit. It is set to `true` when the user
    /// wants to quit the game but it starts off `false`.
    pub(crate) exit: bool,
    /// Current screen being displayed to the user.
    ///
    /// This field holds the current screen of the game. It is used to determine which screen to
    /// render and what actions to take based on user input.
    pub(crate) screen: Screen,
    /// Settings in effect, including the changes made from the options menu.
    pub(crate) settings: Settings,
    /// Random source shared by every maze generated during this session.
    pub(crate) rng: StdRng,
    /// Current maze and player.
    ///
    /// The engine is replaced wholesale whenever a new game starts.
    pub(crate) engine: MazeEngine,
    /// Elapsed time of the current run.
    pub(crate) stopwatch: Stopwatch,
    /// Animation manager for the route hint.
    ///
    /// This field holds the route from the player to the goal while the hint is shown, and paces
    /// its reveal.
    pub(crate) animation_manager: AnimationManager,
    /// Report of the last solved maze, if any.
    pub(crate) report: Option<RoundReport>,
}

impl Default for App {
    fn default() -> Self {
        Self::new(Settings::default())
    }
}

impl App {
    /// Creates a new instance of the App structure from the given settings.
    ///
    /// A first maze is generated right away so the in-game screen always has something to show.
    #[must_use]
    pub fn new(settings: Settings) -> Self {
        let mut rng = settings.rng();
        let engine = MazeEngine::new_game(settings.size, &mut rng);

        Self {
            exit: false,
            screen: Screen::MainMenu(MainMenuItem::StartGame),
            settings,
            rng,
            engine,
            stopwatch: Stopwatch::start(),
            animation_manager: AnimationManager::new(),
            report: None,
        }
    }

    /// Runs the main loop of the application.
    ///
    /// This function handles user input and updates the application state. The loop continues until
    /// the exit condition is `true`, after which the function returns to the call site.
    ///
    /// # Errors
    ///
    /// - [`std::io::Error`]
    pub fn run(&mut self, terminal: &mut DefaultTerminal) -> Result<()> {
        while !self.exit {
            let _ = terminal.try_draw(|frame| {
                ui::draw(self, frame)
                    .map_err(|err| std::io::Error::new(std::io::ErrorKind::Other, err))
            })?;
            events::handle_events(self)?;
        }

        Ok(())
    }

    /// Report of the last maze solved during the session.
    #[must_use]
    pub const fn report(&self) -> Option<RoundReport> {
        self.report
    }

    /// Discards the current maze and starts a fresh one on the in-game screen.
    ///
    /// The report of a previous solve is dropped, so only a solve of the latest maze is reported.
    pub(crate) fn start_game(&mut self) {
        self.engine = MazeEngine::new_game(self.settings.size, &mut self.rng);
        self.stopwatch = Stopwatch::start();
        self.animation_manager.clear();
        self.report = None;
        self.screen = Screen::InGame;
    }

    /// Applies a move intent to the current maze.
    ///
    /// Solving the maze stops the stopwatch and records the round report. While the hint is shown
    /// it is recomputed from the new position.
    pub(crate) fn apply_move(&mut self, direction: Direction) -> MoveOutcome {
        let outcome = self.engine.move_player(direction);
        if !outcome.moved {
            return outcome;
        }

        if outcome.solved {
            self.stopwatch.stop();
            self.animation_manager.clear();
            let report = RoundReport {
                code: self.settings.code,
                elapsed: self.stopwatch.elapsed(),
            };
            info!("maze solved in {}s", report.elapsed.as_secs());
            self.report = Some(report);
        } else if self.animation_manager.is_active() {
            self.animation_manager.load(self.engine.route_to_goal());
        }

        outcome
    }

    /// Shows or hides the route hint.
    pub(crate) fn toggle_hint(&mut self) {
        if self.animation_manager.is_active() {
            self.animation_manager.clear();
        } else if !self.engine.is_solved() {
            self.animation_manager.load(self.engine.route_to_goal());
            debug!(
                "hint shows {} cells",
                self.animation_manager.steps.len()
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::OptionsMenuItem;

    /// Creates an app with a fixed seed and a small maze.
    fn create_test_app() -> App {
        App::new(Settings {
            size: 5,
            seed: Some(11),
            ..Settings::default()
        })
    }

    /// Walks the current maze to its goal along the route, returning the last outcome.
    fn walk_to_goal(app: &mut App) -> Option<MoveOutcome> {
        let route = app.engine.route_to_goal();
        let mut last = None;
        for pair in route.windows(2) {
            if let [from, to] = pair {
                let direction = from
                    .direction_to(*to)
                    .expect("route cells should be adjacent");
                last = Some(app.apply_move(direction));
            }
        }
        last
    }

    #[test]
    fn test_new_app_state() {
        let app = create_test_app();

        assert!(!app.exit);
        assert_eq!(app.screen, Screen::MainMenu(MainMenuItem::StartGame));
        assert_eq!(app.engine.grid().size(), 5);
        assert!(app.report().is_none());
        assert!(!app.animation_manager.is_active());
    }

    #[test]
    fn test_default_app_uses_default_size() {
        let app = App::default();

        assert_eq!(app.engine.grid().size(), 15);
    }

    #[test]
    fn test_seeded_apps_share_mazes() {
        let first = create_test_app();
        let second = create_test_app();

        assert_eq!(first.engine, second.engine);
    }

    #[test]
    fn test_start_game_replaces_maze() {
        let mut app = create_test_app();
        app.screen = Screen::OptionsMenu(OptionsMenuItem::Size);
        let _ = walk_to_goal(&mut app);
        assert!(app.engine.is_solved());

        app.start_game();

        assert_eq!(app.screen, Screen::InGame);
        assert!(!app.engine.is_solved());
        assert_eq!(app.engine.position(), app.engine.start());
        assert!(!app.stopwatch.is_stopped());
    }

    #[test]
    fn test_start_game_uses_current_size() {
        let mut app = create_test_app();
        app.settings.cycle_size();

        app.start_game();

        assert_eq!(app.engine.grid().size(), 10);
    }

    #[test]
    fn test_solving_records_report() {
        let mut app = create_test_app();
        app.start_game();

        let last = walk_to_goal(&mut app).expect("route should contain moves");

        assert!(last.solved);
        assert!(app.stopwatch.is_stopped());
        let report = app.report().expect("solving should record a report");
        assert_eq!(report.code, '9');
        assert_eq!(report.elapsed, app.stopwatch.elapsed());
    }

    #[test]
    fn test_hint_toggle_and_follow() {
        let mut app = create_test_app();
        app.start_game();

        app.toggle_hint();
        assert!(app.animation_manager.is_active());
        assert_eq!(
            app.animation_manager.steps.first().copied(),
            Some(app.engine.position())
        );

        let route = app.engine.route_to_goal();
        if let [from, to, _, ..] = route.as_slice() {
            let direction = from
                .direction_to(*to)
                .expect("route cells should be adjacent");
            let _ = app.apply_move(direction);
            assert_eq!(app.animation_manager.steps.first().copied(), Some(*to));
        }

        app.toggle_hint();
        assert!(!app.animation_manager.is_active());
    }

    #[test]
    fn test_new_game_drops_previous_report() {
        let mut app = create_test_app();
        app.start_game();
        let _ = walk_to_goal(&mut app);
        assert!(app.report().is_some());

        app.start_game();

        assert!(app.report().is_none());
    }

    #[test]
    fn test_hint_unavailable_after_solve() {
        let mut app = create_test_app();
        app.start_game();
        let _ = walk_to_goal(&mut app);

        app.toggle_hint();

        assert!(!app.animation_manager.is_active());
    }
}
