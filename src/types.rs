//! Type definitions and enums for the application state and navigation.

use clap::ValueEnum;

use crate::maze::Direction;

/// Enumeration of available application screens.
///
/// This enumeration holds information about the current screen of the game. This is used to
/// determine which screen to render and what actions to take based on user input.
#[derive(Debug, PartialEq, Eq)]
pub(crate) enum Screen {
    /// Main menu screen of the game.
    MainMenu(MainMenuItem),
    /// Options configuration screen.
    OptionsMenu(OptionsMenuItem),
    /// In-game screen where the maze is displayed and walked.
    InGame,
}

/// Main menu navigation options.
///
/// This enumeration holds the different items in the main menu. It is used to determine which items
/// can the user select in the main menu.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum MainMenuItem {
    /// "Start Game" menu option.
    StartGame,
    /// "Options" menu option.
    Options,
    /// "Quit" menu option.
    Quit,
}

/// Options menu navigation choices.
///
/// This enumeration holds the different items in the options menu. Selecting the first two changes
/// a setting in place, while the last one returns to the main menu.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum OptionsMenuItem {
    /// Maze size option, cycling through the size presets.
    Size,
    /// Control scheme option, toggling between the schemes.
    Controls,
    /// "Back" navigation option.
    Back,
}

/// Generic menu type configuration.
///
/// This enumeration holds the different specifics particular to each generic menu type in the
/// application's interface. Generic here means they share enough features to be considered worth
/// joining together part of their functionality.
pub(crate) enum MenuType {
    /// Main menu configuration.
    MainMenu(u8),
    /// Options menu configuration.
    OptionsMenu(u8),
}

impl MenuType {
    /// Returns the string representation of the menu type.
    ///
    /// This function provides the display name for each menu variant, used as the title in the
    /// menu's border when rendering the interface.
    pub(crate) const fn repr(&self) -> &str {
        match self {
            Self::MainMenu(_) => "Main Menu",
            Self::OptionsMenu(_) => "Options Menu",
        }
    }

    /// Returns the number of items held by the menu type variant.
    pub(crate) const fn value(&self) -> u8 {
        match self {
            Self::MainMenu(value) | Self::OptionsMenu(value) => *value,
        }
    }
}

/// Mapping from arrow keys to move intents.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum ControlScheme {
    /// Each arrow moves in the direction it points to.
    #[default]
    Standard,
    /// Each arrow moves a quarter turn clockwise from the direction it points to.
    Rotated,
}

impl ControlScheme {
    /// Translates the direction printed on an arrow key into the move intent it triggers.
    #[must_use]
    pub const fn apply(self, arrow: Direction) -> Direction {
        match self {
            Self::Standard => arrow,
            Self::Rotated => arrow.clockwise(),
        }
    }

    /// Returns the other scheme.
    #[must_use]
    pub const fn toggled(self) -> Self {
        match self {
            Self::Standard => Self::Rotated,
            Self::Rotated => Self::Standard,
        }
    }

    /// Short name shown in the options menu.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Standard => "standard",
            Self::Rotated => "rotated",
        }
    }
}
