//! Screen routing: exactly one of menu, level select or game is visible

/// Top-level screens
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Screen {
    #[default]
    Menu,
    LevelSelect,
    Game,
}

impl Screen {
    pub const ALL: [Screen; 3] = [Screen::Menu, Screen::LevelSelect, Screen::Game];

    /// DOM id of the screen's container
    pub fn element_id(&self) -> &'static str {
        match self {
            Screen::Menu => "menu-screen",
            Screen::LevelSelect => "level-select-screen",
            Screen::Game => "game-screen",
        }
    }
}

/// Tracks the visible screen and whether a game is in progress
#[derive(Debug, Clone, Default)]
pub struct ScreenRouter {
    current: Screen,
    /// Gates the Escape/R shortcuts; set when a level is opened from the menu
    /// or level grid, cleared on return to the menu
    game_started: bool,
}

impl ScreenRouter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn current(&self) -> Screen {
        self.current
    }

    pub fn is_visible(&self, screen: Screen) -> bool {
        self.current == screen
    }

    pub fn game_started(&self) -> bool {
        self.game_started
    }

    pub fn show(&mut self, screen: Screen) {
        if self.current != screen {
            log::debug!("Screen {:?} -> {:?}", self.current, screen);
        }
        self.current = screen;
    }

    /// Enter the game screen with shortcuts enabled
    pub fn enter_game(&mut self) {
        self.game_started = true;
        self.show(Screen::Game);
    }

    /// Back to the menu with shortcuts disabled
    pub fn leave_game(&mut self) {
        self.show(Screen::Menu);
        self.game_started = false;
    }
}
