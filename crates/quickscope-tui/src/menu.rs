//! The status-bar menu: `About QuickScope`, a separator, `Quit QuickScope`.

/// A command reachable from the menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuCommand {
    About,
    Quit,
}

/// One line of the menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuEntry {
    Item(MenuCommand),
    Separator,
}

impl MenuEntry {
    pub fn label(&self) -> &'static str {
        match self {
            MenuEntry::Item(MenuCommand::About) => "About QuickScope",
            MenuEntry::Item(MenuCommand::Quit) => "Quit QuickScope",
            MenuEntry::Separator => "",
        }
    }

    /// Key equivalent shown next to the label.
    pub fn key_hint(&self) -> Option<&'static str> {
        match self {
            MenuEntry::Item(MenuCommand::Quit) => Some("q"),
            _ => None,
        }
    }

    pub fn command(&self) -> Option<MenuCommand> {
        match self {
            MenuEntry::Item(cmd) => Some(*cmd),
            MenuEntry::Separator => None,
        }
    }
}

pub const MENU: [MenuEntry; 3] = [
    MenuEntry::Item(MenuCommand::About),
    MenuEntry::Separator,
    MenuEntry::Item(MenuCommand::Quit),
];

/// Next selectable index after `current`, wrapping and skipping separators.
pub fn next_selectable(current: usize) -> usize {
    step(current, 1)
}

/// Previous selectable index before `current`, wrapping and skipping separators.
pub fn prev_selectable(current: usize) -> usize {
    step(current, MENU.len() - 1)
}

fn step(current: usize, delta: usize) -> usize {
    let mut index = current % MENU.len();
    for _ in 0..MENU.len() {
        index = (index + delta) % MENU.len();
        if MENU[index].command().is_some() {
            return index;
        }
    }
    current
}
