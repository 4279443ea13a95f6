use crate::present::Category;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    Quit,
    Refresh,
    Save,
    NextTab,
    PrevTab,
    SelectTab(Category),
    Scroll(Direction),
    ToggleHelp,
    DismissDialog,
    CycleTheme,
    None,
}
