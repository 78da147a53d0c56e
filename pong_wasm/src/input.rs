//! Keyboard input handling

/// Lifecycle keys the page binds around the game
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HostCommand {
    /// Open the game and start playing
    Open,
    /// Close the game, freezing the match
    Close,
}

/// Map a key to a lifecycle command, if it is one
pub fn command_for_key(key: &str) -> Option<HostCommand> {
    match key {
        "Enter" => Some(HostCommand::Open),
        "Escape" => Some(HostCommand::Close),
        _ => None,
    }
}
