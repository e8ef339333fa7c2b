/// The console's fixed command surface. Operation tokens are resolved by
/// exact, case-normalized match; `Help` and `Exit` only steer the loop.
#[derive(Eq, Hash, PartialEq, Debug, Clone, Copy)]
pub enum ConsoleCommand {
    Download,
    Upload,
    Delete,
    Rename,
    GetSize,
    ListDirectory,
    MakeDirectory,
    RemoveDirectory,
    Help,
    Exit,
}

impl ConsoleCommand {
    pub fn from_token(token: &str) -> Option<ConsoleCommand> {
        match token.to_ascii_uppercase().as_str() {
            "DOWNLOAD" => Some(ConsoleCommand::Download),
            "UPLOAD" => Some(ConsoleCommand::Upload),
            "DELETE" => Some(ConsoleCommand::Delete),
            "RENAME" => Some(ConsoleCommand::Rename),
            "GETSIZE" => Some(ConsoleCommand::GetSize),
            "LISTDIRECTORY" => Some(ConsoleCommand::ListDirectory),
            "MAKEDIRECTORY" => Some(ConsoleCommand::MakeDirectory),
            "REMOVEDIRECTORY" => Some(ConsoleCommand::RemoveDirectory),
            "HELP" => Some(ConsoleCommand::Help),
            "EXIT" => Some(ConsoleCommand::Exit),
            _ => None,
        }
    }

    /// Loop-control tokens take no arguments; everything else needs at
    /// least a target locator.
    pub fn is_loop_control(self) -> bool {
        matches!(self, ConsoleCommand::Help | ConsoleCommand::Exit)
    }
}
