use serde::Deserialize;

#[derive(Clone, Copy, Debug, Deserialize, Eq, PartialEq)]
#[serde(rename_all = "snake_case", tag = "command", content = "args")]
pub enum Command {
    ClearField,
    DeleteBackward,
    NextField,
    NextPage,
    PreviousField,
    PreviousPage,
    Quit,
    ScrollDown { count: usize },
    ScrollUp { count: usize },
}
