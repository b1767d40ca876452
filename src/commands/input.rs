//! Saved input command implementation

use crate::{
    cli::InputCmd,
    storage::{KeyValueStore, UserState},
    Result,
};

pub fn handle_input<S: KeyValueStore>(cmd: &InputCmd, state: &mut UserState<S>) -> Result<String> {
    match cmd {
        InputCmd::Show => state.load_input(),
        InputCmd::Clear => {
            state.save_input("")?;
            Ok("✓ Saved input cleared".to_string())
        }
    }
}
