//! Engine-independent session state: the player, the terminals, the dialog and the input flags.
pub mod body;
pub mod dialog;
pub mod input;
pub mod interaction_loop;
pub mod zone;

pub use body::MovableBody;
pub use input::{Direction, InputKey};
pub use interaction_loop::{ClickToMove, DialogChange, InteractionLoop, SessionSetup};
pub use zone::{ProximityTest, Zone};
