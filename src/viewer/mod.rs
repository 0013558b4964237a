pub mod input;
pub mod scene;
pub mod state;

pub use input::KeyBindings;
pub use scene::Scene;
pub use state::Flow;
