pub mod animator;
pub mod state;

pub use animator::Animator;
pub use state::AnimationState;
