mod play;
mod replay;
mod sweep;

pub use play::run_play;
pub use replay::run_replay;
pub use sweep::run_sweep;
