mod game_state;
mod seeding;

pub use game_state::GameState;
pub use seeding::{default_seed_count, seed_gliders, seeded_rng};
