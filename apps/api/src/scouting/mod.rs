// Scouting summary engine.
// Archetype classification is pure; the only I/O is the generator call in `summary`.

pub mod archetype;
pub mod handlers;
pub mod prompts;
pub mod report;
pub mod summary;
