pub mod backdrop;
pub mod content;
pub mod error;
pub mod interaction;
pub mod listeners;
pub mod model;
pub mod motion;
pub mod particles;
pub mod section;
pub mod typewriter;
pub mod viewport;
