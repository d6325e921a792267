//! Voice input: continuous capture, Whisper transcription, and the
//! "add todo" command interpreter

mod capture;
mod interpreter;
mod whisper;

#[cfg(test)]
mod interpreter_tests;

pub use capture::*;
pub use interpreter::*;
pub use whisper::*;
