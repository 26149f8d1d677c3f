mod lesson2;
mod lesson4;

pub use lesson2::Lesson2;
pub use lesson4::Lesson4;
