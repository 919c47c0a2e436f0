pub mod basic_button;
pub mod button;

pub use basic_button::BasicButton;
pub use button::Button;
