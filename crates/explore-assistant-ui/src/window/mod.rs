mod assistant_window;

pub use assistant_window::AssistantWindow;
