mod fixed;
pub use fixed::FixedResponseModel;

mod scripted;
pub use scripted::ScriptedModel;
