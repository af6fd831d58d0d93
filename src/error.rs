use thiserror::Error;
use x11rb::errors::ReplyOrIdError;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Terminated by user.")]
    Quit,

    #[error("Cannot connect with the X server.")]
    ConnectionFailed,

    #[error("No screen available.")]
    NoScreen,
    #[error("No monitor available.")]
    NoMonitor,
    #[error("No window is active.")]
    NoActiveWindow,

    #[error(transparent)]
    X11(ReplyOrIdError),

    #[error("Invalid config: {reason}")]
    InvalidConfig { reason: String },
}

pub type Result<T> = std::result::Result<T, Error>;

impl<T: Into<ReplyOrIdError>> From<T> for Error {
    fn from(x: T) -> Error {
        Error::X11(Into::<ReplyOrIdError>::into(x))
    }
}
