use dockbar::Error;
use log::{error, info};

fn main() {
    env_logger::init();

    use std::process::exit;

    info!("hello");
    let status = match dockbar::start(None) {
        Ok(()) | Err(Error::Quit) => {
            info!("goodbye");
            0
        }
        Err(err) => {
            error!("{}", err);
            1
        }
    };
    exit(status);
}
