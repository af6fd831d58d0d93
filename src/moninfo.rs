use log::error;

fn main() {
    env_logger::init();

    use std::process::exit;

    let status = match dockbar::moninfo(None) {
        Ok(()) => 0,
        Err(err) => {
            error!("{}", err);
            1
        }
    };
    exit(status);
}
