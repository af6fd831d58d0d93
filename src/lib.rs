mod atom;
mod bar;
mod config;
mod context;
mod error;
mod event;
mod monitor;
mod strut;

pub use error::{Error, Result};

use log::info;

/// Print the monitor summary, then keep a colored dock bar along the top
/// edge of the current monitor until its window is destroyed.
pub fn start<S>(display_name: S) -> Result<()>
where
    S: Into<Option<&'static str>>,
{
    use event::EventHandler as _;
    use x11rb::connection::Connection as _;

    let ctx = context::init(display_name)?;

    println!("width: {}", ctx.screen_width);

    let mon = monitor::report(&ctx)?;

    let mut bar = bar::Bar::new(ctx.clone(), mon)?;
    bar.show()?;
    // the window must be mapped before the struts are applied
    bar.reserve_space()?;
    info!("bar {:08X} shown on monitor {}", bar.id(), mon.index);

    loop {
        let event = ctx.conn.wait_for_event()?;
        bar.handle_event(event)?;
        ctx.conn.flush()?;
    }
}

/// Print the screen size and the monitor summary.
pub fn moninfo<S>(display_name: S) -> Result<()>
where
    S: Into<Option<&'static str>>,
{
    let ctx = context::init(display_name)?;

    println!("screen size: {} x {}", ctx.screen_width, ctx.screen_height);
    monitor::report(&ctx)?;
    Ok(())
}
