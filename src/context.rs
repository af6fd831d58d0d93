use log::debug;
use std::rc::Rc;

use crate::atom::AtomCollection;
use crate::config::Config;
use crate::error::{Error, Result};

use x11rb::connection::Connection;
use x11rb::protocol::xproto::{AtomEnum, ConnectionExt as _, InputFocus, Window as Wid};
use x11rb::rust_connection::RustConnection;

pub type Context = Rc<ContextInner>;

pub fn init<S>(display_name: S) -> Result<Context>
where
    S: Into<Option<&'static str>>,
{
    let inner = ContextInner::new(display_name)?;
    Ok(Rc::new(inner))
}

#[derive(Debug)]
pub struct ContextInner {
    pub conn: RustConnection,
    pub config: Config,
    pub root: Wid,
    pub screen_width: u16,
    pub screen_height: u16,
    pub atoms: AtomCollection,
}

impl ContextInner {
    fn new<S>(display_name: S) -> Result<Self>
    where
        S: Into<Option<&'static str>>,
    {
        let config = Config::load()?;

        // Connect with the X server
        let conn = RustConnection::connect(display_name.into())
            .map_err(|_| Error::ConnectionFailed)?
            .0;

        // The first screen holds the root window and the virtual desktop size.
        let (root, screen_width, screen_height) = {
            let screen = conn.setup().roots.get(0).ok_or(Error::NoScreen)?;
            (screen.root, screen.width_in_pixels, screen.height_in_pixels)
        };
        debug!("root = {:08X}", root);

        let atoms = AtomCollection::new(&conn)?.reply()?;

        Ok(Self {
            conn,
            config,
            root,
            screen_width,
            screen_height,
            atoms,
        })
    }

    /// The window named by `_NET_ACTIVE_WINDOW` on the root, if any.
    pub fn get_active_window(&self) -> Result<Option<Wid>> {
        let reply = self
            .conn
            .get_property(
                false,
                self.root,
                self.atoms._NET_ACTIVE_WINDOW,
                AtomEnum::WINDOW,
                0,
                1,
            )?
            .reply()?;

        let win = reply.value32().and_then(|mut it| it.next()).unwrap_or(0);
        Ok(if win != 0 { Some(win) } else { None })
    }

    pub fn get_focused_window(&self) -> Result<Option<Wid>> {
        fn is_window(wid: Wid) -> bool {
            wid != InputFocus::POINTER_ROOT.into() && wid != InputFocus::NONE.into()
        }

        let focus = self.conn.get_input_focus()?.reply()?.focus;
        Ok(if is_window(focus) { Some(focus) } else { None })
    }
}
