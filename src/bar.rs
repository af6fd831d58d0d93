use log::debug;

use x11rb::connection::Connection;
use x11rb::protocol::xproto::{Window as Wid, *};
use x11rb::wrapper::ConnectionExt as _;

use crate::context::Context;
use crate::error::{Error, Result};
use crate::event::EventHandlerMethods;
use crate::monitor::Monitor;
use crate::strut::Strut;

// _MOTIF_WM_HINTS: the decorations flag, with decorations disabled.
const MOTIF_HINTS_UNDECORATED: [u32; 5] = [2, 0, 0, 0, 0];

/// The dock window spanning the top edge of one monitor.
pub struct Bar {
    ctx: Context,
    wid: Wid,
    mon: Monitor,
}

impl Bar {
    pub fn new(ctx: Context, mon: Monitor) -> Result<Self> {
        let wid = ctx.conn.generate_id()?;
        let aux = CreateWindowAux::new()
            .background_pixel(ctx.config.color)
            .event_mask(EventMask::EXPOSURE | EventMask::STRUCTURE_NOTIFY);
        ctx.conn.create_window(
            x11rb::COPY_DEPTH_FROM_PARENT,
            wid,
            ctx.root,
            mon.x,
            mon.y,
            mon.width,
            ctx.config.height,
            0,
            WindowClass::INPUT_OUTPUT,
            x11rb::COPY_FROM_PARENT,
            &aux,
        )?;
        debug!(
            "window={} created: ({}, {}) {}x{}",
            wid, mon.x, mon.y, mon.width, ctx.config.height
        );

        let bar = Self { ctx, wid, mon };
        bar.set_hints()?;
        Ok(bar)
    }

    /// Properties the window manager reads before mapping: the window name,
    /// the dock type, no decorations, and the delete protocol.
    fn set_hints(&self) -> Result<()> {
        let conn = &self.ctx.conn;
        let atoms = &self.ctx.atoms;
        let name = self.ctx.config.name.as_bytes();

        conn.change_property8(
            PropMode::REPLACE,
            self.wid,
            AtomEnum::WM_NAME,
            AtomEnum::STRING,
            name,
        )?;
        conn.change_property8(
            PropMode::REPLACE,
            self.wid,
            atoms._NET_WM_NAME,
            atoms.UTF8_STRING,
            name,
        )?;

        conn.change_property32(
            PropMode::REPLACE,
            self.wid,
            atoms._NET_WM_WINDOW_TYPE,
            AtomEnum::ATOM,
            &[atoms._NET_WM_WINDOW_TYPE_DOCK],
        )?;

        conn.change_property32(
            PropMode::REPLACE,
            self.wid,
            atoms._MOTIF_WM_HINTS,
            atoms._MOTIF_WM_HINTS,
            &MOTIF_HINTS_UNDECORATED,
        )?;

        conn.change_property32(
            PropMode::REPLACE,
            self.wid,
            atoms.WM_PROTOCOLS,
            AtomEnum::ATOM,
            &[atoms.WM_DELETE_WINDOW],
        )?;

        Ok(())
    }

    pub fn show(&self) -> Result<()> {
        self.ctx.conn.map_window(self.wid)?;
        self.ctx.conn.flush()?;
        Ok(())
    }

    /// Reserve the bar's screen space so maximized windows do not cover it.
    /// Must be called on the mapped window. Both strut forms are set; window
    /// managers that understand the partial form ignore the legacy one.
    pub fn reserve_space(&self) -> Result<()> {
        let strut = Strut::top_of(&self.mon, self.ctx.config.height);
        debug!("strut = {:?}", strut);

        let conn = &self.ctx.conn;
        let atoms = &self.ctx.atoms;
        conn.change_property32(
            PropMode::REPLACE,
            self.wid,
            atoms._NET_WM_STRUT,
            AtomEnum::CARDINAL,
            &strut.legacy(),
        )?;
        conn.change_property32(
            PropMode::REPLACE,
            self.wid,
            atoms._NET_WM_STRUT_PARTIAL,
            AtomEnum::CARDINAL,
            &strut.partial(),
        )?;
        conn.flush()?;
        Ok(())
    }

    pub fn id(&self) -> Wid {
        self.wid
    }
}

impl EventHandlerMethods for Bar {
    fn on_expose(&mut self, _e: ExposeEvent) -> Result<()> {
        // the server repaints the background pixel
        Ok(())
    }

    fn on_client_message(&mut self, e: ClientMessageEvent) -> Result<()> {
        if e.window == self.wid
            && e.type_ == self.ctx.atoms.WM_PROTOCOLS
            && e.data.as_data32()[0] == self.ctx.atoms.WM_DELETE_WINDOW
        {
            debug!("WM_DELETE_WINDOW --> {:08X}", self.wid);
            self.ctx.conn.destroy_window(self.wid)?;
        }
        Ok(())
    }

    fn on_destroy_notify(&mut self, e: DestroyNotifyEvent) -> Result<()> {
        if e.window == self.wid {
            return Err(Error::Quit);
        }
        Ok(())
    }
}
