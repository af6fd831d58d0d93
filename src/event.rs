use crate::error::Result;
use log::{trace, warn};

use x11rb::protocol::{xproto::*, Event};

pub trait EventHandler {
    fn handle_event(&mut self, event: Event) -> Result<()>;
}

macro_rules! event_handler_ignore {
    ($method_name:ident, $event_type:ty) => {
        fn $method_name(&mut self, e: $event_type) -> Result<()> {
            trace!("(default) {}: Ignore {:?}", stringify!($method_name), e);
            Ok(())
        }
    };
}

pub trait EventHandlerMethods {
    event_handler_ignore!(on_expose, ExposeEvent);
    event_handler_ignore!(on_map_notify, MapNotifyEvent);
    event_handler_ignore!(on_unmap_notify, UnmapNotifyEvent);
    event_handler_ignore!(on_destroy_notify, DestroyNotifyEvent);
    event_handler_ignore!(on_reparent_notify, ReparentNotifyEvent);
    event_handler_ignore!(on_configure_notify, ConfigureNotifyEvent);
    event_handler_ignore!(on_client_message, ClientMessageEvent);
}

impl<T: EventHandlerMethods> EventHandler for T {
    fn handle_event(&mut self, event: Event) -> Result<()> {
        trace!("event: {:?}", event);
        match event {
            Event::Expose(e) => self.on_expose(e),
            Event::MapNotify(e) => self.on_map_notify(e),
            Event::UnmapNotify(e) => self.on_unmap_notify(e),
            Event::DestroyNotify(e) => self.on_destroy_notify(e),
            Event::ReparentNotify(e) => self.on_reparent_notify(e),
            Event::ConfigureNotify(e) => self.on_configure_notify(e),
            Event::ClientMessage(e) => self.on_client_message(e),
            e => {
                warn!("unhandled event: {:?}", e);
                Ok(())
            }
        }
    }
}
