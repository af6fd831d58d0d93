use log::debug;

use x11rb::protocol::randr::ConnectionExt as _;
use x11rb::protocol::xproto::{ConnectionExt as _, Rectangle};

use crate::context::Context;
use crate::error::{Error, Result};

/// Immutable snapshot of one monitor, in virtual-screen coordinates.
/// Indices are 0-based in the order the server reports them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Monitor {
    pub index: usize,
    pub x: i16,
    pub y: i16,
    pub width: u16,
    pub height: u16,
}

impl Monitor {
    fn overlap(&self, rect: &Rectangle) -> i64 {
        let w = ((self.x as i64 + self.width as i64).min(rect.x as i64 + rect.width as i64)
            - (self.x as i64).max(rect.x as i64))
        .max(0);
        let h = ((self.y as i64 + self.height as i64).min(rect.y as i64 + rect.height as i64)
            - (self.y as i64).max(rect.y as i64))
        .max(0);
        w * h
    }

    fn center_distance2(&self, rect: &Rectangle) -> i64 {
        // distance of the doubled centers, to stay in integers
        let dx = (2 * self.x as i64 + self.width as i64) - (2 * rect.x as i64 + rect.width as i64);
        let dy =
            (2 * self.y as i64 + self.height as i64) - (2 * rect.y as i64 + rect.height as i64);
        dx * dx + dy * dy
    }
}

pub fn enumerate(ctx: &Context) -> Result<Vec<Monitor>> {
    let reply = ctx.conn.randr_get_monitors(ctx.root, true)?.reply()?;
    let monitors: Vec<Monitor> = reply
        .monitors
        .iter()
        .enumerate()
        .map(|(index, info)| Monitor {
            index,
            x: info.x,
            y: info.y,
            width: info.width,
            height: info.height,
        })
        .collect();

    if monitors.is_empty() {
        return Err(Error::NoMonitor);
    }
    debug!("monitors = {:?}", monitors);
    Ok(monitors)
}

/// The monitor showing the largest part of `rect`; the one with the nearest
/// center when nothing intersects. `None` only for an empty monitor list.
pub fn monitor_at(rect: &Rectangle, monitors: &[Monitor]) -> Option<usize> {
    let best = monitors.iter().max_by_key(|mon| mon.overlap(rect))?;
    if best.overlap(rect) > 0 {
        return Some(best.index);
    }
    monitors
        .iter()
        .min_by_key(|mon| mon.center_distance2(rect))
        .map(|mon| mon.index)
}

/// The monitor holding the active window.
pub fn current_index(ctx: &Context, monitors: &[Monitor]) -> Result<usize> {
    let win = match ctx.get_active_window()? {
        Some(win) => win,
        None => ctx.get_focused_window()?.ok_or(Error::NoActiveWindow)?,
    };
    debug!("active window = {:08X}", win);

    let geometry = ctx.conn.get_geometry(win)?.reply()?;
    let translated = ctx
        .conn
        .translate_coordinates(win, ctx.root, 0, 0)?
        .reply()?;
    let rect = Rectangle {
        x: translated.dst_x,
        y: translated.dst_y,
        width: geometry.width,
        height: geometry.height,
    };
    debug!("active window rect = {:?}", rect);

    monitor_at(&rect, monitors).ok_or(Error::NoMonitor)
}

fn summary_lines(monitors: &[Monitor]) -> Vec<String> {
    let mut lines = vec![format!("there are {} monitors", monitors.len())];
    for mon in monitors {
        lines.push(format!("monitor {}: {} x {}", mon.index, mon.width, mon.height));
    }
    lines
}

/// Print the monitor summary and return the current monitor.
pub fn report(ctx: &Context) -> Result<Monitor> {
    let monitors = enumerate(ctx)?;
    for line in summary_lines(&monitors) {
        println!("{}", line);
    }

    let current = current_index(ctx, &monitors)?;
    let mon = monitors[current];
    println!(
        "monitor {}: {} x {} (current)",
        mon.index, mon.width, mon.height
    );
    Ok(mon)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mon(index: usize, x: i16, y: i16, width: u16, height: u16) -> Monitor {
        Monitor {
            index,
            x,
            y,
            width,
            height,
        }
    }

    fn rect(x: i16, y: i16, width: u16, height: u16) -> Rectangle {
        Rectangle {
            x,
            y,
            width,
            height,
        }
    }

    fn dual() -> Vec<Monitor> {
        vec![mon(0, 0, 0, 1920, 1080), mon(1, 1920, 0, 1280, 1024)]
    }

    #[test]
    fn picks_the_monitor_showing_the_window() {
        assert_eq!(monitor_at(&rect(100, 100, 640, 480), &dual()), Some(0));
        assert_eq!(monitor_at(&rect(2000, 100, 640, 480), &dual()), Some(1));
    }

    #[test]
    fn largest_overlap_wins_for_a_straddling_window() {
        // 120 px on monitor 0, 80 px on monitor 1
        assert_eq!(monitor_at(&rect(1800, 0, 200, 100), &dual()), Some(0));
        // 40 px on monitor 0, 160 px on monitor 1
        assert_eq!(monitor_at(&rect(1880, 0, 200, 100), &dual()), Some(1));
    }

    #[test]
    fn nearest_center_when_nothing_intersects() {
        assert_eq!(monitor_at(&rect(4000, 0, 100, 100), &dual()), Some(1));
        assert_eq!(monitor_at(&rect(-500, 0, 100, 100), &dual()), Some(0));
    }

    #[test]
    fn single_monitor_always_wins() {
        let monitors = vec![mon(0, 0, 0, 1920, 1080)];
        assert_eq!(monitor_at(&rect(5000, 5000, 10, 10), &monitors), Some(0));
    }

    #[test]
    fn empty_monitor_list_has_no_answer() {
        assert_eq!(monitor_at(&rect(0, 0, 10, 10), &[]), None);
    }

    #[test]
    fn result_is_a_valid_index() {
        let monitors = dual();
        for x in [-2000i16, 0, 1000, 1920, 3000, 5000] {
            let index = monitor_at(&rect(x, 0, 300, 300), &monitors).unwrap();
            assert!(index < monitors.len());
        }
    }

    #[test]
    fn summary_has_one_line_per_monitor() {
        let lines = summary_lines(&dual());
        assert_eq!(
            lines,
            vec![
                "there are 2 monitors".to_owned(),
                "monitor 0: 1920 x 1080".to_owned(),
                "monitor 1: 1280 x 1024".to_owned(),
            ]
        );
    }
}
