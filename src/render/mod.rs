//! Console rendering
//!
//! Draws the finished grid as a boxed ANSI layout: one letter and the
//! grade per room, walls wherever passages are closed. Pure string
//! building; the caller decides where it goes.

use crate::world::{Grid, RoomType};

const RESET: &str = "\u{1b}[0m";
const YELLOW: &str = "\u{1b}[33m";
const RED: &str = "\u{1b}[31m";
const MAGENTA: &str = "\u{1b}[35m";

/// Printed width of one room's interior
const ROOM_WIDTH: usize = 4;

fn room_color(kind: RoomType) -> &'static str {
    match kind {
        RoomType::Entrance | RoomType::Exit => YELLOW,
        RoomType::Monster => RED,
        RoomType::Fake => MAGENTA,
        RoomType::Normal | RoomType::Obstacle => RESET,
    }
}

fn format_room(kind: RoomType, grade: u32) -> String {
    let content = format!("{}{}", kind.glyph(), grade);
    let padding = ROOM_WIDTH.saturating_sub(content.len());
    format!(
        "{}{}{}{}",
        room_color(kind),
        content,
        RESET,
        " ".repeat(padding)
    )
}

/// Render the grid to a string, one boxed row of rooms per grid row.
pub fn render_grid(grid: &Grid) -> String {
    let size = grid.size();
    let mut out = String::new();

    out.push(' ');
    out.push_str(&"_".repeat(size as usize * (ROOM_WIDTH + 1)));
    out.push('\n');

    for y in 0..size {
        let mut room_line = String::from("|");
        let mut wall_line = String::from("|");
        for x in 0..size {
            let room = match grid.room(x, y) {
                Some(room) => room,
                None => continue,
            };
            room_line.push_str(&format_room(room.kind, room.grade));
            room_line.push(if room.passages.right { ' ' } else { '|' });

            let below = if room.passages.down { ' ' } else { '_' };
            wall_line.push_str(&below.to_string().repeat(ROOM_WIDTH));
            wall_line.push(if room.passages.down && room.passages.right {
                ' '
            } else {
                '|'
            });
        }
        out.push_str(&room_line);
        out.push('\n');
        out.push_str(&wall_line);
        out.push('\n');
    }

    out
}
