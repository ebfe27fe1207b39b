use log::warn;

/// Window, drawing and input polling. The runtime never touches a rendering
/// surface directly; every drawing statement lands here.
///
/// Input is pulled: the runtime calls `pump_events` before every key or
/// mouse read.
pub trait Graphics {
    /// Opens the window. Returns `false` when no window can be shown.
    fn open(&mut self, width: u32, height: u32, title: &str) -> bool;
    fn is_initialized(&self) -> bool;
    fn clear(&mut self);
    fn set_color(&mut self, r: u8, g: u8, b: u8, a: u8);
    fn set_pixel(&mut self, x: i32, y: i32);
    fn draw_line(&mut self, x1: i32, y1: i32, x2: i32, y2: i32);
    fn draw_rect(&mut self, x: i32, y: i32, width: i32, height: i32, filled: bool);
    fn draw_circle(&mut self, x: i32, y: i32, radius: i32, filled: bool);
    fn print(&mut self, text: &str, newline: bool);
    fn locate(&mut self, row: usize, column: usize);
    fn present(&mut self);
    fn pump_events(&mut self) {}
    fn last_key(&mut self) -> i64;
    fn mouse_position(&mut self) -> (i32, i32);
    fn mouse_buttons(&mut self) -> u32;
}

/// No window at all. Text I/O falls back to the console.
#[derive(Debug, Default)]
pub struct NullGraphics;

impl Graphics for NullGraphics {
    fn open(&mut self, width: u32, height: u32, title: &str) -> bool {
        warn!(
            "no graphics backend; cannot open {}x{} window {:?}",
            width, height, title
        );
        false
    }
    fn is_initialized(&self) -> bool {
        false
    }
    fn clear(&mut self) {}
    fn set_color(&mut self, _r: u8, _g: u8, _b: u8, _a: u8) {}
    fn set_pixel(&mut self, _x: i32, _y: i32) {}
    fn draw_line(&mut self, _x1: i32, _y1: i32, _x2: i32, _y2: i32) {}
    fn draw_rect(&mut self, _x: i32, _y: i32, _width: i32, _height: i32, _filled: bool) {}
    fn draw_circle(&mut self, _x: i32, _y: i32, _radius: i32, _filled: bool) {}
    fn print(&mut self, _text: &str, _newline: bool) {}
    fn locate(&mut self, _row: usize, _column: usize) {}
    fn present(&mut self) {}
    fn last_key(&mut self) -> i64 {
        0
    }
    fn mouse_position(&mut self) -> (i32, i32) {
        (0, 0)
    }
    fn mouse_buttons(&mut self) -> u32 {
        0
    }
}

pub const MOUSE_LEFT: u32 = 1;
pub const MOUSE_RIGHT: u32 = 2;
pub const MOUSE_MIDDLE: u32 = 4;

/// Named key and mouse button codes injected into every program as
/// constants. Letters and digits use their lower-case ASCII codes.
pub fn input_constants() -> Vec<(String, f64)> {
    let mut constants: Vec<(String, f64)> = vec![
        ("KEY_ESC#", 27.0),
        ("KEY_ENTER#", 13.0),
        ("KEY_SPACE#", 32.0),
        ("KEY_TAB#", 9.0),
        ("KEY_BACKSPACE#", 8.0),
        ("KEY_RIGHT#", 1_073_741_903.0),
        ("KEY_LEFT#", 1_073_741_904.0),
        ("KEY_DOWN#", 1_073_741_905.0),
        ("KEY_UP#", 1_073_741_906.0),
        ("MOUSE_LEFT#", MOUSE_LEFT as f64),
        ("MOUSE_RIGHT#", MOUSE_RIGHT as f64),
        ("MOUSE_MIDDLE#", MOUSE_MIDDLE as f64),
    ]
    .into_iter()
    .map(|(name, code)| (name.to_string(), code))
    .collect();
    for ch in ('A'..='Z').chain('0'..='9') {
        let code = ch.to_ascii_lowercase() as u32 as f64;
        constants.push((format!("KEY_{}#", ch), code));
    }
    constants
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_input_constants() {
        let constants = input_constants();
        let get = |name: &str| constants.iter().find(|(n, _)| n == name).map(|(_, c)| *c);
        assert_eq!(get("KEY_ESC#"), Some(27.0));
        assert_eq!(get("KEY_A#"), Some(97.0));
        assert_eq!(get("KEY_7#"), Some(55.0));
        assert_eq!(get("MOUSE_MIDDLE#"), Some(4.0));
    }
}
