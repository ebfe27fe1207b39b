/*!
# Host Collaborators

Everything a program can reach outside the interpreter: the text console,
the graphics window, sound, files and the network. The runtime only holds
trait objects, so a frontend or a test swaps any of them out.

*/

mod console;
mod file;
mod graphics;
mod network;
mod sound;

pub use console::{Console, MemoryConsole};
pub use file::{FileSystem, LocalFiles};
pub use graphics::{input_constants, Graphics, NullGraphics};
pub use graphics::{MOUSE_LEFT, MOUSE_MIDDLE, MOUSE_RIGHT};
pub use network::{HttpClient, Network};
pub use sound::{SilentSound, Sound};

/// Colour numbers 0-15 as RGB.
pub const PALETTE: [(u8, u8, u8); 16] = [
    (0, 0, 0),
    (0, 0, 170),
    (0, 170, 0),
    (0, 170, 170),
    (170, 0, 0),
    (170, 0, 170),
    (170, 85, 0),
    (170, 170, 170),
    (85, 85, 85),
    (85, 85, 255),
    (85, 255, 85),
    (85, 255, 255),
    (255, 85, 85),
    (255, 85, 255),
    (255, 255, 85),
    (255, 255, 255),
];

/// Colour numbers 0-15 as ANSI colour indexes.
pub const ANSI_COLORS: [u8; 16] = [0, 4, 2, 6, 1, 5, 3, 7, 8, 12, 10, 14, 9, 13, 11, 15];

pub struct Host {
    pub console: Box<dyn Console>,
    pub graphics: Box<dyn Graphics>,
    pub sound: Box<dyn Sound>,
    pub files: Box<dyn FileSystem>,
    pub network: Box<dyn Network>,
}

impl Default for Host {
    fn default() -> Host {
        Host::new(Box::new(MemoryConsole::new()))
    }
}

impl Host {
    /// A console with no window, no sound, the working directory for files
    /// and a real HTTP client.
    pub fn new(console: Box<dyn Console>) -> Host {
        Host {
            console,
            graphics: Box::new(NullGraphics),
            sound: Box::new(SilentSound::new()),
            files: Box::new(LocalFiles::default()),
            network: Box::new(HttpClient::new()),
        }
    }

    pub fn with_graphics(mut self, graphics: Box<dyn Graphics>) -> Host {
        self.graphics = graphics;
        self
    }

    pub fn with_sound(mut self, sound: Box<dyn Sound>) -> Host {
        self.sound = sound;
        self
    }

    pub fn with_files(mut self, files: Box<dyn FileSystem>) -> Host {
        self.files = files;
        self
    }

    pub fn with_network(mut self, network: Box<dyn Network>) -> Host {
        self.network = network;
        self
    }
}
