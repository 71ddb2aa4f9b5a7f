use crate::device_display::interface::DeviceDisplay;
use crate::landmark::HandSet;
use std::error::Error;

const COLUMNS: usize = 16;
const ROWS: usize = 2;

/// Two-line text panel printed to stdout whenever its content changes.
pub struct DeviceDisplayConsole {
    display_buffer: [[char; COLUMNS]; ROWS],
    rendered: usize,
}

impl DeviceDisplayConsole {
    pub fn new() -> Self {
        Self {
            display_buffer: [[' '; COLUMNS]; ROWS],
            rendered: 0,
        }
    }

    /// Number of times the panel was printed.
    pub fn rendered(&self) -> usize {
        self.rendered
    }

    pub fn line(&self, row: usize) -> String {
        self.display_buffer[row].iter().collect::<String>().trim_end().to_string()
    }

    fn write_line(&mut self, row: usize, text: &str) -> bool {
        let mut line = [' '; COLUMNS];
        for (i, c) in text.chars().take(COLUMNS).enumerate() {
            line[i] = c;
        }
        let changed = self.display_buffer[row] != line;
        self.display_buffer[row] = line;
        changed
    }

    fn print(&mut self) {
        self.rendered += 1;
        println!("┌────────────────┐");
        for row in &self.display_buffer {
            print!("│");
            for &c in row {
                print!("{}", c);
            }
            println!("│");
        }
        println!("└────────────────┘");
    }
}

impl Default for DeviceDisplayConsole {
    fn default() -> Self {
        Self::new()
    }
}

impl DeviceDisplay for DeviceDisplayConsole {
    fn init(&mut self) -> Result<(), Box<dyn Error + Send + Sync>> {
        self.write_line(0, "Waiting...");
        self.write_line(1, "hands: 0");
        self.print();
        Ok(())
    }

    fn render(
        &mut self,
        hands: &HandSet,
        label: Option<&str>,
    ) -> Result<(), Box<dyn Error + Send + Sync>> {
        let label_changed = self.write_line(0, label.unwrap_or("..."));
        let hands_changed = self.write_line(1, &format!("hands: {}", hands.len()));
        if label_changed || hands_changed {
            self.print();
        }
        Ok(())
    }
}
