// src/cli/mod.rs
pub mod parser;

use colored::*;

use crate::error::Result;
use crate::image::{build_image, AssembledImage};
use crate::sector::SECTOR_SIZE;

/// Parse the command line and build the image it describes.
pub fn run() -> Result<()> {
    let cli = parser::Cli::parse();

    println!(
        "{} {} + {} -> {}",
        "Assembling".green().bold(),
        cli.bootstrap.display(),
        cli.payload.display(),
        cli.output.display()
    );

    let image = build_image(&cli.output, &cli.bootstrap, &cli.payload)?;
    print_summary(&image);

    println!(
        "{} {} ({} bytes)",
        "Wrote".green().bold(),
        cli.output.display(),
        image.bytes.len()
    );
    Ok(())
}

fn print_summary(image: &AssembledImage) {
    let layout = &image.layout;
    let box_width = 60;
    let separator = "─".repeat(box_width - 2);

    println!("┌{}┐", separator.cyan());
    print_box_line("REGION      SECTORS", box_width, Color::Yellow, true);
    print_box_line(
        &format!("bootstrap   0..{}", layout.bootstrap_sectors),
        box_width,
        Color::White,
        false,
    );
    print_box_line(
        &format!("metadata    {}", layout.metadata_sector),
        box_width,
        Color::White,
        false,
    );
    print_box_line(
        &format!("  size      {} bytes", image.metadata.payload_size),
        box_width,
        Color::White,
        false,
    );
    print_box_line(
        &format!("  start     {}", image.metadata.payload_start_sector),
        box_width,
        Color::White,
        false,
    );
    let name_prefix = "  name      ";
    let name = elide_front(
        image.metadata.payload_name.as_str(),
        box_width - 3 - name_prefix.len(),
    );
    print_box_line(&format!("{}{}", name_prefix, name), box_width, Color::White, false);
    print_box_line(
        &format!(
            "payload     {}..{}",
            layout.payload_start_sector,
            layout.total_sectors()
        ),
        box_width,
        Color::White,
        false,
    );
    print_box_line(
        &format!(
            "total       {} sectors x {} bytes",
            layout.total_sectors(),
            SECTOR_SIZE
        ),
        box_width,
        Color::Green,
        false,
    );
    println!("└{}┘", separator.cyan());
}

fn print_box_line(text: &str, box_width: usize, color: Color, bold: bool) {
    let padded_text = format!(" {:<width$}", text, width = box_width - 3);

    let mut colored_text = padded_text.color(color);
    if bold {
        colored_text = colored_text.bold();
    }

    println!("│{}│", colored_text);
}

/// Keep the tail of `text` (the file name end of a path) within `max` chars.
fn elide_front(text: &str, max: usize) -> String {
    let len = text.chars().count();
    if len <= max {
        return text.to_string();
    }

    let keep = max.saturating_sub(3);
    let tail: String = text.chars().skip(len - keep).collect();
    format!("...{}", tail)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_short_name_kept() {
        assert_eq!(elide_front("k.bin", 20), "k.bin");
    }

    #[test]
    fn test_long_name_elided_to_width() {
        let name = format!("{}/kernel.elf", "d".repeat(480));
        let elided = elide_front(&name, 45);

        assert_eq!(elided.len(), 45);
        assert!(elided.starts_with("..."));
        assert!(elided.ends_with("/kernel.elf"));
    }
}
